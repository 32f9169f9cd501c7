use crate::domain::model::{CopyPlan, RunSummary};
use crate::domain::ports::Replicator;
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Instant;

/// Drives one staging run: mirrors the plan's source into every destination,
/// strictly in plan order. The first failure aborts the remaining
/// destinations; completed ones keep their state (no rollback).
pub struct StageEngine<R: Replicator> {
    replicator: R,
}

impl<R: Replicator> StageEngine<R> {
    pub fn new(replicator: R) -> Self {
        Self { replicator }
    }

    pub async fn run(&self, plan: &CopyPlan) -> Result<RunSummary> {
        let started_at = Utc::now();
        let clock = Instant::now();

        tracing::info!(
            "Staging {} into {} destination(s)",
            plan.source.display(),
            plan.destinations.len()
        );

        let mut reports = Vec::with_capacity(plan.destinations.len());
        for destination in &plan.destinations {
            tracing::info!("Copying into {}", destination.display());
            let report = self.replicator.replicate(&plan.source, destination).await?;
            tracing::info!(
                "Copied {} file(s), {} bytes into {}",
                report.files_copied,
                report.bytes_copied,
                destination.display()
            );
            reports.push(report);
        }

        Ok(RunSummary {
            source: plan.source.clone(),
            started_at,
            elapsed_ms: clock.elapsed().as_millis() as u64,
            reports,
        })
    }
}
