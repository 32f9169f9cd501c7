use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved staging plan: one source directory and the destinations it is
/// mirrored into, in copy order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyPlan {
    pub source: PathBuf,
    pub destinations: Vec<PathBuf>,
}

/// Counters for one destination copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyReport {
    pub destination: PathBuf,
    pub files_copied: u64,
    pub dirs_created: u64,
    pub bytes_copied: u64,
}

impl CopyReport {
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            files_copied: 0,
            dirs_created: 0,
            bytes_copied: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub source: PathBuf,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub reports: Vec<CopyReport>,
}

impl RunSummary {
    pub fn total_files(&self) -> u64 {
        self.reports.iter().map(|r| r.files_copied).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.reports.iter().map(|r| r.bytes_copied).sum()
    }
}
