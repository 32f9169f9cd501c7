pub mod engine;
pub mod plan;
pub mod replicator;

pub use crate::domain::model::{CopyPlan, CopyReport, RunSummary};
pub use crate::domain::ports::{LayoutProvider, Replicator};
pub use crate::utils::error::Result;
