pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::toml_config::TomlConfig;
pub use config::{CliConfig, ReportFormat};
pub use core::engine::StageEngine;
pub use core::plan::build_plan;
pub use core::replicator::FsReplicator;
pub use domain::model::{CopyPlan, CopyReport, RunSummary};
pub use domain::ports::{LayoutProvider, Replicator};
pub use utils::error::{Result, StageError};
