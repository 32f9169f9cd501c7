use crate::domain::model::CopyReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Describes where the staging source and its destinations live, relative to
/// the anchor directory. Implemented by both the CLI and the TOML layout
/// file; the plan builder merges them with CLI values taking precedence.
pub trait LayoutProvider: Send + Sync {
    fn source_subpath(&self) -> Option<&str>;

    /// Destination subpaths below the anchor, in copy order. Empty means
    /// this provider does not specify destinations.
    fn destination_subpaths(&self) -> Vec<PathBuf>;
}

#[async_trait]
pub trait Replicator: Send + Sync {
    /// Mirrors `source` into `destination` by unconditional overwrite,
    /// creating missing directories. Never deletes destination files absent
    /// from the source.
    async fn replicate(&self, source: &Path, destination: &Path) -> Result<CopyReport>;
}
