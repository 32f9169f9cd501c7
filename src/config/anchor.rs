use crate::utils::error::{Result, StageError};
use std::path::{Path, PathBuf};

/// Resolves the anchor directory all other paths hang off. An explicit
/// `--anchor` wins; otherwise it is derived as two levels above the running
/// executable, which matches the original zero-argument invocation from a
/// tool directory next to the repository root.
pub fn resolve_anchor(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let exe = std::env::current_exe()
        .map_err(|e| StageError::from_io("locating", Path::new("current executable"), e))?;
    let anchor = exe
        .parent()
        .and_then(|dir| dir.parent())
        .ok_or_else(|| StageError::ConfigError {
            message: format!(
                "cannot derive an anchor from executable path {}; pass --anchor",
                exe.display()
            ),
        })?;

    tracing::debug!("derived anchor {} from executable location", anchor.display());
    Ok(anchor.to_path_buf())
}
