use crate::config::anchor::resolve_anchor;
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::domain::model::CopyPlan;
use crate::domain::ports::LayoutProvider;
use crate::utils::error::{Result, StageError};
use crate::utils::validation::Validate;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_SUBPATH: &str = "dependencies";

/// Merges the CLI flags with an optional TOML layout file into a resolved
/// plan. CLI values win over file values; the source directory is verified
/// here so Not-Found fires before any destination is touched.
pub fn build_plan(config: &CliConfig) -> Result<CopyPlan> {
    let layout_file = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let anchor = resolve_anchor(config.anchor.as_deref())?;

    let source_subpath = config
        .source_subpath()
        .or_else(|| layout_file.as_ref().and_then(|f| f.source_subpath()))
        .unwrap_or(DEFAULT_SOURCE_SUBPATH)
        .to_string();

    let mut destinations = config.destination_subpaths();
    if destinations.is_empty() {
        if let Some(file) = &layout_file {
            destinations = file.destination_subpaths();
        }
    }
    if destinations.is_empty() {
        return Err(StageError::MissingConfigError {
            field: "--dest, --project or a [[target]] entry in the layout file".to_string(),
        });
    }

    let source = anchor.join(&source_subpath);
    let destinations: Vec<PathBuf> = destinations.iter().map(|d| anchor.join(d)).collect();

    match fs::metadata(&source) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(StageError::InvalidConfigValueError {
                field: "source".to_string(),
                value: source.display().to_string(),
                reason: "not a directory".to_string(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StageError::SourceNotFound { path: source })
        }
        Err(e) => return Err(StageError::from_io("inspecting", &source, e)),
    }

    for destination in &destinations {
        if destination == &source {
            return Err(StageError::InvalidConfigValueError {
                field: "dest".to_string(),
                value: destination.display().to_string(),
                reason: "destination equals the source directory".to_string(),
            });
        }
    }

    tracing::debug!(
        "resolved plan: {} -> {} destination(s)",
        source.display(),
        destinations.len()
    );

    Ok(CopyPlan {
        source,
        destinations,
    })
}
