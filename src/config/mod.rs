pub mod anchor;
pub mod toml_config;

use crate::domain::ports::LayoutProvider;
use crate::utils::error::{Result, StageError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "depcopy")]
#[command(about = "Stages a dependency directory into build output directories before compiling")]
pub struct CliConfig {
    /// Base directory all other paths are resolved against; defaults to two
    /// levels above the executable
    #[arg(long)]
    pub anchor: Option<PathBuf>,

    /// Source subpath below the anchor (default: dependencies)
    #[arg(long)]
    pub source: Option<String>,

    /// Project name, shorthand for src/<NAME>/bin/<CONFIGURATION> destinations
    #[arg(long)]
    pub project: Option<String>,

    /// Build configurations used with --project (default: Debug,Release)
    #[arg(long = "configuration", value_delimiter = ',')]
    pub configurations: Vec<String>,

    /// Explicit destination subpaths; overrides --project
    #[arg(long = "dest", value_delimiter = ',')]
    pub destinations: Vec<String>,

    /// TOML layout file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run summary format on stdout
    #[arg(long, value_enum, default_value = "text")]
    pub report: ReportFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl LayoutProvider for CliConfig {
    fn source_subpath(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn destination_subpaths(&self) -> Vec<PathBuf> {
        if !self.destinations.is_empty() {
            return self.destinations.iter().map(PathBuf::from).collect();
        }
        if let Some(project) = &self.project {
            let configurations = if self.configurations.is_empty() {
                vec!["Debug".to_string(), "Release".to_string()]
            } else {
                self.configurations.clone()
            };
            return configurations
                .iter()
                .map(|c| Path::new("src").join(project).join("bin").join(c))
                .collect();
        }
        Vec::new()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = &self.source {
            validate_path("source", source)?;
        }
        if let Some(project) = &self.project {
            validate_non_empty_string("project", project)?;
        }
        for destination in &self.destinations {
            validate_path("dest", destination)?;
        }
        for configuration in &self.configurations {
            validate_non_empty_string("configuration", configuration)?;
        }
        if !self.configurations.is_empty() && self.project.is_none() && self.destinations.is_empty()
        {
            return Err(StageError::ConfigError {
                message: "--configuration requires --project".to_string(),
            });
        }
        if self.project.is_none() && self.destinations.is_empty() && self.config.is_none() {
            return Err(StageError::MissingConfigError {
                field: "--dest, --project or --config".to_string(),
            });
        }
        Ok(())
    }
}
