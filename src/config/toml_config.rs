use crate::domain::ports::LayoutProvider;
use crate::utils::error::{Result, StageError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// TOML layout file describing where the staging source and its destinations
/// live relative to the anchor. CLI flags take precedence over every value
/// in here.
///
/// ```toml
/// [staging]
/// source = "dependencies"
/// description = "Native libraries required at compile time"
///
/// [project]
/// name = "Simplic.CDN.CSharp"
/// configurations = ["Debug", "Release"]
///
/// [[target]]
/// path = "tools/fixtures/bin"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub staging: Option<StagingConfig>,
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetConfig>,
    pub project: Option<ProjectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    pub source: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub configurations: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StageError::from_io("reading layout file", path, e))?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl LayoutProvider for TomlConfig {
    fn source_subpath(&self) -> Option<&str> {
        self.staging.as_ref().and_then(|s| s.source.as_deref())
    }

    fn destination_subpaths(&self) -> Vec<PathBuf> {
        let mut destinations: Vec<PathBuf> =
            self.targets.iter().map(|t| PathBuf::from(&t.path)).collect();
        if let Some(project) = &self.project {
            let configurations = project
                .configurations
                .clone()
                .unwrap_or_else(|| vec!["Debug".to_string(), "Release".to_string()]);
            destinations.extend(
                configurations
                    .iter()
                    .map(|c| Path::new("src").join(&project.name).join("bin").join(c)),
            );
        }
        destinations
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = self.source_subpath() {
            validate_path("staging.source", source)?;
        }
        for target in &self.targets {
            validate_path("target.path", &target.path)?;
        }
        if let Some(project) = &self.project {
            validate_non_empty_string("project.name", &project.name)?;
            if let Some(configurations) = &project.configurations {
                for configuration in configurations {
                    validate_non_empty_string("project.configurations", configuration)?;
                }
            }
        }
        if self.targets.is_empty() && self.project.is_none() {
            return Err(StageError::ConfigError {
                message: "layout file declares no [[target]] and no [project]".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_targets_and_project_shorthand() {
        let config: TomlConfig = toml::from_str(
            r#"
            [staging]
            source = "deps"

            [project]
            name = "App"

            [[target]]
            path = "tools/bin"
            "#,
        )
        .unwrap();

        assert_eq!(config.source_subpath(), Some("deps"));
        assert_eq!(
            config.destination_subpaths(),
            vec![
                PathBuf::from("tools/bin"),
                PathBuf::from("src/App/bin/Debug"),
                PathBuf::from("src/App/bin/Release"),
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_without_destinations_fails_validation() {
        let config: TomlConfig = toml::from_str(
            r#"
            [staging]
            source = "deps"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(StageError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_a_filesystem_error() {
        let result = TomlConfig::from_file(Path::new("/no/such/layout.toml"));
        assert!(matches!(result, Err(StageError::Io { .. })));
    }
}
