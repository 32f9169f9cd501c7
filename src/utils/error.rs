use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("permission denied while {operation} {path}")]
    PermissionDenied { operation: String, path: PathBuf },

    #[error("{operation} {path} failed: {source}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("layout file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("report serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StageError {
    /// Classifies a raw io error for `operation` on `path` into the error
    /// taxonomy: permission denied gets its own variant, everything else is
    /// a plain filesystem failure. Not-Found is only meaningful for the
    /// staging source and is mapped by the caller that checks it.
    pub fn from_io(operation: &str, path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => StageError::PermissionDenied {
                operation: operation.to_string(),
                path: path.to_path_buf(),
            },
            _ => StageError::Io {
                operation: operation.to_string(),
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Process exit code surfaced to the invoking build. Distinct failure
    /// kinds stay distinguishable.
    pub fn exit_code(&self) -> i32 {
        match self {
            StageError::SourceNotFound { .. } => 1,
            StageError::PermissionDenied { .. } => 2,
            StageError::Io { .. } | StageError::IoError(_) | StageError::SerializationError(_) => 3,
            StageError::TomlError(_)
            | StageError::ConfigError { .. }
            | StageError::InvalidConfigValueError { .. }
            | StageError::MissingConfigError { .. } => 4,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StageError::SourceNotFound { .. }
            | StageError::PermissionDenied { .. }
            | StageError::Io { .. }
            | StageError::IoError(_) => ErrorCategory::Filesystem,
            StageError::SerializationError(_) => ErrorCategory::Serialization,
            StageError::TomlError(_)
            | StageError::ConfigError { .. }
            | StageError::InvalidConfigValueError { .. }
            | StageError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StageError::PermissionDenied { .. } => ErrorSeverity::Critical,
            StageError::SourceNotFound { .. } | StageError::Io { .. } | StageError::IoError(_) => {
                ErrorSeverity::High
            }
            StageError::SerializationError(_) => ErrorSeverity::Medium,
            StageError::TomlError(_)
            | StageError::ConfigError { .. }
            | StageError::InvalidConfigValueError { .. }
            | StageError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StageError::SourceNotFound { path } => {
                format!("The dependency directory {} does not exist", path.display())
            }
            StageError::PermissionDenied { operation, path } => {
                format!("Access was denied while {} {}", operation, path.display())
            }
            StageError::Io {
                operation,
                path,
                source,
            } => format!(
                "A filesystem error occurred while {} {}: {}",
                operation,
                path.display(),
                source
            ),
            StageError::IoError(e) => format!("A filesystem error occurred: {}", e),
            StageError::TomlError(e) => format!("The layout file could not be parsed: {}", e),
            StageError::SerializationError(e) => {
                format!("The run report could not be serialized: {}", e)
            }
            StageError::ConfigError { message } => format!("Configuration problem: {}", message),
            StageError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
            StageError::MissingConfigError { field } => {
                format!("Missing required configuration: {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StageError::SourceNotFound { .. } => {
                "Check the anchor directory and --source value; the dependency directory must exist before staging"
                    .to_string()
            }
            StageError::PermissionDenied { .. } => {
                "Check filesystem permissions on the reported path".to_string()
            }
            StageError::Io { .. } | StageError::IoError(_) => {
                "Check free disk space and that the reported path is accessible".to_string()
            }
            StageError::TomlError(_) => "Review the layout file for syntax errors".to_string(),
            StageError::SerializationError(_) => {
                "Re-run with --report text to skip JSON output".to_string()
            }
            StageError::ConfigError { .. }
            | StageError::InvalidConfigValueError { .. }
            | StageError::MissingConfigError { .. } => {
                "Review the command line flags and layout file; run with --help for usage"
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_io_classifies_permission_denied() {
        let err = StageError::from_io(
            "reading directory",
            Path::new("/locked"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, StageError::PermissionDenied { .. }));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_from_io_other_kinds_stay_io() {
        let err = StageError::from_io(
            "copying file",
            Path::new("/full/disk"),
            io::Error::other("disk full"),
        );
        assert!(matches!(err, StageError::Io { .. }));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    #[test]
    fn test_exit_codes_are_distinct_per_failure_kind() {
        let not_found = StageError::SourceNotFound {
            path: "/missing".into(),
        };
        let config = StageError::MissingConfigError {
            field: "--dest".to_string(),
        };
        assert_eq!(not_found.exit_code(), 1);
        assert_eq!(config.exit_code(), 4);
        assert_eq!(config.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_messages_name_the_failing_path() {
        let err = StageError::SourceNotFound {
            path: "/build/dependencies".into(),
        };
        assert!(err.user_friendly_message().contains("/build/dependencies"));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
