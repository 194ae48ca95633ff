//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template's option schema file is absent.
    #[error("schema file not found: {path}")]
    SchemaNotFound { path: PathBuf },

    /// The option schema file exists but could not be parsed.
    #[error("failed to parse schema {path}: {reason}")]
    SchemaParse { path: PathBuf, reason: String },

    /// The named-configurations file is absent.
    #[error("configurations file not found: {path}")]
    ConfigsNotFound { path: PathBuf },

    /// The named-configurations file exists but could not be parsed.
    #[error("failed to parse configurations {path}: {reason}")]
    ConfigsParse { path: PathBuf, reason: String },

    /// The configurations document is not a mapping. An empty document lands
    /// here too: it parses to null, which must not be coerced to zero
    /// configurations.
    #[error("configurations file {path} must be a mapping of name to values")]
    ConfigsNotMapping { path: PathBuf },

    /// Project directory already exists under the `fail` strategy.
    #[error("project directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// The engine binary could not be found on PATH.
    #[error("generation engine '{program}' not found")]
    EngineNotFound { program: String },

    /// The engine exited non-zero; stderr is captured verbatim.
    #[error("generation failed: {stderr}")]
    GenerationFailed { stderr: String },

    /// The engine ran past the configured deadline and was killed.
    #[error("generation timed out after {seconds}s")]
    GenerationTimeout { seconds: u64 },

    /// Generated project is missing files that must exist at its root.
    #[error("generated project missing critical files: {}", .files.join(", "))]
    MissingCriticalFiles { files: Vec<String> },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SchemaNotFound { path } => vec![
                format!("Expected the option schema at: {}", path.display()),
                "Point --template-dir at the template root".into(),
            ],
            Self::ConfigsNotFound { path } => vec![
                format!("Expected the configurations file at: {}", path.display()),
                "Pass --configs-file to use a different location".into(),
            ],
            Self::ConfigsNotMapping { .. } => vec![
                "The file must map configuration names to option values".into(),
                "An empty document is an error, not zero configurations".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --exists clean to remove it first".into(),
                "Use --exists skip to leave it untouched".into(),
            ],
            Self::EngineNotFound { program } => vec![
                format!("'{}' is not on your PATH", program),
                "Install the generation engine (e.g. pipx install cookiecutter)".into(),
                "Or set PROOFER_ENGINE to the binary to use".into(),
            ],
            Self::GenerationFailed { .. } => vec![
                "The engine's stderr is shown above".into(),
                "Re-run with -vv to see the full command line".into(),
            ],
            Self::GenerationTimeout { seconds } => vec![
                format!("The engine was killed after {}s", seconds),
                "Raise --timeout if the template legitimately takes longer".into(),
            ],
            Self::MissingCriticalFiles { files } => vec![
                format!("Missing: {}", files.join(", ")),
                "The template did not produce its required root files".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SchemaNotFound { .. }
            | Self::SchemaParse { .. }
            | Self::ConfigsNotFound { .. }
            | Self::ConfigsParse { .. }
            | Self::ConfigsNotMapping { .. }
            | Self::EngineNotFound { .. } => ErrorCategory::Configuration,
            Self::AlreadyExists { .. } | Self::MissingCriticalFiles { .. } => {
                ErrorCategory::Validation
            }
            Self::GenerationFailed { .. }
            | Self::GenerationTimeout { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }

}
