//! Domain layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for summary aggregation)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A closed list option was assigned a value outside its allowed set.
    #[error(
        "{config}: invalid value '{value}' for {key}. Valid options: {}",
        .allowed.join(", ")
    )]
    InvalidOption {
        config: String,
        key: String,
        value: String,
        allowed: Vec<String>,
    },

    /// A configuration was selected by name but the file does not define it.
    #[error("configuration '{name}' not found")]
    UnknownConfig {
        name: String,
        available: Vec<String>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption {
                key,
                value,
                allowed,
                ..
            } => vec![
                format!("'{}' is not an allowed value for {}", value, key),
                format!("Allowed values: {}", allowed.join(", ")),
                "Fix the assignment in your configurations file".into(),
            ],
            Self::UnknownConfig { available, .. } => {
                let mut suggestions = vec!["Available configurations:".to_string()];
                for name in available {
                    suggestions.push(format!("  • {name}"));
                }
                suggestions.push("Use 'proofer list-configs' to see descriptions".into());
                suggestions
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOption { .. } => ErrorCategory::Validation,
            Self::UnknownConfig { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
