//! Strategies for handling pre-existing output.

use std::fmt;

/// What to do when a configuration's project directory already exists.
///
/// Exactly one strategy is active per batch run; it is supplied by the caller
/// and applied unchanged to every configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistsStrategy {
    /// Remove the existing directory tree, then proceed.
    #[default]
    Clean,
    /// Leave it untouched and skip the configuration.
    Skip,
    /// Abort the configuration with an error.
    Fail,
}

impl fmt::Display for ExistsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Skip => write!(f, "skip"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Outcome of conflict resolution for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceedDecision {
    /// Generation may go ahead.
    Proceed,
    /// Pre-existing output is kept; do not generate.
    Skip,
}
