//! Structural validation report.

use serde::Serialize;

/// What structural validation found in one generated project.
///
/// Transient: produced by the validator, consumed by the batch runner, never
/// persisted. The three tiers carry different severities - missing critical
/// files are fatal, missing expected directories are warnings, and optional
/// files are informational when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    /// Critical files absent from the project root. Non-empty means the
    /// configuration fails.
    pub missing_critical: Vec<String>,
    /// Expected directories that were not generated. Warning only.
    pub missing_dirs: Vec<String>,
    /// Optional files that happened to be present.
    pub present_optional: Vec<String>,
}

impl StructureReport {
    /// `true` if the configuration must be failed.
    pub fn is_fatal(&self) -> bool {
        !self.missing_critical.is_empty()
    }

    /// `true` if there is anything to warn about.
    pub fn has_warnings(&self) -> bool {
        !self.missing_dirs.is_empty()
    }

    /// Warning lines for the batch summary, one per missing directory.
    pub fn warning_messages(&self) -> Vec<String> {
        self.missing_dirs
            .iter()
            .map(|dir| format!("missing expected directory: {dir}"))
            .collect()
    }
}
