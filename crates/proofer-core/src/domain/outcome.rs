//! Per-configuration outcomes and the aggregated batch summary.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Terminal state of one configuration's pass through the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Generated and validated. Structural warnings, if any, ride along
    /// without blocking success.
    Generated {
        path: PathBuf,
        warnings: Vec<String>,
    },
    /// Pre-existing output left untouched under the `skip` strategy.
    Skipped { path: PathBuf },
    /// Any stage failed; the reason is the rendered error.
    Failed { reason: String },
}

impl RunOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One configuration's result, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: RunOutcome,
}

/// Accumulated results of a whole batch run, in processing order.
///
/// Appended to only by the single-threaded batch runner; read back for the
/// final summary and the process exit status.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct BatchSummary {
    results: Vec<ConfigResult>,
}

impl BatchSummary {
    pub fn push(&mut self, name: impl Into<String>, outcome: RunOutcome) {
        self.results.push(ConfigResult {
            name: name.into(),
            outcome,
        });
    }

    pub fn results(&self) -> &[ConfigResult] {
        &self.results
    }

    pub fn generated_count(&self) -> usize {
        self.generated_paths().len()
    }

    pub fn skipped_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, RunOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed_names().len()
    }

    /// Names of every failed configuration, in processing order.
    pub fn failed_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| r.outcome.is_failed())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Paths of every successfully generated project.
    pub fn generated_paths(&self) -> Vec<&Path> {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                RunOutcome::Generated { path, .. } => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// `(configuration name, warning)` pairs across all generated projects.
    pub fn warnings(&self) -> Vec<(&str, &str)> {
        self.results
            .iter()
            .filter_map(|r| match &r.outcome {
                RunOutcome::Generated { warnings, .. } => Some((r.name.as_str(), warnings)),
                _ => None,
            })
            .flat_map(|(name, warnings)| warnings.iter().map(move |w| (name, w.as_str())))
            .collect()
    }

    /// `true` when no configuration failed - skips count as success.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
