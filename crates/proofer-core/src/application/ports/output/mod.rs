//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `proofer-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::domain::{ConfigSet, OptionSchema};
use crate::error::ProoferResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `proofer_adapters::filesystem::LocalFilesystem` (production)
/// - `proofer_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `remove_dir_all` on an absent path is a no-op, never an error. Conflict
///   resolution, end-of-run cleanup, and the `cleanup` command all rely on
///   that idempotence.
/// - Deletes must target exactly the given path, never an ancestor.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ProoferResult<()>;

    /// Remove a directory tree. No-op if the path does not exist.
    fn remove_dir_all(&self, path: &Path) -> ProoferResult<()>;

    /// Remove a single file. No-op if the path does not exist.
    fn remove_file(&self, path: &Path) -> ProoferResult<()>;

    /// List the immediate children of a directory.
    fn read_dir(&self, path: &Path) -> ProoferResult<Vec<PathBuf>>;
}

/// One generation request, ready for the engine to run.
///
/// The values never include the description metadata - `NamedConfig` strips
/// it at load time - so the adapter can forward every entry as a
/// `key=value` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRequest {
    /// Template root (where the option schema lives).
    pub template_dir: PathBuf,
    /// Directory the engine writes the project into.
    pub output_dir: PathBuf,
    /// Option assignments, in configuration order.
    pub values: IndexMap<String, String>,
}

/// What a successful engine run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// Captured stdout, for debug logging.
    pub stdout: String,
}

/// Port for the external generation engine.
///
/// Implemented by:
/// - `proofer_adapters::engine::CookiecutterEngine` (production)
///
/// Runs synchronously and blocks the calling thread. A non-zero exit maps to
/// `ApplicationError::GenerationFailed` carrying captured stderr.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateEngine: Send + Sync {
    /// Generate one project.
    fn generate(&self, request: &EngineRequest) -> ProoferResult<EngineOutput>;
}

/// Port for loading the template's option schema and the named test
/// configurations.
///
/// Implemented by:
/// - `proofer_adapters::spec_store::FileSpecStore` (production)
///
/// Pure with respect to process state; nothing beyond file reads.
#[cfg_attr(test, mockall::automock)]
pub trait SpecStore: Send + Sync {
    /// Load the template's declared option schema.
    fn load_schema(&self) -> ProoferResult<OptionSchema>;

    /// Load the named configurations, preserving file order.
    fn load_configs(&self) -> ProoferResult<ConfigSet>;
}

/// Port for user-facing progress messages.
///
/// Injected rather than ambient so batch summarization and structural
/// validation stay testable without capturing process-wide output. The CLI's
/// `OutputManager` implements this; diagnostics still go through `tracing`.
pub trait Reporter: Send + Sync {
    /// Progress message.
    fn info(&self, message: &str);

    /// A step completed.
    fn success(&self, message: &str);

    /// Non-fatal finding.
    fn warning(&self, message: &str);

    /// Fatal finding. Never suppressed.
    fn error(&self, message: &str);
}

/// Reporter that swallows everything. For tests and embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
