//! Matrix Service - main application orchestrator.
//!
//! This service drives the whole configuration matrix:
//! 1. Validate each configuration against the option schema
//! 2. Resolve pre-existing output
//! 3. Invoke the external engine
//! 4. Validate the generated structure
//!
//! Failure in one configuration never aborts the batch: every error from the
//! per-configuration pipeline is caught here and recorded as a `Failed`
//! entry, and the next configuration is attempted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{EngineRequest, Filesystem, Reporter, SpecStore, TemplateEngine},
    application::services::{cleanup, conflict, structure::StructureValidator},
    domain::{
        BatchSummary, ConfigSet, ConfigValidator, ExistsStrategy, NamedConfig, OptionSchema,
        ProceedDecision, RunOutcome,
    },
    error::ProoferResult,
};

/// Knobs for one batch run. The strategy applies unchanged to every
/// configuration in the run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Template root handed to the engine.
    pub template_dir: PathBuf,
    /// Root under which each configuration gets its own subdirectory.
    pub output_dir: PathBuf,
    /// How to handle pre-existing project directories.
    pub strategy: ExistsStrategy,
    /// Remove everything produced once the run succeeds.
    pub auto_cleanup: bool,
}

impl BatchOptions {
    pub fn new(
        template_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        strategy: ExistsStrategy,
    ) -> Self {
        Self {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            strategy,
            auto_cleanup: false,
        }
    }

    pub fn with_auto_cleanup(mut self, auto_cleanup: bool) -> Self {
        self.auto_cleanup = auto_cleanup;
        self
    }
}

/// Main batch-running service.
///
/// Owns the run: configurations are processed strictly one after another
/// (each spawns a blocking subprocess and mutates the filesystem), and only
/// this service is allowed to trigger mass cleanup.
pub struct MatrixService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn TemplateEngine>,
    specs: Box<dyn SpecStore>,
    reporter: Box<dyn Reporter>,
}

impl MatrixService {
    /// Create a new matrix service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        engine: Box<dyn TemplateEngine>,
        specs: Box<dyn SpecStore>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            filesystem,
            engine,
            specs,
            reporter,
        }
    }

    /// Load the named configurations from the spec store.
    pub fn load_configs(&self) -> ProoferResult<ConfigSet> {
        self.specs.load_configs()
    }

    /// Run the batch over `configs`, optionally restricted to a single
    /// configuration by name.
    ///
    /// Only pre-batch failures (unknown selection, schema load) return
    /// `Err`; per-configuration failures are folded into the summary.
    #[instrument(skip_all, fields(total = configs.len(), selection = selection.unwrap_or("all")))]
    pub fn run(
        &self,
        configs: &ConfigSet,
        selection: Option<&str>,
        options: &BatchOptions,
    ) -> ProoferResult<BatchSummary> {
        if let Some(name) = selection {
            if !configs.contains(name) {
                return Err(crate::domain::DomainError::UnknownConfig {
                    name: name.to_string(),
                    available: configs.names().iter().map(|s| s.to_string()).collect(),
                }
                .into());
            }
        }

        // Pre-batch fatal: a broken schema aborts before any configuration
        // runs.
        let schema = self.specs.load_schema()?;

        self.filesystem.create_dir_all(&options.output_dir)?;

        let selected: Vec<(&String, &NamedConfig)> = configs
            .iter()
            .filter(|(name, _)| selection.is_none_or(|s| s == name.as_str()))
            .collect();
        let total = selected.len();
        info!(total, output_dir = %options.output_dir.display(), "starting generation");

        let mut summary = BatchSummary::default();
        for (idx, (name, config)) in selected.into_iter().enumerate() {
            self.reporter
                .info(&format!("Processing config {}/{}: {}", idx + 1, total, name));
            let outcome = match self.run_one(name, config, &schema, options) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.reporter
                        .error(&format!("Config {name} failed: {}", e.message()));
                    RunOutcome::Failed {
                        reason: e.message(),
                    }
                }
            };
            summary.push(name.clone(), outcome);
        }

        self.report_summary(&summary, options);

        if options.auto_cleanup && summary.generated_count() > 0 {
            self.auto_cleanup(&summary)?;
        }

        Ok(summary)
    }

    /// One configuration's pass through the pipeline. Terminal states map to
    /// `RunOutcome`; any `Err` becomes `Failed` at the batch boundary.
    #[instrument(skip_all, fields(config = %name))]
    fn run_one(
        &self,
        name: &str,
        config: &NamedConfig,
        schema: &OptionSchema,
        options: &BatchOptions,
    ) -> ProoferResult<RunOutcome> {
        ConfigValidator::validate(name, config, schema)?;
        debug!("configuration validated");

        let config_output = options.output_dir.join(name);
        self.filesystem.create_dir_all(&config_output)?;

        let project_path = config_output.join(config.repo_name());
        debug!(path = %project_path.display(), "expected project path");

        match conflict::resolve_existing(
            self.filesystem.as_ref(),
            self.reporter.as_ref(),
            &project_path,
            options.strategy,
        )? {
            ProceedDecision::Skip => {
                info!("skipped, output already exists");
                return Ok(RunOutcome::Skipped { path: project_path });
            }
            ProceedDecision::Proceed => {}
        }

        let request = EngineRequest {
            template_dir: options.template_dir.clone(),
            output_dir: config_output,
            values: config.values().clone(),
        };
        let output = self.engine.generate(&request)?;
        if !output.stdout.is_empty() {
            debug!(stdout = %output.stdout, "engine output");
        }

        let report = StructureValidator::validate(
            self.filesystem.as_ref(),
            self.reporter.as_ref(),
            &project_path,
            config,
        )?;

        self.reporter.success(&format!(
            "Generated and validated {name} -> {}",
            project_path.display()
        ));
        Ok(RunOutcome::Generated {
            path: project_path,
            warnings: report.warning_messages(),
        })
    }

    /// Final summary: counts, every failure by name, every warning.
    fn report_summary(&self, summary: &BatchSummary, options: &BatchOptions) {
        self.reporter.info(&format!(
            "Generation complete: {} successful, {} skipped, {} failed, output_dir={}",
            summary.generated_count(),
            summary.skipped_count(),
            summary.failed_count(),
            options.output_dir.display(),
        ));

        let failed = summary.failed_names();
        if !failed.is_empty() {
            self.reporter
                .warning(&format!("Failed configurations: {}", failed.join(", ")));
        }
        for (name, warning) in summary.warnings() {
            self.reporter.warning(&format!("{name}: {warning}"));
        }
        for path in summary.generated_paths() {
            self.reporter
                .success(&format!("Generated project: {}", path.display()));
        }
    }

    /// Remove each distinct per-configuration directory touched by a
    /// successful generation.
    fn auto_cleanup(&self, summary: &BatchSummary) -> ProoferResult<()> {
        self.reporter
            .info("Auto-cleanup enabled, removing generated projects...");
        let config_dirs: BTreeSet<&Path> = summary
            .generated_paths()
            .into_iter()
            .filter_map(Path::parent)
            .collect();
        for dir in config_dirs {
            cleanup::remove_tree(self.filesystem.as_ref(), self.reporter.as_ref(), dir)?;
        }
        self.reporter.success("Cleanup complete");
        Ok(())
    }

    /// Remove one configuration's output, or empty the whole output
    /// directory when no configuration is named.
    pub fn cleanup_output(&self, output_dir: &Path, config: Option<&str>) -> ProoferResult<()> {
        match config {
            Some(name) => cleanup::remove_tree(
                self.filesystem.as_ref(),
                self.reporter.as_ref(),
                &output_dir.join(name),
            ),
            None => cleanup::clean_output_dir(
                self.filesystem.as_ref(),
                self.reporter.as_ref(),
                output_dir,
            ),
        }
    }
}

impl std::fmt::Debug for MatrixService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixService").finish_non_exhaustive()
    }
}
