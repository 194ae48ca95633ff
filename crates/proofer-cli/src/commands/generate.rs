//! Implementation of the `proofer generate` command.
//!
//! Responsibility: translate CLI arguments into batch options, wire the
//! adapters into the core `MatrixService`, run the batch, and map the
//! summary onto an exit status. No business logic lives here.

use std::time::Duration;

use tracing::{debug, info, instrument};

use proofer_adapters::{CookiecutterEngine, FileSpecStore, LocalFilesystem};
use proofer_core::application::{BatchOptions, MatrixService};
use proofer_core::domain::BatchSummary;

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    commands::{resolve_output_dir, resolve_template_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `proofer generate` command.
///
/// Dispatch sequence:
/// 1. Resolve template, configs-file, and output locations
/// 2. Build the adapters and the matrix service
/// 3. Load the named configurations (load failure exits 1)
/// 4. Run the batch; per-configuration failures stay inside the summary
/// 5. Render the summary (JSON when requested)
/// 6. Exit non-zero if any configuration failed
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve locations
    let template_dir = resolve_template_dir(args.template_dir.as_ref(), &config);
    let configs_file = args
        .configs_file
        .clone()
        .unwrap_or_else(|| FileSpecStore::default_configs_path(&template_dir));
    let output_dir = resolve_output_dir(args.output_dir.as_ref(), &config, &template_dir);

    debug!(
        template_dir = %template_dir.display(),
        configs_file = %configs_file.display(),
        output_dir = %output_dir.display(),
        exists = %proofer_core::domain::ExistsStrategy::from(args.exists),
        "locations resolved"
    );

    // 2. Build adapters and service
    let timeout = args
        .timeout
        .or(config.engine.timeout_secs)
        .map(Duration::from_secs);
    let engine = CookiecutterEngine::new(config.engine.program.clone()).with_timeout(timeout);
    let specs = FileSpecStore::new(&template_dir, &configs_file);
    let service = MatrixService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(engine),
        Box::new(specs),
        Box::new(output.clone()),
    );

    // 3. Load configurations. A load failure means the batch never started;
    //    it exits 1 like a failed batch.
    let configs = service
        .load_configs()
        .map_err(|source| CliError::ConfigsLoad { source })?;

    if let Some(name) = &args.config {
        if !configs.contains(name) {
            return Err(CliError::ConfigNotFound {
                name: name.clone(),
                available: configs.names().iter().map(|s| s.to_string()).collect(),
            });
        }
    }

    // 4. Run the batch
    let selected = args.config.as_ref().map_or(configs.len(), |_| 1);
    output.header(&format!("Generating {selected} configuration(s)..."))?;
    info!(selected, engine = %config.engine.program, "batch started");

    let options = BatchOptions::new(&template_dir, &output_dir, args.exists.into())
        .with_auto_cleanup(args.auto_cleanup);
    let summary = service.run(&configs, args.config.as_deref(), &options)?;

    // 5. Machine-readable summary on request. Human-readable progress was
    //    already reported during the run.
    if output.format() == OutputFormat::Json {
        print_json_summary(&summary)?;
    }

    // 6. Exit status: any failure turns into exit 1.
    if !summary.is_success() {
        return Err(CliError::BatchFailed {
            failed: summary
                .failed_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        });
    }

    Ok(())
}

/// Serialise the summary to stdout. Bypasses the `OutputManager` because
/// JSON output must be parseable even in non-TTY pipes.
fn print_json_summary(summary: &BatchSummary) -> CliResult<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialise summary: {e}"),
        source: Some(Box::new(e)),
    })?;
    println!("{json}");
    Ok(())
}
