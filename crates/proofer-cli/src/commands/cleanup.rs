//! Implementation of the `proofer cleanup` command.
//!
//! Shares the core cleanup primitives with conflict resolution and
//! end-of-run auto-cleanup, so all three delete with identical semantics.

use tracing::instrument;

use proofer_adapters::LocalFilesystem;
use proofer_core::application::services::cleanup;

use crate::{
    cli::{CleanupArgs, global::GlobalArgs},
    commands::{resolve_output_dir, resolve_template_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: CleanupArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template_dir = resolve_template_dir(args.template_dir.as_ref(), &config);
    let output_dir = resolve_output_dir(args.output_dir.as_ref(), &config, &template_dir);

    let fs = LocalFilesystem::new();
    match &args.config {
        Some(name) => {
            cleanup::remove_tree(&fs, &output, &output_dir.join(name)).map_err(CliError::Core)?;
        }
        None => {
            cleanup::clean_output_dir(&fs, &output, &output_dir).map_err(CliError::Core)?;
            output.success("Cleanup complete")?;
        }
    }

    Ok(())
}
