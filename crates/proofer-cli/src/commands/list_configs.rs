//! Implementation of the `proofer list-configs` command.

use proofer_adapters::FileSpecStore;
use proofer_core::application::ports::SpecStore;

use crate::{
    cli::{ListConfigsArgs, ListFormat, global::GlobalArgs},
    commands::resolve_template_dir,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListConfigsArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template_dir = resolve_template_dir(args.template_dir.as_ref(), &config);
    let configs_file = args
        .configs_file
        .clone()
        .unwrap_or_else(|| FileSpecStore::default_configs_path(&template_dir));

    let specs = FileSpecStore::new(&template_dir, &configs_file);
    let configs = specs
        .load_configs()
        .map_err(|source| CliError::ConfigsLoad { source })?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "Available test configurations ({}):",
                configs.len()
            ))?;
            for (name, cfg) in configs.iter() {
                output.print(&format!(
                    "  {} - {}",
                    name,
                    cfg.description().unwrap_or("No description")
                ))?;
            }
        }
        ListFormat::List => {
            for name in configs.names() {
                println!("{name}");
            }
        }
        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&configs).map_err(|e| CliError::InvalidInput {
                    message: format!("failed to serialise configurations: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{json}");
        }
    }

    Ok(())
}
