//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use proofer_core::domain::ExistsStrategy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "proofer",
    bin_name = "proofer",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9ea} Exercise a cookiecutter template across its option matrix",
    long_about = "Proofer generates one test project per named configuration, \
                  validates the result, and reports success and failure across \
                  the whole batch.",
    after_help = "EXAMPLES:\n\
        \x20 proofer generate\n\
        \x20 proofer generate --config minimal --exists skip\n\
        \x20 proofer generate --auto-cleanup -v\n\
        \x20 proofer list-configs\n\
        \x20 proofer cleanup --config minimal",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate test projects from the configuration matrix.
    #[command(
        visible_alias = "gen",
        about = "Generate test projects",
        after_help = "EXAMPLES:\n\
            \x20 proofer generate\n\
            \x20 proofer generate --config minimal\n\
            \x20 proofer generate --exists fail --output-dir /tmp/proofs\n\
            \x20 proofer generate --auto-cleanup"
    )]
    Generate(GenerateArgs),

    /// List the named configurations.
    #[command(
        name = "list-configs",
        visible_alias = "ls",
        about = "List available test configurations",
        after_help = "EXAMPLES:\n\
            \x20 proofer list-configs\n\
            \x20 proofer list-configs --format json"
    )]
    ListConfigs(ListConfigsArgs),

    /// Remove generated test projects.
    #[command(
        about = "Cleanup generated projects",
        after_help = "EXAMPLES:\n\
            \x20 proofer cleanup                   # everything under the output dir\n\
            \x20 proofer cleanup --config minimal  # one configuration only"
    )]
    Cleanup(CleanupArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 proofer completions bash > ~/.local/share/bash-completion/completions/proofer\n\
            \x20 proofer completions zsh  > ~/.zfunc/_proofer\n\
            \x20 proofer completions fish > ~/.config/fish/completions/proofer.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `proofer generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generate only a specific configuration by name.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "NAME",
        help = "Generate only this configuration"
    )]
    pub config: Option<String>,

    /// Output directory for generated projects.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory (default: <template-dir>/tmp)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Strategy for handling existing project directories.
    #[arg(
        short = 'e',
        long = "exists",
        value_enum,
        default_value = "clean",
        help = "How to handle existing project directories"
    )]
    pub exists: ExistsArg,

    /// Remove everything produced once the run succeeds.
    #[arg(long = "auto-cleanup", help = "Cleanup generated projects afterwards")]
    pub auto_cleanup: bool,

    /// Template root containing the option schema.
    #[arg(
        short = 't',
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory (default: current directory)"
    )]
    pub template_dir: Option<PathBuf>,

    /// Named-configurations file.
    #[arg(
        long = "configs-file",
        value_name = "FILE",
        help = "Configurations file (default: <template-dir>/test_configs.yaml)"
    )]
    pub configs_file: Option<PathBuf>,

    /// Kill the engine after this many seconds.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Per-configuration engine timeout in seconds"
    )]
    pub timeout: Option<u64>,
}

/// CLI spelling of the exists strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExistsArg {
    Clean,
    Skip,
    Fail,
}

impl From<ExistsArg> for ExistsStrategy {
    fn from(arg: ExistsArg) -> Self {
        match arg {
            ExistsArg::Clean => ExistsStrategy::Clean,
            ExistsArg::Skip => ExistsStrategy::Skip,
            ExistsArg::Fail => ExistsStrategy::Fail,
        }
    }
}

// ── list-configs ──────────────────────────────────────────────────────────────

/// Arguments for `proofer list-configs`.
#[derive(Debug, Args)]
pub struct ListConfigsArgs {
    /// Template root containing the option schema.
    #[arg(
        short = 't',
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory (default: current directory)"
    )]
    pub template_dir: Option<PathBuf>,

    /// Named-configurations file.
    #[arg(
        long = "configs-file",
        value_name = "FILE",
        help = "Configurations file (default: <template-dir>/test_configs.yaml)"
    )]
    pub configs_file: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list-configs` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Name and description per line.
    Table,
    /// One name per line.
    List,
    /// JSON object keyed by configuration name.
    Json,
}

// ── cleanup ───────────────────────────────────────────────────────────────────

/// Arguments for `proofer cleanup`.
#[derive(Debug, Args)]
pub struct CleanupArgs {
    /// Output directory to clean.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory (default: <template-dir>/tmp)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Cleanup only a specific configuration.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "NAME",
        help = "Cleanup only this configuration"
    )]
    pub config: Option<String>,

    /// Template root, used to locate the default output directory.
    #[arg(
        short = 't',
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory (default: current directory)"
    )]
    pub template_dir: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `proofer completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
