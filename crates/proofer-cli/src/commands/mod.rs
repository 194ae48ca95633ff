//! Command handlers. Each submodule translates CLI arguments into core
//! calls; no business logic lives here.

pub mod cleanup;
pub mod completions;
pub mod generate;
pub mod list_configs;

use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Template root: flag, then config default, then the current directory.
pub(crate) fn resolve_template_dir(arg: Option<&PathBuf>, config: &AppConfig) -> PathBuf {
    arg.cloned()
        .or_else(|| config.defaults.template_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Output root: flag, then config default, then `<template_dir>/tmp`.
pub(crate) fn resolve_output_dir(
    arg: Option<&PathBuf>,
    config: &AppConfig,
    template_dir: &Path,
) -> PathBuf {
    arg.cloned()
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| template_dir.join("tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_dir_defaults_to_cwd() {
        let cfg = AppConfig::default();
        assert_eq!(resolve_template_dir(None, &cfg), PathBuf::from("."));
    }

    #[test]
    fn template_dir_flag_wins_over_config() {
        let mut cfg = AppConfig::default();
        cfg.defaults.template_dir = Some(PathBuf::from("/from-config"));
        let flag = PathBuf::from("/from-flag");
        assert_eq!(
            resolve_template_dir(Some(&flag), &cfg),
            PathBuf::from("/from-flag")
        );
    }

    #[test]
    fn output_dir_defaults_under_template() {
        let cfg = AppConfig::default();
        assert_eq!(
            resolve_output_dir(None, &cfg, Path::new("/tpl")),
            PathBuf::from("/tpl/tmp")
        );
    }

    #[test]
    fn output_dir_config_default_wins_over_derived() {
        let mut cfg = AppConfig::default();
        cfg.defaults.output_dir = Some(PathBuf::from("/out"));
        assert_eq!(
            resolve_output_dir(None, &cfg, Path::new("/tpl")),
            PathBuf::from("/out")
        );
    }
}
