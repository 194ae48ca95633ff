//! File-based implementation of the `SpecStore` port.
//!
//! Reads the template's option schema from `cookiecutter.json` and the named
//! test configurations from a YAML file. Pure with respect to process state;
//! nothing beyond file reads.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use proofer_core::application::ApplicationError;
use proofer_core::application::ports::SpecStore;
use proofer_core::domain::{ConfigSet, NamedConfig, OptionSchema, OptionSpec};
use proofer_core::error::ProoferResult;

/// Schema file name inside the template root.
pub const SCHEMA_FILE: &str = "cookiecutter.json";

/// Default configurations file name inside the template root.
pub const CONFIGS_FILE: &str = "test_configs.yaml";

/// Loads schema and configurations from the template directory.
#[derive(Debug, Clone)]
pub struct FileSpecStore {
    template_dir: PathBuf,
    configs_path: PathBuf,
}

impl FileSpecStore {
    /// Store reading `<template_dir>/cookiecutter.json` and `configs_path`.
    pub fn new(template_dir: impl Into<PathBuf>, configs_path: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            configs_path: configs_path.into(),
        }
    }

    /// The default configurations file for a template root.
    pub fn default_configs_path(template_dir: &Path) -> PathBuf {
        template_dir.join(CONFIGS_FILE)
    }

    fn schema_path(&self) -> PathBuf {
        self.template_dir.join(SCHEMA_FILE)
    }
}

impl SpecStore for FileSpecStore {
    fn load_schema(&self) -> ProoferResult<OptionSchema> {
        let path = self.schema_path();
        debug!(path = %path.display(), "loading option schema");

        let raw = std::fs::read_to_string(&path).map_err(|e| read_error(
            &path,
            e,
            |path| ApplicationError::SchemaNotFound { path },
        ))?;

        let document: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::SchemaParse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let serde_json::Value::Object(entries) = document else {
            return Err(ApplicationError::SchemaParse {
                path,
                reason: "top level must be an object".into(),
            }
            .into());
        };

        let mut schema = OptionSchema::new();
        for (key, value) in entries {
            let spec = match value {
                serde_json::Value::Array(items) => {
                    let mut allowed = Vec::with_capacity(items.len());
                    for item in items {
                        allowed.push(json_scalar(&item).ok_or_else(|| {
                            ApplicationError::SchemaParse {
                                path: path.clone(),
                                reason: format!("option '{key}' has a non-scalar choice"),
                            }
                        })?);
                    }
                    OptionSpec::Choices(allowed)
                }
                _ => OptionSpec::Free,
            };
            schema.insert(key, spec);
        }
        debug!(options = schema.len(), "option schema loaded");
        Ok(schema)
    }

    fn load_configs(&self) -> ProoferResult<ConfigSet> {
        let path = &self.configs_path;
        debug!(path = %path.display(), "loading test configurations");

        let raw = std::fs::read_to_string(path).map_err(|e| read_error(
            path,
            e,
            |path| ApplicationError::ConfigsNotFound { path },
        ))?;

        let document: serde_yaml::Value =
            serde_yaml::from_str(&raw).map_err(|e| ApplicationError::ConfigsParse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        // An empty document parses to null; that is an explicit error, not
        // zero configurations.
        let serde_yaml::Value::Mapping(entries) = document else {
            return Err(ApplicationError::ConfigsNotMapping { path: path.clone() }.into());
        };

        let mut configs = ConfigSet::new();
        for (name, body) in entries {
            let name = yaml_scalar(&name).ok_or_else(|| ApplicationError::ConfigsParse {
                path: path.clone(),
                reason: "configuration names must be strings".into(),
            })?;
            let serde_yaml::Value::Mapping(pairs) = body else {
                return Err(ApplicationError::ConfigsParse {
                    path: path.clone(),
                    reason: format!("configuration '{name}' must be a mapping of option values"),
                }
                .into());
            };

            let mut values = indexmap::IndexMap::new();
            for (key, value) in pairs {
                let key = yaml_scalar(&key).ok_or_else(|| ApplicationError::ConfigsParse {
                    path: path.clone(),
                    reason: format!("configuration '{name}' has a non-string option key"),
                })?;
                let value = yaml_scalar(&value).ok_or_else(|| ApplicationError::ConfigsParse {
                    path: path.clone(),
                    reason: format!("configuration '{name}' option '{key}' is not a scalar"),
                })?;
                values.insert(key, value);
            }
            configs.insert(name, NamedConfig::from_values(values));
        }

        info!(count = configs.len(), "loaded test configurations");
        Ok(configs)
    }
}

fn read_error(
    path: &Path,
    e: io::Error,
    not_found: impl FnOnce(PathBuf) -> ApplicationError,
) -> proofer_core::error::ProoferError {
    if e.kind() == io::ErrorKind::NotFound {
        not_found(path.to_path_buf()).into()
    } else {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to read: {e}"),
        }
        .into()
    }
}

/// Scalar JSON value as a string; `None` for containers and null.
fn json_scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Scalar YAML value as a string; `None` for containers and null.
fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
