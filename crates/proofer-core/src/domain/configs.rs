//! Named test configurations.
//!
//! A named configuration is one labeled set of option assignments to exercise
//! as a single generation attempt. The set is loaded once per batch run and
//! never mutated; file order is preserved so runs are reproducible.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::slug;

/// Reserved metadata key in the configurations file. Its value is extracted
/// into [`NamedConfig::description`] at load time; it carries no validation
/// weight and is never forwarded to the engine.
pub const DESCRIPTION_KEY: &str = "config_description";

/// One labeled set of option assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamedConfig {
    values: IndexMap<String, String>,
    description: Option<String>,
}

impl NamedConfig {
    /// Build from raw key/value pairs, pulling out the reserved
    /// [`DESCRIPTION_KEY`] so downstream code never has to skip it.
    pub fn from_values(mut values: IndexMap<String, String>) -> Self {
        let description = values.shift_remove(DESCRIPTION_KEY);
        Self {
            values,
            description,
        }
    }

    /// The option assignments, in file order. Guaranteed free of the
    /// description metadata key.
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }

    /// Look up a single assignment.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Human-readable description, if the file provided one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The directory name the engine will generate for this configuration.
    ///
    /// Falls back to the literal `project_name` when no project name is
    /// assigned, matching the engine's own default.
    pub fn repo_name(&self) -> String {
        slug(self.get("project_name").unwrap_or("project_name"))
    }

    /// The expected module directory inside the generated project: an
    /// explicit `module_name` assignment wins, otherwise the slugged project
    /// name. `None` when neither option is assigned.
    pub fn module_name(&self) -> Option<String> {
        if let Some(module) = self.get("module_name") {
            return Some(module.to_string());
        }
        self.get("project_name").map(slug)
    }
}

/// All named configurations for a run, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigSet {
    configs: IndexMap<String, NamedConfig>,
}

impl ConfigSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, config: NamedConfig) {
        self.configs.insert(name.into(), config);
    }

    pub fn get(&self, name: &str) -> Option<&NamedConfig> {
        self.configs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Configuration names, in file order.
    pub fn names(&self) -> Vec<&str> {
        self.configs.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NamedConfig)> {
        self.configs.iter()
    }
}

impl FromIterator<(String, NamedConfig)> for ConfigSet {
    fn from_iter<I: IntoIterator<Item = (String, NamedConfig)>>(iter: I) -> Self {
        Self {
            configs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> NamedConfig {
        NamedConfig::from_values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn description_is_extracted_from_values() {
        let cfg = config(&[
            ("project_name", "Demo"),
            (DESCRIPTION_KEY, "smoke test config"),
        ]);
        assert_eq!(cfg.description(), Some("smoke test config"));
        assert!(!cfg.values().contains_key(DESCRIPTION_KEY));
        assert_eq!(cfg.values().len(), 1);
    }

    #[test]
    fn repo_name_slugs_project_name() {
        let cfg = config(&[("project_name", "My Test Project")]);
        assert_eq!(cfg.repo_name(), "my_test_project");
    }

    #[test]
    fn repo_name_falls_back_to_engine_default() {
        assert_eq!(config(&[]).repo_name(), "project_name");
    }

    #[test]
    fn explicit_module_name_wins() {
        let cfg = config(&[("project_name", "Demo App"), ("module_name", "core_mod")]);
        assert_eq!(cfg.module_name().as_deref(), Some("core_mod"));
    }

    #[test]
    fn module_name_derived_from_project_name() {
        let cfg = config(&[("project_name", "Demo App")]);
        assert_eq!(cfg.module_name().as_deref(), Some("demo_app"));
    }

    #[test]
    fn module_name_absent_without_project_name() {
        assert_eq!(config(&[("docs", "yes")]).module_name(), None);
    }

    #[test]
    fn config_set_preserves_order() {
        let mut set = ConfigSet::new();
        set.insert("minimal", config(&[]));
        set.insert("full", config(&[]));
        set.insert("bare", config(&[]));
        assert_eq!(set.names(), ["minimal", "full", "bare"]);
    }
}
