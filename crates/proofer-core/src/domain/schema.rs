//! The template's declared option schema.
//!
//! Loaded from the template's `cookiecutter.json` by the adapters crate.
//! Each option is either a closed list of allowed values ("list option") or
//! free-form; only list options constrain configuration values.

use indexmap::IndexMap;

/// What a single template option accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSpec {
    /// Closed set of allowed values, in declaration order. The first entry is
    /// the engine's default.
    Choices(Vec<String>),
    /// Unconstrained value (free-text defaults, nested prompts, etc.).
    Free,
}

impl OptionSpec {
    /// `true` if this option constrains its values.
    pub fn is_choices(&self) -> bool {
        matches!(self, Self::Choices(_))
    }

    /// Whether `value` is acceptable for this option.
    pub fn allows(&self, value: &str) -> bool {
        match self {
            Self::Choices(allowed) => allowed.iter().any(|v| v == value),
            Self::Free => true,
        }
    }
}

/// The full option schema: option name to spec, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSchema {
    options: IndexMap<String, OptionSpec>,
}

impl OptionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an option.
    pub fn insert(&mut self, name: impl Into<String>, spec: OptionSpec) {
        self.options.insert(name.into(), spec);
    }

    /// Look up an option's spec.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    /// The allowed values for `name`, if it is a list option.
    ///
    /// Free-form options and unknown keys both return `None` - neither is
    /// validated.
    pub fn choices(&self, name: &str) -> Option<&[String]> {
        match self.options.get(name) {
            Some(OptionSpec::Choices(allowed)) => Some(allowed),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionSpec)> {
        self.options.iter()
    }
}

impl FromIterator<(String, OptionSpec)> for OptionSchema {
    fn from_iter<I: IntoIterator<Item = (String, OptionSpec)>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionSchema {
        let mut schema = OptionSchema::new();
        schema.insert("project_name", OptionSpec::Free);
        schema.insert(
            "environment_manager",
            OptionSpec::Choices(vec!["uv".into(), "conda".into(), "none".into()]),
        );
        schema
    }

    #[test]
    fn choices_returns_allowed_list() {
        let schema = sample();
        assert_eq!(
            schema.choices("environment_manager"),
            Some(&["uv".to_string(), "conda".into(), "none".into()][..])
        );
    }

    #[test]
    fn free_option_has_no_choices() {
        assert_eq!(sample().choices("project_name"), None);
    }

    #[test]
    fn unknown_key_has_no_choices() {
        assert_eq!(sample().choices("no_such_option"), None);
    }

    #[test]
    fn allows_checks_membership() {
        let spec = OptionSpec::Choices(vec!["yes".into(), "no".into()]);
        assert!(spec.allows("yes"));
        assert!(!spec.allows("maybe"));
    }

    #[test]
    fn free_allows_anything() {
        assert!(OptionSpec::Free.allows("anything at all"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let schema = sample();
        let keys: Vec<_> = schema.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["project_name", "environment_manager"]);
    }
}
