//! Configuration validation against the option schema.

use crate::domain::{DomainError, NamedConfig, OptionSchema};

/// Centralized configuration validation.
///
/// Validation is independent per key; there are no cross-key constraints.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Check every assignment in `config` against the schema's list options.
    ///
    /// Fails on the first key whose value falls outside the allowed list.
    /// Keys the schema does not constrain (free-form options, unknown keys)
    /// pass unchecked; the description metadata never reaches here at all.
    pub fn validate(
        name: &str,
        config: &NamedConfig,
        schema: &OptionSchema,
    ) -> Result<(), DomainError> {
        for (key, value) in config.values() {
            if let Some(allowed) = schema.choices(key) {
                if !allowed.iter().any(|v| v == value) {
                    return Err(DomainError::InvalidOption {
                        config: name.to_string(),
                        key: key.clone(),
                        value: value.clone(),
                        allowed: allowed.to_vec(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DESCRIPTION_KEY, OptionSpec};
    use indexmap::IndexMap;

    fn schema() -> OptionSchema {
        let mut schema = OptionSchema::new();
        schema.insert("project_name", OptionSpec::Free);
        schema.insert(
            "environment_manager",
            OptionSpec::Choices(vec!["uv".into(), "conda".into(), "none".into()]),
        );
        schema.insert(
            "docs",
            OptionSpec::Choices(vec!["yes".into(), "no".into()]),
        );
        schema
    }

    fn config(pairs: &[(&str, &str)]) -> NamedConfig {
        NamedConfig::from_values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn all_valid_values_pass() {
        let cfg = config(&[
            ("project_name", "Demo"),
            ("environment_manager", "uv"),
            ("docs", "yes"),
        ]);
        assert!(ConfigValidator::validate("minimal", &cfg, &schema()).is_ok());
    }

    #[test]
    fn invalid_list_value_names_key_value_and_allowed() {
        let cfg = config(&[("environment_manager", "pipenv")]);
        let err = ConfigValidator::validate("minimal", &cfg, &schema()).unwrap_err();
        match err {
            DomainError::InvalidOption {
                config,
                key,
                value,
                allowed,
            } => {
                assert_eq!(config, "minimal");
                assert_eq!(key, "environment_manager");
                assert_eq!(value, "pipenv");
                assert_eq!(allowed, ["uv", "conda", "none"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn free_form_values_are_never_validated() {
        let cfg = config(&[("project_name", "Any Value"), ("author_name", "Any Author")]);
        assert!(ConfigValidator::validate("free", &cfg, &schema()).is_ok());
    }

    #[test]
    fn description_metadata_is_ignored() {
        let cfg = config(&[
            ("environment_manager", "conda"),
            (DESCRIPTION_KEY, "pipenv uv conda whatever"),
        ]);
        assert!(ConfigValidator::validate("described", &cfg, &schema()).is_ok());
    }

    #[test]
    fn unknown_keys_pass_through() {
        let cfg = config(&[("not_in_schema", "whatever")]);
        assert!(ConfigValidator::validate("extra", &cfg, &schema()).is_ok());
    }
}
