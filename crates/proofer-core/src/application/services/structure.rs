//! Structural validation of a generated project tree.

use std::path::Path;

use tracing::debug;

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, Reporter};
use crate::domain::{NamedConfig, StructureReport};
use crate::error::ProoferResult;

/// Files that must exist at the project root. Missing any is fatal.
const CRITICAL_FILES: &[&str] = &["README.md", ".gitignore"];

/// Directories every generated project is expected to have. Missing ones are
/// warnings, not failures; the module directory derived from the
/// configuration is checked alongside these.
const EXPECTED_DIRS: &[&str] = &["data", "notebooks", "tests"];

/// Present-or-absent is informational only; absence is never reported.
const OPTIONAL_FILES: &[&str] = &["Makefile", ".pre-commit-config.yaml"];

/// Three-tier structural validation.
pub struct StructureValidator;

impl StructureValidator {
    /// Inspect the generated tree under `project_path`.
    ///
    /// Fails with `MissingCriticalFiles` when any critical file is absent;
    /// missing expected directories are reported through `reporter` and
    /// collected as warnings on the returned report.
    pub fn validate(
        fs: &dyn Filesystem,
        reporter: &dyn Reporter,
        project_path: &Path,
        config: &NamedConfig,
    ) -> ProoferResult<StructureReport> {
        debug!(path = %project_path.display(), "validating project structure");
        let mut report = StructureReport::default();

        for file in CRITICAL_FILES {
            if fs.exists(&project_path.join(file)) {
                debug!(%file, "found critical file");
            } else {
                reporter.error(&format!("Missing critical file: {file}"));
                report.missing_critical.push((*file).to_string());
            }
        }

        let mut expected: Vec<String> = EXPECTED_DIRS.iter().map(|d| (*d).to_string()).collect();
        if let Some(module) = config.module_name() {
            expected.push(module);
        }
        for dir in &expected {
            if fs.exists(&project_path.join(dir)) {
                debug!(%dir, "found expected directory");
            } else {
                reporter.warning(&format!("Missing expected directory: {dir}"));
                report.missing_dirs.push(dir.clone());
            }
        }

        for file in OPTIONAL_FILES {
            if fs.exists(&project_path.join(file)) {
                debug!(%file, "found optional file");
                report.present_optional.push((*file).to_string());
            }
        }

        if let Ok(entries) = fs.read_dir(project_path) {
            let mut names: Vec<String> = entries
                .iter()
                .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
                .collect();
            names.sort();
            debug!(generated = %names.join(", "), "top-level entries");
        }

        if report.is_fatal() {
            return Err(ApplicationError::MissingCriticalFiles {
                files: report.missing_critical.clone(),
            }
            .into());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NullReporter;
    use crate::application::testing::FakeFilesystem;
    use crate::error::ProoferError;
    use indexmap::IndexMap;

    fn config(pairs: &[(&str, &str)]) -> NamedConfig {
        NamedConfig::from_values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<IndexMap<_, _>>(),
        )
    }

    fn complete_project(fs: &FakeFilesystem, root: &str) {
        fs.add_file(&format!("{root}/README.md"));
        fs.add_file(&format!("{root}/.gitignore"));
        fs.add_dir(&format!("{root}/data"));
        fs.add_dir(&format!("{root}/notebooks"));
        fs.add_dir(&format!("{root}/tests"));
        fs.add_dir(&format!("{root}/demo_project"));
    }

    #[test]
    fn complete_tree_yields_clean_report() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        let report = StructureValidator::validate(
            &fs,
            &NullReporter,
            Path::new("tmp/demo_project"),
            &config(&[("project_name", "Demo Project")]),
        )
        .unwrap();
        assert!(!report.is_fatal());
        assert!(!report.has_warnings());
    }

    #[test]
    fn missing_readme_is_fatal() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        fs.remove("tmp/demo_project/README.md");
        let err = StructureValidator::validate(
            &fs,
            &NullReporter,
            Path::new("tmp/demo_project"),
            &config(&[("project_name", "Demo Project")]),
        )
        .unwrap_err();
        match err {
            ProoferError::Application(ApplicationError::MissingCriticalFiles { files }) => {
                assert_eq!(files, ["README.md"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_notebooks_is_a_warning_not_a_failure() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        fs.remove("tmp/demo_project/notebooks");
        let report = StructureValidator::validate(
            &fs,
            &NullReporter,
            Path::new("tmp/demo_project"),
            &config(&[("project_name", "Demo Project")]),
        )
        .unwrap();
        assert!(!report.is_fatal());
        assert_eq!(report.missing_dirs, ["notebooks"]);
    }

    #[test]
    fn module_dir_uses_explicit_module_name() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        // The configured module_name is absent; the derived one is present.
        let report = StructureValidator::validate(
            &fs,
            &NullReporter,
            Path::new("tmp/demo_project"),
            &config(&[("project_name", "Demo Project"), ("module_name", "custom_mod")]),
        )
        .unwrap();
        assert_eq!(report.missing_dirs, ["custom_mod"]);
    }

    #[test]
    fn no_module_expectation_without_project_name() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        fs.remove("tmp/demo_project/demo_project");
        let report = StructureValidator::validate(
            &fs,
            &NullReporter,
            Path::new("tmp/demo_project"),
            &config(&[]),
        )
        .unwrap();
        assert!(!report.has_warnings());
    }

    #[test]
    fn optional_files_are_recorded_when_present() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        fs.add_file("tmp/demo_project/Makefile");
        let report = StructureValidator::validate(
            &fs,
            &NullReporter,
            Path::new("tmp/demo_project"),
            &config(&[("project_name", "Demo Project")]),
        )
        .unwrap();
        assert_eq!(report.present_optional, ["Makefile"]);
    }

    // Adding a file to the critical set can only turn a pass into a failure,
    // never the reverse: a tree passing under the current set keeps passing
    // when files are added to it.
    #[test]
    fn validation_is_monotonic_in_tree_contents() {
        let fs = FakeFilesystem::new();
        complete_project(&fs, "tmp/demo_project");
        fs.add_file("tmp/demo_project/.pre-commit-config.yaml");
        fs.add_file("tmp/demo_project/extra.txt");
        assert!(
            StructureValidator::validate(
                &fs,
                &NullReporter,
                Path::new("tmp/demo_project"),
                &config(&[("project_name", "Demo Project")]),
            )
            .is_ok()
        );
    }
}
