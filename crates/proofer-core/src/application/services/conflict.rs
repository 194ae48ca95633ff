//! Conflict resolution for pre-existing project directories.

use std::path::Path;

use tracing::debug;

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, Reporter};
use crate::application::services::cleanup;
use crate::domain::{ExistsStrategy, ProceedDecision};
use crate::error::ProoferResult;

/// Decide whether generation may proceed into `path`.
///
/// - Absent path: always [`ProceedDecision::Proceed`].
/// - Existing + `clean`: delete the tree, then proceed.
/// - Existing + `skip`: [`ProceedDecision::Skip`], nothing touched.
/// - Existing + `fail`: `ApplicationError::AlreadyExists`, nothing touched.
pub fn resolve_existing(
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
    path: &Path,
    strategy: ExistsStrategy,
) -> ProoferResult<ProceedDecision> {
    if !fs.exists(path) {
        debug!(path = %path.display(), "no existing output");
        return Ok(ProceedDecision::Proceed);
    }

    reporter.warning(&format!(
        "Project directory already exists: {}",
        path.display()
    ));

    match strategy {
        ExistsStrategy::Clean => {
            cleanup::remove_tree(fs, reporter, path)?;
            Ok(ProceedDecision::Proceed)
        }
        ExistsStrategy::Skip => {
            reporter.info(&format!("Skipping existing project: {}", path.display()));
            Ok(ProceedDecision::Skip)
        }
        ExistsStrategy::Fail => Err(ApplicationError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NullReporter;
    use crate::application::testing::FakeFilesystem;
    use crate::error::ProoferError;

    #[test]
    fn absent_path_proceeds_under_every_strategy() {
        let fs = FakeFilesystem::new();
        for strategy in [
            ExistsStrategy::Clean,
            ExistsStrategy::Skip,
            ExistsStrategy::Fail,
        ] {
            let decision =
                resolve_existing(&fs, &NullReporter, Path::new("tmp/demo"), strategy).unwrap();
            assert_eq!(decision, ProceedDecision::Proceed, "strategy {strategy}");
        }
    }

    #[test]
    fn clean_removes_and_proceeds() {
        let fs = FakeFilesystem::new();
        fs.add_file("tmp/demo/README.md");
        let decision =
            resolve_existing(&fs, &NullReporter, Path::new("tmp/demo"), ExistsStrategy::Clean)
                .unwrap();
        assert_eq!(decision, ProceedDecision::Proceed);
        assert!(!fs.exists(Path::new("tmp/demo")));
    }

    #[test]
    fn clean_twice_leaves_the_same_absent_state() {
        let fs = FakeFilesystem::new();
        fs.add_dir("tmp/demo");
        for _ in 0..2 {
            let decision =
                resolve_existing(&fs, &NullReporter, Path::new("tmp/demo"), ExistsStrategy::Clean)
                    .unwrap();
            assert_eq!(decision, ProceedDecision::Proceed);
            assert!(!fs.exists(Path::new("tmp/demo")));
        }
    }

    #[test]
    fn skip_returns_skip_without_mutation() {
        let fs = FakeFilesystem::new();
        fs.add_file("tmp/demo/README.md");
        let before = fs.snapshot();
        let decision =
            resolve_existing(&fs, &NullReporter, Path::new("tmp/demo"), ExistsStrategy::Skip)
                .unwrap();
        assert_eq!(decision, ProceedDecision::Skip);
        assert_eq!(fs.snapshot(), before);
    }

    #[test]
    fn fail_errors_without_mutation() {
        let fs = FakeFilesystem::new();
        fs.add_file("tmp/demo/README.md");
        let before = fs.snapshot();
        let err =
            resolve_existing(&fs, &NullReporter, Path::new("tmp/demo"), ExistsStrategy::Fail)
                .unwrap_err();
        assert!(matches!(
            err,
            ProoferError::Application(ApplicationError::AlreadyExists { .. })
        ));
        assert_eq!(fs.snapshot(), before);
    }
}
