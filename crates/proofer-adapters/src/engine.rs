//! Cookiecutter subprocess adapter implementing the `TemplateEngine` port.
//!
//! The command contract: `<program> <template-dir> --no-input --output-dir
//! <out>` followed by one `key=value` token per option assignment. The engine
//! must exit zero on success and derives the generated directory from
//! `project_name` with the same slugging rule as `proofer_core::domain::slug`.

use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use proofer_core::application::ApplicationError;
use proofer_core::application::ports::{EngineOutput, EngineRequest, TemplateEngine};
use proofer_core::error::ProoferResult;

/// Engine binary used when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "cookiecutter";

/// How often a time-limited child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Synchronous cookiecutter invoker.
///
/// Blocks the calling thread for the duration of the subprocess. With a
/// timeout configured, the child is killed at the deadline and the
/// configuration fails with a timeout error; completed configurations are
/// unaffected.
#[derive(Debug, Clone)]
pub struct CookiecutterEngine {
    program: String,
    timeout: Option<Duration>,
}

impl CookiecutterEngine {
    /// Engine running `program` with no time limit.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Bound every invocation to `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The argument vector for one request, in invocation order.
    fn build_args(request: &EngineRequest) -> Vec<String> {
        let mut args = vec![
            request.template_dir.display().to_string(),
            "--no-input".to_string(),
            "--output-dir".to_string(),
            request.output_dir.display().to_string(),
        ];
        for (key, value) in &request.values {
            args.push(format!("{key}={value}"));
        }
        args
    }
}

impl Default for CookiecutterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl TemplateEngine for CookiecutterEngine {
    #[instrument(skip_all, fields(program = %self.program))]
    fn generate(&self, request: &EngineRequest) -> ProoferResult<EngineOutput> {
        // Probe up front so a missing binary yields a named error instead of
        // a raw spawn failure.
        which::which(&self.program).map_err(|_| ApplicationError::EngineNotFound {
            program: self.program.clone(),
        })?;

        let args = Self::build_args(request);
        debug!(command = %format!("{} {}", self.program, args.join(" ")), "invoking engine");

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);

        let wait = run_captured(cmd, self.timeout).map_err(|e| {
            ApplicationError::GenerationFailed {
                stderr: format!("failed to run '{}': {}", self.program, e),
            }
        })?;

        match wait {
            WaitResult::TimedOut => Err(ApplicationError::GenerationTimeout {
                seconds: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }
            .into()),
            WaitResult::Completed {
                status,
                stdout,
                stderr,
            } => {
                if !status.success() {
                    return Err(ApplicationError::GenerationFailed { stderr }.into());
                }
                debug!(
                    entries = tree_entries(&request.output_dir),
                    "engine completed"
                );
                Ok(EngineOutput { stdout })
            }
        }
    }
}

/// Count of entries the engine left under `path`, for debug logging.
fn tree_entries(path: &Path) -> usize {
    WalkDir::new(path).into_iter().filter_map(Result::ok).count()
}

enum WaitResult {
    Completed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
    TimedOut,
}

/// Run the command to completion, capturing both streams.
///
/// Without a timeout this is a plain blocking `output()`. With one, the
/// child is spawned with piped streams (drained on background threads so a
/// chatty engine cannot deadlock on a full pipe) and polled until the
/// deadline, then killed.
fn run_captured(mut cmd: Command, timeout: Option<Duration>) -> std::io::Result<WaitResult> {
    let Some(limit) = timeout else {
        let output = cmd.output()?;
        return Ok(WaitResult::Completed {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn()?;
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(WaitResult::Completed {
                status,
                stdout: stdout.join().unwrap_or_default(),
                stderr: stderr.join().unwrap_or_default(),
            });
        }
        if Instant::now() >= deadline {
            // May race with a normal exit; either way the child is reaped.
            let _ = child.kill();
            let _ = child.wait();
            return Ok(WaitResult::TimedOut);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use proofer_core::error::ProoferError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn request(tmp: &TempDir, values: &[(&str, &str)]) -> EngineRequest {
        EngineRequest {
            template_dir: PathBuf::from("template"),
            output_dir: tmp.path().join("out"),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn args_follow_the_engine_contract() {
        let tmp = TempDir::new().unwrap();
        let req = request(&tmp, &[("project_name", "Demo Project"), ("docs", "yes")]);
        let args = CookiecutterEngine::build_args(&req);
        assert_eq!(args[0], "template");
        assert_eq!(args[1], "--no-input");
        assert_eq!(args[2], "--output-dir");
        assert_eq!(args[3], tmp.path().join("out").display().to_string());
        assert_eq!(&args[4..], ["project_name=Demo Project", "docs=yes"]);
    }

    #[test]
    fn missing_program_is_a_named_error() {
        let tmp = TempDir::new().unwrap();
        let engine = CookiecutterEngine::new("proofer-no-such-engine-binary");
        let err = engine.generate(&request(&tmp, &[])).unwrap_err();
        assert!(matches!(
            err,
            ProoferError::Application(ApplicationError::EngineNotFound { .. })
        ));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        fn write_script(dir: &std::path::Path, body: &str) -> PathBuf {
            let path = dir.join("fake-engine.sh");
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            path
        }

        #[test]
        fn zero_exit_yields_captured_stdout() {
            let tmp = TempDir::new().unwrap();
            let script = write_script(tmp.path(), "echo generated ok");
            let engine = CookiecutterEngine::new(script.display().to_string());
            let output = engine.generate(&request(&tmp, &[])).unwrap();
            assert!(output.stdout.contains("generated ok"));
        }

        #[test]
        fn non_zero_exit_carries_stderr() {
            let tmp = TempDir::new().unwrap();
            let script = write_script(tmp.path(), "echo boom >&2; exit 3");
            let engine = CookiecutterEngine::new(script.display().to_string());
            let err = engine.generate(&request(&tmp, &[])).unwrap_err();
            match err {
                ProoferError::Application(ApplicationError::GenerationFailed { stderr }) => {
                    assert!(stderr.contains("boom"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn hung_engine_is_killed_at_the_deadline() {
            let tmp = TempDir::new().unwrap();
            let script = write_script(tmp.path(), "sleep 5");
            let engine = CookiecutterEngine::new(script.display().to_string())
                .with_timeout(Some(Duration::from_millis(200)));
            let started = Instant::now();
            let err = engine.generate(&request(&tmp, &[])).unwrap_err();
            assert!(matches!(
                err,
                ProoferError::Application(ApplicationError::GenerationTimeout { .. })
            ));
            assert!(started.elapsed() < Duration::from_secs(4));
        }

        #[test]
        fn timed_run_that_finishes_in_time_succeeds() {
            let tmp = TempDir::new().unwrap();
            let script = write_script(tmp.path(), "echo quick");
            let engine = CookiecutterEngine::new(script.display().to_string())
                .with_timeout(Some(Duration::from_secs(10)));
            let output = engine.generate(&request(&tmp, &[])).unwrap();
            assert!(output.stdout.contains("quick"));
        }

        #[test]
        fn values_reach_the_engine_as_single_tokens() {
            let tmp = TempDir::new().unwrap();
            // $5 is the first key=value token (after template, --no-input,
            // --output-dir, <out>).
            let script = write_script(tmp.path(), "echo \"$5\"");
            let engine = CookiecutterEngine::new(script.display().to_string());
            let output = engine
                .generate(&request(&tmp, &[("project_name", "Demo Project")]))
                .unwrap();
            assert!(output.stdout.contains("project_name=Demo Project"));
        }
    }
}
