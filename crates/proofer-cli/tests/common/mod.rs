//! Shared fixtures for the CLI integration tests.
//!
//! Tests drive the real binary against a throwaway template directory and a
//! stub engine script (selected via `PROOFER_ENGINE`), so no cookiecutter
//! install is needed.

#![allow(dead_code)] // not every test binary uses every helper

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const SCHEMA_JSON: &str = r#"{
    "project_name": "Demo Project",
    "environment_manager": ["uv", "conda", "none"],
    "docs": ["yes", "no"]
}"#;

pub const CONFIGS_YAML: &str = concat!(
    "minimal:\n",
    "  project_name: Demo Project\n",
    "  environment_manager: uv\n",
    "  config_description: Smallest viable configuration\n",
    "full:\n",
    "  project_name: Full Project\n",
    "  environment_manager: conda\n",
    "  docs: \"yes\"\n",
    "  config_description: Everything switched on\n",
);

/// Template root with a schema and the standard two configurations.
pub fn template_fixture() -> TempDir {
    template_with_configs(CONFIGS_YAML)
}

/// Template root with a schema and custom configurations content.
pub fn template_with_configs(configs: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("cookiecutter.json"), SCHEMA_JSON).unwrap();
    std::fs::write(tmp.path().join("test_configs.yaml"), configs).unwrap();
    tmp
}

/// A stand-in engine: derives the project directory from `project_name` the
/// same way the real engine does and writes the expected tree.
#[cfg(unix)]
pub fn stub_engine(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "stub-engine.sh",
        r#"out=""
name="project_name"
while [ $# -gt 0 ]; do
  case "$1" in
    --output-dir) out="$2"; shift 2 ;;
    project_name=*) name="${1#project_name=}"; shift ;;
    *) shift ;;
  esac
done
slug=$(printf '%s' "$name" | tr 'A-Z' 'a-z' | tr ' ' '_')
proj="$out/$slug"
mkdir -p "$proj/data" "$proj/notebooks" "$proj/tests" "$proj/$slug"
: > "$proj/README.md"
: > "$proj/.gitignore"
"#,
    )
}

/// An engine that hangs until killed.
#[cfg(unix)]
pub fn hanging_engine(dir: &Path) -> PathBuf {
    write_script(dir, "hanging-engine.sh", "sleep 30\n")
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
