//! CLI smoke tests for instep.
//!
//! These tests verify that all CLI commands run without panicking and
//! return appropriate exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the instep binary with a clean configuration
/// environment.
fn instep_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("instep");
  cmd
    .env_remove("INSTEP_ROOT")
    .env_remove("INSTEP_CFLAGS")
    .env_remove("INSTEP_64BIT")
    .env_remove("INSTEP_PIP");
  cmd
}

/// Lay out a recipe file plus its source directory and an installation
/// prefix in a temp directory. Returns the temp dir; the recipe lives at
/// `recipe.toml` and the prefix at `prefix/`.
fn temp_recipe(body: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::create_dir_all(temp.path().join("src")).unwrap();
  std::fs::create_dir_all(temp.path().join("prefix")).unwrap();
  std::fs::write(temp.path().join("recipe.toml"), body).unwrap();
  temp
}

const OK_RECIPE: &str = r#"
name = "okpkg"
source-dir = "src"

[build]
command = "touch built"

[install]
command = "touch installed"
"#;

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  instep_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  instep_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("instep"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["install", "plan", "clean", "check"] {
    instep_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// check
// =============================================================================

#[test]
#[serial]
fn check_fails_without_install_root() {
  instep_cmd()
    .arg("check")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("INSTEP_ROOT"));
}

#[test]
#[serial]
fn check_fails_with_empty_install_root() {
  instep_cmd()
    .arg("check")
    .env("INSTEP_ROOT", "")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("INSTEP_ROOT"));
}

#[test]
fn check_reports_configuration() {
  instep_cmd()
    .arg("check")
    .env("INSTEP_ROOT", "/opt/pkgs")
    .env("INSTEP_64BIT", "yes")
    .assert()
    .success()
    .stdout(predicate::str::contains("/opt/pkgs"))
    .stdout(predicate::str::contains("64-bit build: yes"));
}

#[test]
fn check_json_output() {
  instep_cmd()
    .arg("check")
    .arg("--json")
    .env("INSTEP_ROOT", "/opt/pkgs")
    .assert()
    .success()
    .stdout(predicate::str::contains("\"install_root\""));
}

// =============================================================================
// install
// =============================================================================

#[test]
#[cfg(unix)]
fn install_runs_build_and_install() {
  let temp = temp_recipe(OK_RECIPE);

  instep_cmd()
    .arg("install")
    .arg(temp.path().join("recipe.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .success()
    .stdout(predicate::str::contains("okpkg"));

  assert!(temp.path().join("src/built").exists());
  assert!(temp.path().join("src/installed").exists());
}

#[test]
fn install_fails_without_install_root() {
  let temp = temp_recipe(OK_RECIPE);

  instep_cmd()
    .arg("install")
    .arg(temp.path().join("recipe.toml"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("INSTEP_ROOT"));

  // Precondition failure happens before any step runs
  assert!(!temp.path().join("src/built").exists());
}

#[test]
#[cfg(unix)]
fn install_propagates_tool_exit_code() {
  let temp = temp_recipe(
    r#"
name = "badpkg"
source-dir = "src"

[install]
command = "exit 2"
"#,
  );

  instep_cmd()
    .arg("install")
    .arg(temp.path().join("recipe.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .failure()
    .code(2)
    .stderr(predicate::str::contains("badpkg"));
}

#[test]
#[cfg(unix)]
fn failed_build_skips_install() {
  let temp = temp_recipe(
    r#"
name = "badpkg"
source-dir = "src"

[build]
command = "exit 1"

[install]
command = "touch installed"
"#,
  );

  instep_cmd()
    .arg("install")
    .arg(temp.path().join("recipe.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("build step failed"));

  assert!(!temp.path().join("src/installed").exists());
}

#[test]
fn install_rejects_missing_recipe() {
  let temp = TempDir::new().unwrap();

  instep_cmd()
    .arg("install")
    .arg(temp.path().join("nope.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("invalid recipe"));
}

#[test]
fn install_rejects_missing_source_dir() {
  let temp = temp_recipe(OK_RECIPE);
  std::fs::remove_dir(temp.path().join("src")).unwrap();

  instep_cmd()
    .arg("install")
    .arg(temp.path().join("recipe.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("source directory"));
}

// =============================================================================
// plan
// =============================================================================

#[test]
fn plan_prints_steps_without_executing() {
  let temp = temp_recipe(OK_RECIPE);

  instep_cmd()
    .arg("plan")
    .arg(temp.path().join("recipe.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .success()
    .stdout(predicate::str::contains("touch built"))
    .stdout(predicate::str::contains("touch installed"));

  assert!(!temp.path().join("src/built").exists());
  assert!(!temp.path().join("src/installed").exists());
}

// =============================================================================
// clean
// =============================================================================

#[test]
fn clean_sweeps_stale_artifacts() {
  let temp = temp_recipe(
    r#"
name = "frobby"
source-dir = "src"

[[clean]]
dir = "lib"
fragments = ["libfrobby"]

[install]
command = "true"
"#,
  );
  let lib = temp.path().join("prefix/lib");
  std::fs::create_dir_all(&lib).unwrap();
  std::fs::write(lib.join("libfrobby.so"), b"").unwrap();

  instep_cmd()
    .arg("clean")
    .arg(temp.path().join("recipe.toml"))
    .env("INSTEP_ROOT", temp.path().join("prefix"))
    .assert()
    .success()
    .stdout(predicate::str::contains("libfrobby.so"));

  assert!(!lib.join("libfrobby.so").exists());
}
