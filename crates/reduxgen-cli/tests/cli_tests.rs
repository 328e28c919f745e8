//! End-to-end tests for the reduxgen binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary running in `dir`, isolated from the caller's configuration.
fn reduxgen(dir: &Path) -> Command {
    let config = dir.join("reduxgen-test.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = Command::cargo_bin("reduxgen").unwrap();
    cmd.current_dir(dir)
        .env_remove("REDUXGEN_PACKAGE_MANAGER")
        .env_remove("REDUXGEN_PACKAGE_RUNNER")
        .env_remove("REDUXGEN_TEMPLATES_DIR")
        .env_remove("REDUXGEN_STRICT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config);
    cmd
}

#[test]
fn version_flag_prints_package_version() {
    let mut cmd = Command::cargo_bin("reduxgen").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_generation_flags() {
    let mut cmd = Command::cargo_bin("reduxgen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-install"))
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("APP_NAME"));
}

#[test]
fn missing_app_name_is_usage_error() {
    let temp = TempDir::new().unwrap();
    reduxgen(temp.path()).assert().failure().code(2);
}

#[test]
fn skip_install_generates_layout() {
    let temp = TempDir::new().unwrap();

    reduxgen(temp.path())
        .args(["demo", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created demo with Redux and Tailwind CSS setup.",
        ))
        .stdout(predicate::str::contains("Run the following commands to get started:"))
        .stdout(predicate::str::contains("  cd demo"))
        .stdout(predicate::str::contains("run dev"));

    let root = temp.path().join("demo");
    for file in [
        "package.json",
        "tailwind.config.js",
        "styles/globals.css",
        "store/index.js",
        "features/counter/counterSlice.js",
        "pages/_app.js",
        "pages/index.js",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["scripts"]["build"], "next build");
}

#[test]
fn existing_directory_exits_one() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();
    fs::write(temp.path().join("demo").join("keep.txt"), "mine").unwrap();

    reduxgen(temp.path())
        .args(["demo", "--skip-install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let entries: Vec<_> = fs::read_dir(temp.path().join("demo")).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn invalid_name_exits_two() {
    let temp = TempDir::new().unwrap();

    reduxgen(temp.path())
        .args(["bad name!", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid app name"));

    assert!(!temp.path().join("bad name!").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    reduxgen(temp.path())
        .args(["demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("run `npm install`"))
        .stdout(predicate::str::contains("write tailwind.config.js"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn json_output_is_a_report() {
    let temp = TempDir::new().unwrap();

    let out = reduxgen(temp.path())
        .args(["demo", "--skip-install", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["name"], "demo");
    assert_eq!(report["commands"].as_array().unwrap().len(), 0);
    assert!(report["files_written"].as_u64().unwrap() >= 7);
}

#[test]
fn bad_config_file_exits_four() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[generator\n").unwrap();

    let mut cmd = Command::cargo_bin("reduxgen").unwrap();
    cmd.current_dir(temp.path())
        .args(["demo", "--skip-install", "--config"])
        .arg(&config)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn templates_directory_overrides_bundled_set() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    for asset in ["store", "features", "pages"] {
        fs::create_dir_all(templates.join(asset)).unwrap();
        fs::write(templates.join(asset).join("README.md"), asset).unwrap();
    }

    reduxgen(temp.path())
        .args(["demo", "--skip-install", "--templates"])
        .arg(&templates)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("demo/pages/README.md")).unwrap(),
        "pages"
    );
    assert!(!temp.path().join("demo/pages/_app.js").exists());
}

#[cfg(unix)]
mod install_failures {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Executable that ignores its arguments and exits with `code`.
    fn failing_tool(dir: &Path, code: i32) -> PathBuf {
        let path = dir.join("fake-npm");
        fs::write(&path, format!("#!/bin/sh\nexit {code}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn dry_run_warns_about_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("demo")).unwrap();

        reduxgen(temp.path())
            .args(["demo", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));

        reduxgen(temp.path())
            .args(["demo", "--skip-install"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn lenient_run_finishes_and_reports_code() {
        let temp = TempDir::new().unwrap();
        let tool = failing_tool(temp.path(), 3);

        reduxgen(temp.path())
            .arg("demo")
            .arg("--package-manager")
            .arg(&tool)
            .arg("--package-runner")
            .arg(&tool)
            .assert()
            .code(3)
            .stdout(predicate::str::contains("Installing dependencies for demo..."))
            .stdout(predicate::str::contains("Installing Tailwind CSS..."))
            .stdout(predicate::str::contains("Created demo"))
            .stderr(predicate::str::contains("3 command(s) failed"));

        assert!(temp.path().join("demo/tailwind.config.js").is_file());
        assert!(temp.path().join("demo/styles/globals.css").is_file());
    }

    #[test]
    fn strict_run_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        let tool = failing_tool(temp.path(), 5);

        reduxgen(temp.path())
            .args(["demo", "--strict"])
            .arg("--package-manager")
            .arg(&tool)
            .assert()
            .code(5)
            .stderr(predicate::str::contains("exited with status 5"));

        assert!(temp.path().join("demo/package.json").is_file());
        assert!(!temp.path().join("demo/tailwind.config.js").exists());
    }

    #[test]
    fn missing_package_manager_exits_one() {
        let temp = TempDir::new().unwrap();

        reduxgen(temp.path())
            .args([
                "demo",
                "--package-manager",
                "reduxgen-no-such-tool",
                "--package-runner",
                "reduxgen-no-such-tool",
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("did not complete"));

        assert!(temp.path().join("demo/styles/globals.css").is_file());
    }
}
