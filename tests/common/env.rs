//! Test environment for running the `paddock` binary in isolation.
//!
//! Every run gets its own HOME, XDG config dir, working directory and
//! store file under one temp directory, so no user config leaks in.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a paddock CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON (for `--json` runs)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON: {}\nstdout:\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("home")).unwrap();
        std::fs::create_dir_all(root.path().join("config")).unwrap();
        std::fs::create_dir_all(root.path().join("project")).unwrap();
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_paddock")),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.path().join("data/store.json")
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// Write `./paddock.toml` in the working directory
    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.project_dir().join("paddock.toml"), content).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.project_dir())
            .env("HOME", self.root.path().join("home"))
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("PADDOCK_STORE_PATH", self.store_path())
            .env("RUST_LOG", "off")
            .env_remove("PADDOCK_ACCOUNT")
            .env_remove("PADDOCK_MAX_ATTEMPTS")
            .env_remove("PADDOCK_REPAIR_ON_READ")
            .env_remove("PADDOCK_DETACH_ORPHANS")
            .env_remove("PADDOCK_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run with `--json --as <account>` prepended and expect success
    pub fn json_as(&self, account: &str, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--json", "--as", account];
        full.extend_from_slice(args);
        let result = self.run(&full);
        assert!(
            result.success,
            "paddock {:?} failed:\n{}",
            full,
            result.combined_output()
        );
        result.json()
    }

    pub fn add_account(&self, token: &str) {
        let result = self.run(&["account", "add", token]);
        assert!(result.success, "{}", result.combined_output());
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        Path::new(self.root.path()).join(relative)
    }
}
