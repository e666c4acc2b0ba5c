//! Shared helpers for CLI tests.
//!
//! `TestEnv` gives each test its own project and home directories and
//! runs the binary with every `CAPTABLE_*` override and `RUST_LOG`
//! cleared, so host configuration never leaks into results.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

const ENV_OVERRIDES: [&str; 5] = [
    "CAPTABLE_AS_OF",
    "CAPTABLE_POST_MONEY",
    "CAPTABLE_STRICT",
    "CAPTABLE_LOG",
    "RUST_LOG",
];

/// Result of one CLI run
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON, failing with stderr in the message
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}); stderr: {}", self.stderr))
    }
}

/// Isolated project + home directories
pub struct TestEnv {
    project_root: TempDir,
    home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file into the project directory
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        std::fs::write(self.project_path(relative), content).unwrap();
        self
    }

    /// Run the binary from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_captable"));
        cmd.current_dir(self.project_root.path()).args(args);
        isolate_home(&mut cmd, self.home_dir.path());
        for key in ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run captable");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn isolate_home(cmd: &mut Command, home: &Path) {
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"));
}
