//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory that doubles as `HOME`, so the CLI's
//! `~/` defaults resolve inside it.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `healthlog` binary.
///
/// # Example
/// ```no_run
/// use healthlog_testing::{ReportBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_log("health.log", &ReportBuilder::full("Mon Jan 06 10:00:00 UTC 2025").complete());
///
/// let result = world.run(&["health.log", "out.csv"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Temp directory root, also used as `HOME` and working directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Resolve a path relative to the world root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a log file relative to the world root.
    pub fn with_log(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("Failed to write log file");
        self
    }

    /// Write an arbitrary file (e.g. a config) relative to the world root.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("Failed to write file");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this world's cwd and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.root())
            .env("HOME", self.root())
            .env_remove("HEALTHLOG_CONFIG")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `healthlog` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("healthlog")
            .map_err(|e| anyhow::anyhow!("Failed to find healthlog binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
