//! Isolated environment for running the `beanshelf` binary.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

/// Host that refuses connections, so every fetch fails fast.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use beanshelf_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    primary: String,
    secondary: String,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an environment whose endpoints are both unreachable.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            primary: UNREACHABLE.to_string(),
            secondary: UNREACHABLE.to_string(),
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_primary(mut self, url: impl Into<String>) -> Self {
        self.primary = url.into();
        self
    }

    pub fn with_secondary(mut self, url: impl Into<String>) -> Self {
        self.secondary = url.into();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Apply data dir, endpoints and env vars to `cmd`.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--primary-url")
            .arg(&self.primary)
            .arg("--secondary-url")
            .arg(&self.secondary)
            .arg("--timeout-ms")
            .arg("2000");

        cmd.env_remove("BEANSHELF_PATH");
        cmd.env_remove("BEANSHELF_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `beanshelf` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("beanshelf")
            .map_err(|e| anyhow::anyhow!("Failed to find beanshelf binary: {}", e))?;

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
}
