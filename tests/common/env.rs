//! Test environment for isolated GymLog testing.
//!
//! Provides `TestEnv` - temp directories standing in for HOME, the data
//! directory and the config directory, plus helpers to run the `gymlog` CLI.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a GymLog CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("expected JSON output ({}):\n{}", e, self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory acting as HOME
    pub home_dir: TempDir,
    /// Path to the gymlog binary
    gymlog_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().expect("Failed to create temp home"),
            gymlog_bin: PathBuf::from(env!("CARGO_BIN_EXE_gymlog")),
        }
    }

    /// Environment with one profile created and active
    pub fn with_profile(name: &str) -> Self {
        let env = Self::new();
        let result = env.run(&["profile", "create", name]);
        assert!(result.success, "profile create failed: {}", result.stderr);
        env
    }

    /// Get path relative to the temp home
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Data directory the CLI writes to
    pub fn data_dir(&self) -> PathBuf {
        self.home_path("data")
    }

    /// Config file the CLI reads
    pub fn config_path(&self) -> PathBuf {
        self.home_path(".config/gymlog/config.toml")
    }

    /// Run gymlog CLI in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, None)
    }

    /// Run gymlog CLI, feeding `input` on stdin
    pub fn run_with_stdin(&self, args: &[&str], input: Option<&str>) -> TestResult {
        let mut cmd = Command::new(&self.gymlog_bin);
        cmd.current_dir(self.home_dir.path())
            .args(args)
            .with_test_home(self.home_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute gymlog");
        if let Some(mut stdin) = child.stdin.take() {
            // The CLI may exit before reading (e.g. no active profile)
            let _ = stdin.write_all(input.unwrap_or_default().as_bytes());
        }

        let output = child.wait_with_output().expect("Failed to wait for gymlog");
        self.output_to_result(output)
    }

    /// Convert Command output to TestResult
    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file relative to the temp home
    pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write the user config file
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create config dir");
        std::fs::write(path, content).expect("Failed to write config");
    }

    /// Save a workout document through the CLI and return its id
    pub fn add_workout(&self, document: &str) -> String {
        let result = self.run_with_stdin(&["--json", "workout", "add"], Some(document));
        assert!(result.success, "workout add failed: {}", result.stderr);
        result.json()["id"]
            .as_str()
            .expect("saved workout has an id")
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Point every directory GymLog resolves at the temp home.
pub trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("GYMLOG_DATA_DIR", home.join("data"))
            .env_remove("GYMLOG_VERBOSITY")
            .env_remove("RUST_LOG")
    }
}
