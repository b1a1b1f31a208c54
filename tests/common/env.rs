//! Test environment for isolated canonsort runs.
//!
//! Provides `TestEnv`: a temp working directory holding an `xml-p5` corpus,
//! a private HOME (so no user config leaks in), and helpers to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a canonsort CLI command
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
}

pub struct TestEnv {
    /// Working directory; the corpus lives in `xml-p5/` below it
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_canonsort")),
        };
        std::fs::create_dir_all(env.corpus_root()).expect("Failed to create corpus root");
        env
    }

    pub fn corpus_root(&self) -> PathBuf {
        self.work_dir.path().join("xml-p5")
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a document into the corpus
    pub fn write_doc(&self, relative: &str, content: &str) {
        write_file(&self.corpus_root().join(relative), content);
    }

    /// Write a file into the working directory
    pub fn write_file(&self, relative: &str, content: &str) {
        write_file(&self.path(relative), content);
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(relative))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative, e))
    }

    /// Run canonsort from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("CANONSORT_ROOT")
            .env_remove("CANONSORT_CANONS")
            .env_remove("CANONSORT_OUTPUT")
            .env_remove("CANONSORT_SAMPLE_CAP");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute canonsort");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
