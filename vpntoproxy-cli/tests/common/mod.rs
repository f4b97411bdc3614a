//! Common test utilities for CLI integration tests.
//!
//! Every run happens in its own temporary working directory with an empty
//! environment, so `./configs` and the variables seen by the binary are
//! fully controlled by the test.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory of the binary
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment. `configs/` is not created yet.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().to_path_buf();
        Self { temp_dir, work_dir }
    }

    /// The configs directory the binary reads.
    pub fn configs_dir(&self) -> PathBuf {
        self.work_dir.join("configs")
    }

    /// Path of the file of group `name`.
    pub fn group_file(&self, name: &str) -> PathBuf {
        self.configs_dir().join(format!("{name}.json"))
    }

    /// Write a group file by hand.
    pub fn write_group_file(&self, name: &str, content: &str) {
        fs::create_dir_all(self.configs_dir()).expect("Failed to create configs dir");
        fs::write(self.group_file(name), content).expect("Failed to write group file");
    }

    /// Command running the binary in the working directory with a clean
    /// environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vpntoproxy").expect("Failed to find vpntoproxy binary");
        cmd.current_dir(&self.work_dir).env_clear();
        cmd
    }

    /// Run with `args` and parse stdout as the printed configuration.
    pub fn resolve(&self, args: &[&str]) -> serde_json::Value {
        let output = self.cmd().args(args).output().expect("Failed to run vpntoproxy");
        assert!(
            output.status.success(),
            "vpntoproxy failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

