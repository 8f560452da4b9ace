use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// An isolated HOME and session file for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn session_file(&self) -> PathBuf {
        self.dir.path().join("data").join("session.json")
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    /// Run the CLI against `api_url` with this sandbox's session file.
    pub fn run(&self, args: &[&str], api_url: &str) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_specdraft"));
        cmd.args(args);
        cmd.env("HOME", self.home());
        cmd.env("XDG_DATA_HOME", self.home().join("xdg"));
        cmd.env("SPECDRAFT_API_URL", api_url);
        cmd.env("SPECDRAFT_SESSION_FILE", self.session_file());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd.output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str], api_url: &str) -> String {
        let output = self.run(args, api_url);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI and expect failure, returning stderr.
    pub fn run_failure(&self, args: &[&str], api_url: &str) -> String {
        let output = self.run(args, api_url);
        if output.status.success() {
            panic!("CLI command should have failed: {:?}", args);
        }
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
