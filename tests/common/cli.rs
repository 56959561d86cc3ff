//! End-to-end test helpers: isolated workspace + binary runner.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Isolated home and working directories for one test.
///
/// `HOME` is pointed at a tempdir so the global `.sac.yaml` never touches
/// the real user environment.
pub struct SacWorkspace {
    pub home: TempDir,
    pub root: TempDir,
}

impl SacWorkspace {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
            root: TempDir::new().expect("create temp workspace"),
        }
    }

    /// Write the global configuration file (`$HOME/.sac.yaml`).
    pub fn write_global(&self, content: &str) {
        fs::write(self.home.path().join(".sac.yaml"), content).expect("write global config");
    }

    /// Write the local override file (`./.sac.yaml`).
    pub fn write_local(&self, content: &str) {
        fs::write(self.root.path().join(".sac.yaml"), content).expect("write local config");
    }
}

/// Captured output of one `sac` invocation.
pub struct CommandOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run the `sac` binary inside the workspace and capture its output.
pub fn run_sac<'a, I>(workspace: &SacWorkspace, args: I, label: &str) -> CommandOutput
where
    I: IntoIterator<Item = &'a str>,
{
    let output = Command::cargo_bin("sac")
        .expect("sac binary built")
        .env("HOME", workspace.home.path())
        .env_remove("RUST_LOG")
        .current_dir(workspace.root.path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run sac: {e}"));

    CommandOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
