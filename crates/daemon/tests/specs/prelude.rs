//! Shared helpers for binary specs

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const VALID_CONFIG: &str = r#"
log_channel = "900"
poll_interval = "30s"

[[mirror]]
listen = ["G1"]
distribute = ["G2"]
description_suffix = "Mirrored from G1"
types = { voice = true, stage_instance = true }

[[announce]]
channels = ["C1"]
message = "Heads up"
types = { created = true, started = true }
"#;

/// A temporary directory holding configuration files
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative` and return the full path
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// The daemon binary with a clean environment
    pub fn emd(&self) -> Command {
        let mut cmd = Command::cargo_bin("emd").unwrap();
        cmd.env_remove("DISCORD_TOKEN")
            .env_remove("EMD_DEBUG")
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("RUST_LOG", "info")
            .current_dir(self.path());
        cmd
    }
}

/// Captured output of a finished run
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

pub trait RunExt {
    fn run(&mut self) -> Run;
}

impl RunExt for Command {
    fn run(&mut self) -> Run {
        let output = self.output().unwrap();
        Run {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        }
    }
}

impl Run {
    pub fn passes(self) -> Self {
        assert!(self.success, "expected success, stderr:\n{}", self.stderr);
        self
    }

    pub fn fails(self) -> Self {
        assert!(!self.success, "expected failure, stdout:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
