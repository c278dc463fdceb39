//! Test environment for running the `victor` binary
//!
//! Holds a temp directory with a program directory inside, and runs the
//! binary with every `PLUGIN_*` variable of the outer environment removed.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(dir.path().join("program")).expect("create program dir");
        std::fs::write(dir.path().join("program/Pulumi.yaml"), "name: ctf\nruntime: go\n")
            .expect("write Pulumi.yaml");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn program_dir(&self) -> PathBuf {
        self.dir.path().join("program")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write an executable shell script standing in for the pulumi binary
    #[cfg(unix)]
    pub fn fake_pulumi(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("pulumi");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake pulumi");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake pulumi");
        path
    }

    /// Base command with an isolated environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_victor"));
        for (key, _) in std::env::vars_os() {
            let key = key.to_string_lossy().into_owned();
            let inherited_setting = key.starts_with("PLUGIN_")
                || key == "PULUMI_CONFIG_PASSPHRASE"
                || key == "RUST_LOG";
            if inherited_setting {
                cmd.env_remove(key);
            }
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run victor")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
