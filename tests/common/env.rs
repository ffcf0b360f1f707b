//! Isolated environment for running the `ppc` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a ppc command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Temp project directory plus a separate config home, so a developer's own
/// `ppc/config.toml` never leaks into a test.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    ppc_bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
            ppc_bin: PathBuf::from(env!("CARGO_BIN_EXE_ppc")),
        }
    }

    /// Project with the standard pack under `prompts/`
    pub fn with_standard_pack() -> Self {
        let env = Self::new();
        for (path, content) in super::fixtures::STANDARD_PACK {
            env.write_file(&format!("prompts/{path}"), content);
        }
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.ppc_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path());
        for key in [
            "PPC_PROMPTS_DIR",
            "PPC_PROFILES_DIR",
            "PPC_CONTRACT",
            "PPC_HASH_HEADER",
            "PPC_LOG",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ppc");
        to_result(output)
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
