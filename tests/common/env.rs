//! Test environment for running the `sweep` binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests
const SCRUBBED_VARS: &[&str] = &[
    "SWEEP_SNAPSHOT",
    "SWEEP_THINKING_DELAY_MS",
    "SWEEP_TOP_N",
    "SWEEP_VERBOSITY",
    "LC_ALL",
    "LC_CTYPE",
    "CI",
    "GITHUB_ACTIONS",
];

/// Result of running a Sweep CLI command
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

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }

    /// The first JSON line whose `event` field equals `event`
    pub fn json_event(&self, event: &str) -> serde_json::Value {
        self.json_lines()
            .into_iter()
            .find(|line| line["event"] == event)
            .unwrap_or_else(|| panic!("no '{event}' event in stdout:\n{}", self.stdout))
    }
}

/// Isolated project (with a `.sweep/` directory) and home directory
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    sweep_bin: PathBuf,
}

impl TestEnv {
    /// Fresh project with no snapshot
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("create project dir");
        std::fs::create_dir_all(project_root.path().join(".sweep")).expect("create .sweep");
        Self {
            project_root,
            home_dir: tempfile::tempdir().expect("create home dir"),
            sweep_bin: PathBuf::from(env!("CARGO_BIN_EXE_sweep")),
        }
    }

    /// Project with the demo snapshot written by `sweep init`
    pub fn with_demo() -> Self {
        let env = Self::new();
        let result = env.run(&["init"]);
        assert!(
            result.success,
            "sweep init failed:\n{}",
            result.combined_output()
        );
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Default snapshot location
    pub fn snapshot_path(&self) -> PathBuf {
        self.project_path(".sweep/snapshot.json")
    }

    /// Parsed snapshot file
    pub fn read_snapshot(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.snapshot_path()).expect("read snapshot");
        serde_json::from_str(&content).expect("snapshot is JSON")
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
    }

    /// Run sweep from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run sweep from the project root with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.sweep_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("LANG", "C")
            .env("NO_COLOR", "1");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute sweep");
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
