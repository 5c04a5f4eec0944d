//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::sample_records;

/// Isolated environment for CLI and loader tests.
///
/// # Example
/// ```no_run
/// use codex_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_dataset();
/// assert!(world.dataset_path().exists());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    dataset_path: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();

        Self {
            dataset_path: base_path.join("martial_souls.json"),
            config_path: base_path.join("codex.toml"),
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Writes `records` as the dataset file.
    pub fn with_dataset(self, records: &Value) -> Self {
        self.write_dataset(records).expect("Failed to write dataset");
        self
    }

    pub fn with_sample_dataset(self) -> Self {
        self.with_dataset(&sample_records())
    }

    /// Writes raw text as the dataset file, for malformed-input cases.
    pub fn with_raw_dataset(self, content: &str) -> Self {
        std::fs::write(&self.dataset_path, content).expect("Failed to write dataset");
        self
    }

    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn write_dataset(&self, records: &Value) -> Result<()> {
        std::fs::write(&self.dataset_path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }

    /// Points a CLI command at this world's dataset and config.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("codex")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--dataset")
            .arg(&self.dataset_path)
            .arg("--config")
            .arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("SOUL_CODEX_DATASET");
        cmd.env_remove("SOUL_CODEX_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
