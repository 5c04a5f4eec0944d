use anyhow::{Context, Result};
use codex_engine::SourceResolver;
use codex_types::ContentConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::presentation::views::LayoutMetrics;

pub const CONFIG_ENV: &str = "SOUL_CODEX_CONFIG";
pub const DATASET_ENV: &str = "SOUL_CODEX_DATASET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Layout scale for the terminal surface.
    pub scale: Option<f32>,
}

impl Config {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Config location by priority:
    /// 1. Explicit `--config` path
    /// 2. `SOUL_CODEX_CONFIG` environment variable
    /// 3. `<config dir>/soul-codex/codex.toml`
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Some(expand_tilde(&env_path));
        }
        Self::default_path()
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("soul-codex").join("codex.toml"))
    }

    /// Loads the config from [`Config::resolve_path`], or defaults when no
    /// location can be determined.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Dataset source by priority: `--dataset`, `SOUL_CODEX_DATASET`,
    /// `[dataset].path`, then default probing.
    pub fn dataset_resolver(&self, flag: Option<&Path>) -> SourceResolver {
        select_resolver(
            flag,
            std::env::var(DATASET_ENV).ok().as_deref(),
            self.dataset.path.as_deref(),
        )
    }

    pub fn terminal_metrics(&self) -> LayoutMetrics {
        match self.ui.scale {
            Some(scale) => LayoutMetrics::new(scale),
            None => LayoutMetrics::terminal(),
        }
    }
}

pub fn select_resolver(
    flag: Option<&Path>,
    env: Option<&str>,
    configured: Option<&str>,
) -> SourceResolver {
    if let Some(path) = flag {
        return SourceResolver::explicit(path);
    }
    if let Some(path) = env.filter(|value| !value.trim().is_empty()) {
        return SourceResolver::explicit(expand_tilde(path));
    }
    if let Some(path) = configured.filter(|value| !value.trim().is_empty()) {
        return SourceResolver::explicit(expand_tilde(path));
    }
    SourceResolver::default()
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_testing::TestWorld;
use codex_testing::fixtures::SAMPLE_CONFIG;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_sample_config() -> Result<()> {
        let world = TestWorld::new().with_config(SAMPLE_CONFIG);

        let config = Config::load_from(world.config_path())?;

        assert_eq!(config.content.primary_action_label.as_deref(), Some("Brief me"));
        assert_eq!(config.content.highlights.len(), 3);
        assert_eq!(config.content.hero_gradient, vec!["#2f245d", "#140e30"]);
        assert_eq!(config.ui.scale, Some(0.075));
        assert_eq!(config.dataset.path, None);
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("codex.toml");
        std::fs::write(&path, "[content\nheading = 1")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        Ok(())
    }

    #[test]
    fn test_resolver_precedence() {
        let flag = Path::new("/flag/souls.json");

        assert_eq!(
            select_resolver(Some(flag), Some("/env.json"), Some("/cfg.json")),
            SourceResolver::explicit(flag)
        );
        assert_eq!(
            select_resolver(None, Some("/env.json"), Some("/cfg.json")),
            SourceResolver::explicit("/env.json")
        );
        assert_eq!(
            select_resolver(None, Some(" "), Some("/cfg.json")),
            SourceResolver::explicit("/cfg.json")
        );
        assert!(matches!(
            select_resolver(None, None, None),
            SourceResolver::Probe { .. }
        ));
    }

    #[test]
    fn test_terminal_metrics_from_ui_scale() {
        let mut config = Config::default();
        assert_eq!(config.terminal_metrics(), LayoutMetrics::terminal());

        config.ui.scale = Some(0.1);
        assert_eq!(config.terminal_metrics().scale, 0.1);
    }
}
