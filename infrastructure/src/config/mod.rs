//! Configuration loading with multi-source merging.
//!
//! Priority (highest to lowest):
//! 1. Environment overrides (`GAVEL_API_KEY` / `OPENROUTER_API_KEY`,
//!    `GAVEL_MODEL`, `GAVEL_BASE_URL`)
//! 2. Explicit config path (if provided)
//! 3. Project root: `./gavel.toml` or `./.gavel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/gavel/config.toml`
//! 5. Default values

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use gavel_application::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Oracle backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// API key; absent means the oracle is unavailable
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "openai/gpt-4o-mini".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
        }
    }
}

/// Deep-analysis cadence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub poll_interval_seconds: u64,
    pub min_gap_seconds: u64,
    pub batch_size: usize,
    pub insight_cadence: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: 3,
            min_gap_seconds: 5,
            batch_size: 3,
            insight_cadence: 10,
        }
    }
}

/// Battle behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Wait for the counsel reply before returning the prompt
    pub synchronous_replies: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            synchronous_replies: true,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GavelConfig {
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub battle: BattleConfig,
}

impl GavelConfig {
    /// Load configuration from all sources with proper priority.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(GavelConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["gavel.toml", ".gavel.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        let mut config: GavelConfig = figment.extract().map_err(Box::new)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Built-in defaults only (for `--no-config`).
    pub fn load_defaults() -> Self {
        Self::default()
    }

    /// Global config file path under the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gavel").join("config.toml"))
    }

    /// Engine tuning derived from the analysis and battle sections.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            analysis_poll_interval: Duration::from_secs(self.analysis.poll_interval_seconds),
            analysis_min_gap: Duration::from_secs(self.analysis.min_gap_seconds),
            analysis_batch_size: self.analysis.batch_size,
            insight_cadence: self.analysis.insight_cadence,
            background_tasks: true,
            synchronous_replies: self.battle.synchronous_replies,
        }
    }

    fn apply_env_overrides(&mut self) {
        // GAVEL_API_KEY wins; OPENROUTER_API_KEY is the conventional
        // fallback for direct OpenRouter users.
        if let Ok(key) = std::env::var("GAVEL_API_KEY") {
            self.oracle.api_key = Some(key);
        } else if self.oracle.api_key.is_none()
            && let Ok(key) = std::env::var("OPENROUTER_API_KEY")
        {
            self.oracle.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("GAVEL_MODEL") {
            self.oracle.model = model;
        }
        if let Ok(base_url) = std::env::var("GAVEL_BASE_URL") {
            self.oracle.base_url = base_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GavelConfig::load_defaults();
        assert!(config.oracle.api_key.is_none());
        assert_eq!(config.analysis.poll_interval_seconds, 3);
        assert_eq!(config.analysis.min_gap_seconds, 5);
        assert_eq!(config.analysis.batch_size, 3);
        assert_eq!(config.analysis.insight_cadence, 10);
        assert!(config.battle.synchronous_replies);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(GavelConfig::default()))
            .merge(Toml::string(
                r#"
                [oracle]
                model = "anthropic/claude-sonnet-4"

                [analysis]
                batch_size = 5
                "#,
            ));
        let config: GavelConfig = figment.extract().unwrap();
        assert_eq!(config.oracle.model, "anthropic/claude-sonnet-4");
        assert_eq!(config.analysis.batch_size, 5);
        // Untouched sections keep their defaults.
        assert_eq!(config.analysis.insight_cadence, 10);
        assert_eq!(config.oracle.base_url, "https://openrouter.ai/api/v1");
    }

    #[test]
    fn test_engine_config_reflects_analysis_section() {
        let mut config = GavelConfig::default();
        config.analysis.poll_interval_seconds = 7;
        config.battle.synchronous_replies = false;
        let engine = config.engine_config();
        assert_eq!(engine.analysis_poll_interval, Duration::from_secs(7));
        assert!(!engine.synchronous_replies);
        assert!(engine.background_tasks);
    }

    #[test]
    fn test_global_config_path_mentions_gavel() {
        let path = GavelConfig::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("gavel"));
    }
}
