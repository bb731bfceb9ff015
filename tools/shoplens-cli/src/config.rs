//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoplens_commerce::engine::EngineConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Engine configuration.
    #[serde(default)]
    pub search: EngineConfig,

    /// The searching user.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Search history storage.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Profile of the searching user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// User id search records are stored under.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Country code; detected from the environment when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            country: None,
        }
    }
}

/// History configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Record searches.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// History file; defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or env-filter directive (e.g., "warn", "shoplens_commerce=debug").
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Generate a default shoplens.toml config file.
pub fn generate_default_config() -> String {
    r#"# ShopLens configuration

[search]
# Maximum listings returned per search
result_cap = 50
# Listings generated per brand, price tier and platform
variants_per_combination = 2
# Only use brands popular in the selected market
local_brands_only = false

[profile]
user_id = "local"
# Leave unset to detect from TZ and LANG
# country = "IN"

[history]
enabled = true
# path = "shoplens-history.json"

[logging]
level = "warn"
format = "compact"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.search, EngineConfig::default());
        assert_eq!(config.profile.user_id, "local");
        assert_eq!(config.profile.country, None);
        assert!(config.history.enabled);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
[profile]
country = "in"

[search]
local_brands_only = true

[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.profile.country.as_deref(), Some("in"));
        assert_eq!(config.profile.user_id, "local");
        assert!(config.search.local_brands_only);
        assert_eq!(config.search.result_cap, 50);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoplens.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.profile.country = Some("GB".to_string());
        config.save(path).unwrap();

        let loaded = CliConfig::load(path).unwrap();
        assert_eq!(loaded.profile.country.as_deref(), Some("GB"));
        assert_eq!(loaded.search, EngineConfig::default());
    }
}
