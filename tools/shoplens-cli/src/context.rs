//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shoplens_commerce::catalog::TemplateCatalog;
use shoplens_commerce::engine::SearchEngine;
use shoplens_commerce::market::{resolve_country, MarketRegistry};
use shoplens_commerce::UserId;

use crate::config::CliConfig;
use crate::history_store::JsonFileHistory;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["shoplens.toml", ".shoplens.toml", "shoplens.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    markets: Arc<MarketRegistry>,
    catalog: Arc<TemplateCatalog>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        config
            .search
            .validate()
            .context("Invalid [search] configuration")?;

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            markets: Arc::new(MarketRegistry::builtin()),
            catalog: Arc::new(TemplateCatalog::builtin()),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Build a search engine from the loaded config.
    pub fn engine(&self) -> Result<SearchEngine> {
        SearchEngine::new(
            Arc::clone(&self.markets),
            Arc::clone(&self.catalog),
            self.config.search.clone(),
        )
        .context("Invalid [search] configuration")
    }

    pub fn markets(&self) -> &MarketRegistry {
        &self.markets
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Country for a search: the flag, then the profile, then the environment.
    pub fn country(&self, flag: Option<&str>) -> String {
        let profile = flag.or(self.config.profile.country.as_deref());
        let timezone = std::env::var("TZ").ok();
        let locale = std::env::var("LC_ALL")
            .ok()
            .filter(|l| !l.is_empty())
            .or_else(|| std::env::var("LANG").ok());
        resolve_country(profile, timezone.as_deref(), locale.as_deref())
    }

    pub fn user_id(&self) -> UserId {
        UserId::new(self.config.profile.user_id.clone())
    }

    /// Search history store.
    pub fn history(&self) -> JsonFileHistory {
        let path = match &self.config.history.path {
            Some(path) => self.resolve_path(path),
            None => dirs_path().join("shoplens").join("history.json"),
        };
        JsonFileHistory::new(path)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".shoplens.toml"),
            "[profile]\nuser_id = \"alice\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.profile.user_id, "alice");
        assert!(path.ends_with(".shoplens.toml"));
    }
}
