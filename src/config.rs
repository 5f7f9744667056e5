// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;

fn default_true() -> bool {
    true
}

fn default_user_name() -> String {
    "mate".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name used in the greeting.
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// One of off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Write the task file after every command that changes the list.
    #[serde(default = "default_true")]
    pub autosave: bool,
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            log_level: default_log_level(),
            autosave: true,
            show_welcome: true,
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// A missing file is an error; see [`Config::is_missing_config_error`].
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_missing_config_yields_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let ctx = TestContext::new();
        fs::write(ctx.get_config_file_path().unwrap(), "user_name = \"Sam\"\n").unwrap();
        let cfg = Config::load(&ctx).unwrap();
        assert_eq!(cfg.user_name, "Sam");
        assert!(cfg.autosave);
        assert_eq!(cfg.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_malformed_config_is_not_missing() {
        let ctx = TestContext::new();
        fs::write(ctx.get_config_file_path().unwrap(), "autosave = maybe").unwrap();
        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
    }

    #[test]
    fn test_save_round_trips() {
        let ctx = TestContext::new();
        let cfg = Config {
            user_name: "Robin".into(),
            log_level: "debug".into(),
            autosave: false,
            show_welcome: false,
        };
        cfg.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), cfg);
    }
}
