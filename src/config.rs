//! Front-end settings stored in `~/.student-records/config.toml`. The file is
//! optional and only tunes presentation; student records themselves are never
//! written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

/// Folder name used beneath the user's home directory for application files.
const APP_DIR_NAME: &str = ".student-records";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Missing fields fall back to [`AppConfig::default`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// How many students the "Top students" screen ranks.
    pub top_n: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(anyhow!("top_n must be > 0"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must not be empty"));
        }
        Ok(())
    }
}

/// Resolve the application directory inside the user's home.
pub fn app_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(APP_DIR_NAME))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load config from a TOML file, returning the defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
