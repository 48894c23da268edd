//! Diagnostic tracing for the TUI.
//!
//! The alternate screen owns stdout and stderr while the app runs, so events go
//! to `student-records.log` inside the application directory instead. The
//! filter comes from `RUST_LOG` when set, otherwise from the config file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "student-records.log";

/// Install the global subscriber, appending to the log file in `dir`.
pub fn init(dir: &Path, default_filter: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter `{default_filter}`"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(path)
}
