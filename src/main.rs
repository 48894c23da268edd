//! Binary entry point: read the optional config, start file logging, and drive
//! the Ratatui event loop over an empty in-memory roster until the user exits.
use student_record_manager::config::{app_dir, config_path};
use student_record_manager::{load_config, logging, run_app, App, Roster};

/// Returning a `Result` reports start-up problems (an unreadable config file,
/// no usable terminal) instead of leaving the terminal in raw mode.
fn main() -> anyhow::Result<()> {
    let dir = app_dir()?;
    let config = load_config(&config_path(&dir))?;
    let log_path = logging::init(&dir, &config.log_filter)?;
    tracing::info!(log = %log_path.display(), top_n = config.top_n, "starting");

    let mut app = App::new(Roster::new(), config);
    run_app(&mut app)
}
