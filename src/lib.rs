//! Core library surface for the student record manager.
//!
//! `models` and `roster` hold the record model and its queries and never touch
//! the terminal or the filesystem. `ui` is the interactive front end that owns
//! a `Roster`, while `config` and `logging` cover its start-up plumbing.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod roster;
pub mod ui;

pub use config::{load_config, AppConfig};
pub use error::{RecordError, RecordResult};

/// The primary domain types that other layers manipulate.
pub use models::{ClassStatistics, GradeStatus, Record, RecordUpdate};
pub use roster::Roster;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
