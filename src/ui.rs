//! Ratatui front-end: a list of students with a detail pane, modal forms for
//! adding, editing and grading, a removal confirmation, and the ranking and
//! class statistics screens. Everything it shows is computed by the roster.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
