//! TUI (Text User Interface) module for brandcheck
//!
//! Interactive single-screen surface built on ratatui: a name field, the
//! rendered analysis, and a links overlay.

mod app;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{Action, KeyHandler, Mode};
pub use presenter::TuiPresenter;
pub use state::TuiState;
