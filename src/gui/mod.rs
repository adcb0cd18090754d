//! GUI module - User interface components

mod app;
mod history_dialog;
mod input_panel;

pub use app::PullbackApp;
pub use history_dialog::{HistoryDialog, HistoryDialogAction};
pub use input_panel::{InputAction, InputPanel};
