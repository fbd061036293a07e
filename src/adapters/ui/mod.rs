//! Terminal UI adapter. Banner and inquire-based interactive session.

pub mod banner;
pub mod tui;

pub use tui::TuiInputPort;
