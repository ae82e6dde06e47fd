//! The die widget application: window, event loop, and the controller
//! wiring the animator, switcher, and renderer together.

pub mod controller;
pub mod panels;
pub mod window;

pub use controller::DieController;
pub use panels::PanelSet;
pub use window::{AppState, run};
