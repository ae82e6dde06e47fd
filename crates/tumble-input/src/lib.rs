//! Pointer tracking and die picking for the widget window.

pub mod picking;
pub mod pointer;

pub use picking::{PickRay, pick_die};
pub use pointer::PointerState;
