//! The six page sections, their binding to die faces, and the switcher
//! that keeps exactly one section active.

mod section;
mod switcher;

pub use section::Section;
pub use switcher::{SectionHost, SectionSwitcher, SwitcherError};
