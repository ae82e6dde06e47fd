//! The six content panels behind the die.
//!
//! The widget is a navigation control; in this standalone binary the
//! "page" is a set of titled panels whose active one is surfaced through
//! the window title and the log.

use tracing::info;
use tumble_nav::{Section, SectionHost};

/// One content panel.
#[derive(Debug, Clone)]
struct Panel {
    title: &'static str,
    active: bool,
}

/// All six panels plus the navigation highlight, implementing the host
/// contract the switcher drives.
#[derive(Debug, Clone)]
pub struct PanelSet {
    panels: [Panel; 6],
    nav_current: Section,
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSet {
    /// Creates the full panel set, one panel per section, none active
    /// yet. The switcher activates the default at construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panels: Section::ALL.map(|section| Panel {
                title: section.title(),
                active: false,
            }),
            nav_current: Section::DEFAULT,
        }
    }

    /// Title of the active panel.
    #[must_use]
    pub fn active_title(&self) -> &'static str {
        self.panels
            .iter()
            .find(|p| p.active)
            .map(|p| p.title)
            .unwrap_or("")
    }

    /// The section highlighted in the navigation.
    #[must_use]
    pub fn nav_current(&self) -> Section {
        self.nav_current
    }
}

impl SectionHost for PanelSet {
    fn has_panel(&self, _section: Section) -> bool {
        true
    }

    fn set_panel_active(&mut self, section: Section, active: bool) {
        let panel = &mut self.panels[section.index()];
        if active && !panel.active {
            info!(section = section.id(), "showing {}", panel.title);
        }
        panel.active = active;
    }

    fn set_nav_current(&mut self, section: Section) {
        self.nav_current = section;
    }
}
