//! Section activation with a host-collaborator contract.

use tracing::{info, warn};

use crate::section::Section;

/// The surrounding page, seen through the narrow contract the switcher
/// needs: six toggleable panels and a navigation highlight.
///
/// The host is a required collaborator. It is checked at construction for
/// the default section's panel; everything else may legitimately be
/// missing at runtime (a panel the page never rendered), which the
/// switcher treats as a warning, not an error.
pub trait SectionHost {
    /// Whether a panel backs the given section.
    fn has_panel(&self, section: Section) -> bool;

    /// Shows or hides the panel for `section`. Must be a no-op when the
    /// panel does not exist.
    fn set_panel_active(&mut self, section: Section, active: bool);

    /// Marks `section` as current in the navigation.
    fn set_nav_current(&mut self, section: Section);
}

/// Construction-time configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// The host cannot materialize the default section's panel.
    #[error("host has no panel for the default section '{0}'")]
    MissingDefaultPanel(&'static str),
}

/// Owns the active-section state and drives the host.
///
/// Exactly one section is active from construction onward; the switcher
/// mutates the host only through [`SectionHost`].
#[derive(Debug)]
pub struct SectionSwitcher {
    current: Section,
}

impl SectionSwitcher {
    /// Creates the switcher and activates the default section.
    ///
    /// Fails if the host lacks the default panel: a page without its
    /// fallback section is a configuration error, not something to patch
    /// around at runtime.
    pub fn new<H: SectionHost>(host: &mut H) -> Result<Self, SwitcherError> {
        if !host.has_panel(Section::DEFAULT) {
            return Err(SwitcherError::MissingDefaultPanel(Section::DEFAULT.id()));
        }

        for section in Section::ALL {
            host.set_panel_active(section, section == Section::DEFAULT);
        }
        host.set_nav_current(Section::DEFAULT);

        Ok(Self {
            current: Section::DEFAULT,
        })
    }

    /// The currently active section.
    #[must_use]
    pub fn current(&self) -> Section {
        self.current
    }

    /// Activates `target` and highlights it in the navigation.
    ///
    /// If the host has no panel for `target`, the swap is skipped with a
    /// warning and the previous section stays active.
    pub fn switch<H: SectionHost>(&mut self, host: &mut H, target: Section) {
        if !host.has_panel(target) {
            warn!(section = target.id(), "section has no panel, keeping {}", self.current.id());
            return;
        }

        for section in Section::ALL {
            host.set_panel_active(section, section == target);
        }
        host.set_nav_current(target);

        info!(from = self.current.id(), to = target.id(), "section switched");
        self.current = target;
    }
}
