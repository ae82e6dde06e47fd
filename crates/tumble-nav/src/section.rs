//! The six content sections and their die-face bindings.

use glam::Quat;
use rand::Rng;
use tumble_die::DieFace;

/// A content section of the page, bound 1:1 to a die face by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Section {
    Introduction = 0,
    Skills = 1,
    Experience = 2,
    Achievement = 3,
    Education = 4,
    Connect = 5,
}

impl Section {
    /// All six sections in face order.
    pub const ALL: [Section; 6] = [
        Section::Introduction,
        Section::Skills,
        Section::Experience,
        Section::Achievement,
        Section::Education,
        Section::Connect,
    ];

    /// The default section, shown at startup and used as the lookup
    /// fallback.
    pub const DEFAULT: Section = Section::Introduction;

    /// Stable string identifier, matching the page's panel ids.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Achievement => "achievement",
            Section::Education => "education",
            Section::Connect => "connect",
        }
    }

    /// Human-readable heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Achievement => "Achievements",
            Section::Education => "Education",
            Section::Connect => "Connect",
        }
    }

    /// Parses a section identifier. Returns `None` for unknown ids.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Resolves an identifier, falling back to [`Section::DEFAULT`] when
    /// the id names no known section.
    #[must_use]
    pub fn resolve(id: &str) -> Section {
        Section::from_id(id).unwrap_or(Section::DEFAULT)
    }

    /// Index in the canonical section order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The die face bound to this section.
    #[must_use]
    pub fn die_face(self) -> DieFace {
        DieFace::from_index(self.index())
    }

    /// The orientation the die settles on for this section.
    ///
    /// Delegates to the face rotation table; all six targets are
    /// pairwise distinct and the mapping never changes at runtime.
    #[must_use]
    pub fn target_orientation(self) -> Quat {
        self.die_face().rest_orientation()
    }

    /// Uniformly random section over all six.
    pub fn random<R: Rng>(rng: &mut R) -> Section {
        Section::ALL[rng.random_range(0..Section::ALL.len())]
    }

    /// Uniformly random section excluding `current` (the "reroll" rule:
    /// the dice button never lands on the section already shown).
    pub fn random_other<R: Rng>(rng: &mut R, current: Section) -> Section {
        let mut pick = rng.random_range(0..Section::ALL.len() - 1);
        if pick >= current.index() {
            pick += 1;
        }
        Section::ALL[pick]
    }
}
