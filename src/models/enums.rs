//! Enums used throughout folio-tui
//!
//! This module contains the enum types used for navigation and
//! input-mode state management.

/// Portfolio section currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn next(&self) -> Self {
        match self {
            Section::Hero => Section::Skills,
            Section::Skills => Section::Projects,
            Section::Projects => Section::Contact,
            Section::Contact => Section::Hero,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Section::Hero => Section::Contact,
            Section::Skills => Section::Hero,
            Section::Projects => Section::Skills,
            Section::Contact => Section::Projects,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// All sections in display order, for the nav tab bar
    pub fn all() -> [Section; 4] {
        [
            Section::Hero,
            Section::Skills,
            Section::Projects,
            Section::Contact,
        ]
    }
}

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse, // Navigation keys act on sections/projects/race
    Edit,   // Keystrokes go into the focused contact form field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_next_cycles() {
        let mut s = Section::Hero;
        for _ in 0..4 {
            s = s.next();
        }
        assert_eq!(s, Section::Hero);
    }

    #[test]
    fn test_section_prev_inverts_next() {
        for s in Section::all() {
            assert_eq!(s.next().prev(), s);
        }
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Hero.label(), "Home");
        assert_eq!(Section::Contact.label(), "Contact");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Section::default(), Section::Hero);
        assert_eq!(InputMode::default(), InputMode::Browse);
    }
}
