//! Story file version.

use std::fmt;

/// Z-Machine story file version (header byte `$00`).
///
/// Versions 1 through 8 exist. Anything else is not a story file this
/// interpreter can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Lowest version with colour support (`set_colour` arrives in V5).
    pub const FIRST_COLOUR: Self = Self(5);
    /// The graphical version; the only one with the grey extension.
    pub const GRAPHICAL: Self = Self(6);

    /// Wrap a header version byte. Returns `None` outside 1..=8.
    #[must_use]
    pub const fn new(byte: u8) -> Option<Self> {
        if matches!(byte, 1..=8) {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// The raw header byte.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}
