//! Host capabilities for the screen model.

use crate::Version;

/// What the host can display, given the story file it is running.
///
/// Colour needs both sides: a story file new enough to ask for it, and a
/// front-end that can show it. The grey extension (codes 10-12) is V6 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `set_colour` has a visible effect.
    pub colours: bool,
    /// Dark, medium and light grey are accepted.
    pub extended_colours: bool,
}

impl Capabilities {
    /// Derive capabilities from the story version and host support.
    #[must_use]
    pub fn for_version(version: Version, host_supports_colour: bool) -> Self {
        let colours = host_supports_colour && version >= Version::FIRST_COLOUR;
        Self {
            colours,
            extended_colours: colours && version == Version::GRAPHICAL,
        }
    }

    /// The flag passed to colour resolution.
    #[must_use]
    pub fn extended_colours(&self) -> bool {
        self.extended_colours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(version: u8, host: bool) -> Capabilities {
        Capabilities::for_version(Version::new(version).expect("valid"), host)
    }

    #[test]
    fn v3_has_no_colour() {
        assert_eq!(caps(3, true), Capabilities::default());
    }

    #[test]
    fn v5_has_standard_colours_only() {
        let c = caps(5, true);
        assert!(c.colours);
        assert!(!c.extended_colours());
    }

    #[test]
    fn v6_has_extended_colours() {
        let c = caps(6, true);
        assert!(c.colours);
        assert!(c.extended_colours());
    }

    #[test]
    fn v8_is_not_graphical() {
        assert!(!caps(8, true).extended_colours());
    }

    #[test]
    fn monochrome_host_disables_everything() {
        assert_eq!(caps(6, false), Capabilities::default());
    }
}
