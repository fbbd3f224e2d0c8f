//! The colour code enumeration and operand validation.

use std::fmt;

use crate::ColourError;

/// A colour code as it appears in a `set_colour` operand.
///
/// Discriminants are the wire values and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum Colour {
    /// Sentinel: the colour already painted at the cursor.
    UnderCursor = 0,
    /// The front-end's default for this channel.
    Default = 1,
    Black = 2,
    Red = 3,
    Green = 4,
    Yellow = 5,
    Blue = 6,
    Magenta = 7,
    Cyan = 8,
    White = 9,
    /// V6 only.
    DarkGrey = 10,
    /// V6 only.
    MediumGrey = 11,
    /// V6 only.
    LightGrey = 12,
    /// Sentinel: keep the active colour.
    Current = 255,
}

/// The two colour channels a screen tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Foreground,
    Background,
}

impl Colour {
    /// Every code, in wire order.
    pub const ALL: [Self; 14] = [
        Self::UnderCursor,
        Self::Default,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::DarkGrey,
        Self::MediumGrey,
        Self::LightGrey,
        Self::Current,
    ];

    /// Look up a wire value, ignoring capability gating.
    const fn from_wire(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::UnderCursor,
            1 => Self::Default,
            2 => Self::Black,
            3 => Self::Red,
            4 => Self::Green,
            5 => Self::Yellow,
            6 => Self::Blue,
            7 => Self::Magenta,
            8 => Self::Cyan,
            9 => Self::White,
            10 => Self::DarkGrey,
            11 => Self::MediumGrey,
            12 => Self::LightGrey,
            255 => Self::Current,
            _ => return None,
        })
    }

    /// The wire value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// True for the two codes that are directives rather than colours.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::UnderCursor | Self::Current)
    }

    /// True for the V6 greys.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(self, Self::DarkGrey | Self::MediumGrey | Self::LightGrey)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnderCursor => "under cursor",
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::DarkGrey => "dark grey",
            Self::MediumGrey => "medium grey",
            Self::LightGrey => "light grey",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Colour> for u8 {
    fn from(colour: Colour) -> Self {
        colour.value()
    }
}

/// Accepts any defined wire value, greys included.
///
/// For restoring state that was validated when it was stored. Operands
/// fresh from the instruction stream go through [`resolve`].
impl TryFrom<u8> for Colour {
    type Error = ColourError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_wire(value).ok_or(ColourError::OutOfRange(i32::from(value)))
    }
}

/// Validate a raw `set_colour` operand.
///
/// `raw` is the operand as decoded, not yet range-checked. The greys are
/// only accepted when `extended_colours_enabled` is set.
pub fn resolve(raw: i32, extended_colours_enabled: bool) -> Result<Colour, ColourError> {
    let colour = u8::try_from(raw)
        .ok()
        .and_then(Colour::from_wire)
        .ok_or(ColourError::OutOfRange(raw))?;
    if colour.is_extended() && !extended_colours_enabled {
        return Err(ColourError::CapabilityUnavailable(colour));
    }
    Ok(colour)
}

/// Free-function form of [`Colour::is_sentinel`].
#[must_use]
pub fn is_sentinel(code: Colour) -> bool {
    code.is_sentinel()
}
