//! Default palette.
//!
//! The Z-Machine Standard 1.1 suggests a 15-bit true colour for each code
//! (5 bits per component, red in the low bits). Front-ends are free to
//! pick their own, so this is only the reference table.

use crate::{Channel, Colour};

/// What `Default` paints as on the foreground channel.
pub const DEFAULT_FOREGROUND: Colour = Colour::White;
/// What `Default` paints as on the background channel.
pub const DEFAULT_BACKGROUND: Colour = Colour::Black;

/// Suggested 15-bit true colours, indexed by wire value 2..=12.
const TRUE_COLOUR: [u16; 11] = [
    0x0000, // 2: Black
    0x001D, // 3: Red
    0x0340, // 4: Green
    0x03BD, // 5: Yellow
    0x59A0, // 6: Blue
    0x7C1F, // 7: Magenta
    0x77A0, // 8: Cyan
    0x7FFF, // 9: White
    0x2D6B, // 10: Dark grey
    0x4631, // 11: Medium grey
    0x5AD6, // 12: Light grey
];

/// Convert 15-bit Z-Machine true colour to ARGB32.
#[must_use]
pub fn rgb15_to_argb32(rgb15: u16) -> u32 {
    let expand = |c: u16| {
        let c = u32::from(c & 0x1F);
        (c << 3) | (c >> 2)
    };
    let r = expand(rgb15);
    let g = expand(rgb15 >> 5);
    let b = expand(rgb15 >> 10);
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

/// The 15-bit true colour for a code, or `None` for sentinels.
#[must_use]
pub fn true_colour(colour: Colour, channel: Channel) -> Option<u16> {
    let colour = match (colour, channel) {
        (Colour::Default, Channel::Foreground) => DEFAULT_FOREGROUND,
        (Colour::Default, Channel::Background) => DEFAULT_BACKGROUND,
        (c, _) if c.is_sentinel() => return None,
        (c, _) => c,
    };
    Some(TRUE_COLOUR[usize::from(colour.value()) - 2])
}

/// ARGB32 pixel for a code, or `None` for sentinels.
#[must_use]
pub fn argb32(colour: Colour, channel: Channel) -> Option<u32> {
    true_colour(colour, channel).map(rgb15_to_argb32)
}
