//! Screen colour state for a Z-Machine interpreter.
//!
//! Holds the active foreground and background, and implements what a
//! `set_colour` instruction does to them: `Current` leaves a channel alone,
//! `UnderCursor` copies whatever is painted at the cursor, and anything
//! else replaces the channel outright. Bad operands are handled according
//! to a [`RecoveryPolicy`] chosen by the host.
//!
//! Each VM instance owns its own [`ScreenColours`]; nothing is shared.

mod colours;
mod config;
mod error;
mod grid;
mod inspector;

pub use colours::{Change, ScreenColours};
pub use config::{OutOfRangeAction, RecoveryPolicy, ScreenConfig, UnavailableAction};
pub use error::ScreenError;
pub use grid::{Cell, TextGrid};
pub use inspector::{CellInspector, NoInspector};

pub use zmachine_colour::{Channel, Colour, ColourError};
