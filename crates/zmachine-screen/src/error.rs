//! Screen errors.

use thiserror::Error;
use zmachine_colour::{Channel, ColourError};

/// A `set_colour` instruction that was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("invalid {channel:?} operand: {source}")]
    Colour {
        channel: Channel,
        #[source]
        source: ColourError,
    },
}
