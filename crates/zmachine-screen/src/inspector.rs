//! Reading back what has been painted.

use zmachine_colour::{Channel, Colour};

/// Something that knows what colour sits at the cursor.
///
/// Needed to honour `UnderCursor`. Returns `None` when nothing has been
/// painted at the cursor cell yet.
pub trait CellInspector {
    fn colour_at_cursor(&self, channel: Channel) -> Option<Colour>;
}

/// For hosts that cannot read back the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInspector;

impl CellInspector for NoInspector {
    fn colour_at_cursor(&self, _channel: Channel) -> Option<Colour> {
        None
    }
}
