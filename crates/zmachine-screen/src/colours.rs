//! Active foreground/background and the `set_colour` instruction.

use log::{debug, warn};
use zmachine_colour::{Channel, Colour, ColourError, resolve};
use zmachine_core::{Capabilities, Observable, Value};

use crate::config::{OutOfRangeAction, RecoveryPolicy, ScreenConfig, UnavailableAction};
use crate::{CellInspector, ScreenError};

/// Effect of applying one colour to one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The channel now holds this colour.
    Set(Colour),
    /// The channel was left as it was.
    Kept,
}

/// The screen's current colour pair.
///
/// Neither channel ever holds a sentinel.
#[derive(Debug, Clone)]
pub struct ScreenColours {
    foreground: Colour,
    background: Colour,
    capabilities: Capabilities,
    policy: RecoveryPolicy,
}

impl ScreenColours {
    /// Both channels start at `Default`.
    #[must_use]
    pub fn new(config: &ScreenConfig) -> Self {
        Self {
            foreground: Colour::Default,
            background: Colour::Default,
            capabilities: config.capabilities,
            policy: config.policy,
        }
    }

    #[must_use]
    pub fn foreground(&self) -> Colour {
        self.foreground
    }

    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> Colour {
        match channel {
            Channel::Foreground => self.foreground,
            Channel::Background => self.background,
        }
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Back to `Default` on both channels (e.g. after `restart`).
    pub fn reset(&mut self) {
        self.foreground = Colour::Default;
        self.background = Colour::Default;
    }

    /// Apply an already-resolved colour to one channel.
    ///
    /// `Current` keeps the channel. `UnderCursor` adopts what `inspector`
    /// reports at the cursor, or keeps the channel if the cell was never
    /// painted. Greys the host cannot show go through the recovery policy,
    /// and a host without colour keeps both channels as they are.
    pub fn set(
        &mut self,
        channel: Channel,
        colour: Colour,
        inspector: &dyn CellInspector,
    ) -> Change {
        if !self.capabilities.colours {
            debug!("{channel:?} colour kept (host has no colour)");
            return Change::Kept;
        }
        let target = match colour {
            Colour::Current => {
                debug!("{channel:?} colour kept (current)");
                return Change::Kept;
            }
            Colour::UnderCursor => {
                match inspector
                    .colour_at_cursor(channel)
                    .filter(|c| !c.is_sentinel())
                {
                    Some(painted) => painted,
                    None => {
                        debug!("{channel:?} colour kept (nothing painted under cursor)");
                        return Change::Kept;
                    }
                }
            }
            other => other,
        };
        let Some(target) = self.gate(channel, target) else {
            return Change::Kept;
        };
        match channel {
            Channel::Foreground => self.foreground = target,
            Channel::Background => self.background = target,
        }
        Change::Set(target)
    }

    /// Execute `set_colour foreground background`.
    ///
    /// Both operands are validated before either channel is touched, so an
    /// aborted instruction changes nothing. On a host without colour the
    /// operands are still validated but have no effect.
    pub fn set_colour(
        &mut self,
        raw_foreground: i32,
        raw_background: i32,
        inspector: &dyn CellInspector,
    ) -> Result<(Change, Change), ScreenError> {
        let foreground = self.accept(Channel::Foreground, raw_foreground)?;
        let background = self.accept(Channel::Background, raw_background)?;

        if !self.capabilities.colours {
            debug!("set_colour ignored: host has no colour");
            return Ok((Change::Kept, Change::Kept));
        }

        Ok((
            self.set(Channel::Foreground, foreground, inspector),
            self.set(Channel::Background, background, inspector),
        ))
    }

    /// Resolve an operand, applying the out-of-range policy.
    ///
    /// Unavailable greys pass through; [`Self::set`] deals with them.
    fn accept(&self, channel: Channel, raw: i32) -> Result<Colour, ScreenError> {
        match resolve(raw, self.capabilities.extended_colours()) {
            Ok(colour) | Err(ColourError::CapabilityUnavailable(colour)) => Ok(colour),
            Err(source @ ColourError::OutOfRange(_)) => match self.policy.out_of_range {
                OutOfRangeAction::Abort => Err(ScreenError::Colour { channel, source }),
                OutOfRangeAction::SubstituteDefault => {
                    if self.capabilities.colours {
                        warn!("{channel:?}: {source}; using default");
                    }
                    Ok(Colour::Default)
                }
            },
        }
    }

    /// Replace a grey the host cannot show, or `None` to keep the channel.
    fn gate(&self, channel: Channel, colour: Colour) -> Option<Colour> {
        if !colour.is_extended() || self.capabilities.extended_colours() {
            return Some(colour);
        }
        let source = ColourError::CapabilityUnavailable(colour);
        match self.policy.unavailable {
            UnavailableAction::SubstituteDefault => {
                warn!("{channel:?}: {source}; using default");
                Some(Colour::Default)
            }
            UnavailableAction::Ignore => {
                warn!("{channel:?}: {source}; ignored");
                None
            }
        }
    }
}

impl Observable for ScreenColours {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "foreground" => Some(self.foreground.value().into()),
            "background" => Some(self.background.value().into()),
            "foreground.name" => Some(self.foreground.name().into()),
            "background.name" => Some(self.background.name().into()),
            "colours" => Some(self.capabilities.colours.into()),
            "extended_colours" => Some(self.capabilities.extended_colours().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "foreground",
            "background",
            "foreground.name",
            "background.name",
            "colours",
            "extended_colours",
        ]
    }
}
