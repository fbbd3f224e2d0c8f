//! Colour resolution errors.

use thiserror::Error;

use crate::Colour;

/// Why an operand could not be accepted as a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourError {
    /// Not a colour code at all. The story file is malformed.
    #[error("colour code {0} is out of range (expected 0-12 or 255)")]
    OutOfRange(i32),
    /// A grey was requested but the host does not offer the grey extension.
    #[error("{0} requires the extended colour capability")]
    CapabilityUnavailable(Colour),
}

impl ColourError {
    /// True when the operand itself is bad, false when only the host is
    /// lacking.
    #[must_use]
    pub fn is_malformed_program(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}
