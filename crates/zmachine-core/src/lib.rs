//! Core traits and types shared by the Z-Machine screen crates.
//!
//! The story file's version byte decides what the screen model may do. The
//! host decides whether it can do it. `Capabilities` is where the two meet.

mod capabilities;
mod observable;
mod version;

pub use capabilities::Capabilities;
pub use observable::{Observable, Value};
pub use version::Version;
