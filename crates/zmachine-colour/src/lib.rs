//! Z-Machine colour codes.
//!
//! `set_colour` takes two operands, one per channel, drawn from a fixed
//! numbering: 2-9 are the standard eight colours, 1 is the front-end's
//! default, and 10-12 are greys that only V6 story files may use. Two codes
//! are not colours at all: 0 means "whatever is under the cursor" and 255
//! means "leave it as it is".
//!
//! This crate validates operands against that numbering. What to do with a
//! sentinel is the screen's business.
//!
//! The `serde` feature serializes [`Colour`] as its wire byte; its tests
//! run with `cargo test --features serde`.

mod colour;
mod error;
pub mod palette;

pub use colour::{Channel, Colour, is_sentinel, resolve};
pub use error::ColourError;
