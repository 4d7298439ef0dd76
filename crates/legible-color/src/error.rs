// SPDX-License-Identifier: MIT
//
// Errors raised at the string boundary. Numeric conversions never fail;
// they clamp (see color.rs).

use thiserror::Error;

/// Failure to turn a computed-style string into an [`Rgb`](crate::color::Rgb).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not an `rgb(r, g, b)` or `rgba(r, g, b, a)` literal.
    #[error("invalid color input: {0:?}")]
    InvalidColorInput(String),

    /// A channel parsed as a number but does not fit in 0–255.
    #[error("{channel} channel out of range in {input:?}: {value} > 255")]
    ChannelOutOfRange {
        channel: &'static str,
        value: u32,
        input: String,
    },

    /// Alpha parsed as a number but lies outside 0.0–1.0.
    #[error("alpha out of range in {0:?}")]
    AlphaOutOfRange(String),
}
