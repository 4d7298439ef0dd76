// SPDX-License-Identifier: MIT
//
// legible-color: the color model underneath legible's contrast fixer.
//
// Three small pieces, no state:
//
//   color  → Rgb (8-bit channels, optional alpha) and Hsv (hue°, sat %,
//            value %), with clamped conversions both ways
//   parse  → computed-style strings (`rgb()` / `rgba()`) into Rgb
//   error  → ColorError for the string boundary
//
// Everything numeric is infallible and clamps; only string parsing can fail.

pub mod color;
pub mod error;
pub mod parse;

pub use color::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};
pub use error::ColorError;
pub use parse::parse_css_color;
