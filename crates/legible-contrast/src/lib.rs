//! # legible-contrast: brightness-only contrast fixing
//!
//! Takes a background and a text color, and if they are too close in
//! luminance, walks their HSV value until the pair is readable. Hue and
//! saturation are never touched.
//!
//! # Architecture
//!
//! ```text
//! StyledElement (any element tree)
//!     │
//!     ▼
//! element.rs:    inherited background + text color → Rgb pair
//!     │
//!     ▼
//! resolver.rs:   Search state machine over HSV value
//!     │
//!     ▼
//! luminance.rs:  WCAG relative luminance + contrast ratio
//!     │
//!     ▼
//! legible-color: Rgb ⇄ Hsv, rgb() strings
//! ```
//!
//! Every call is self-contained: no shared state, no I/O, bounded steps.

pub mod element;
pub mod luminance;
pub mod resolver;

pub use element::{StyledElement, find_ancestor_background, fix_element};
pub use luminance::{contrast_ratio, relative_luminance, rgb_contrast};
pub use resolver::{Outcome, Resolution, ResolverConfig, resolve_contrast, resolve_with};
