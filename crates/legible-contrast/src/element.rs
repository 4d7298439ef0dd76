//! The seam between the resolver and a styled element tree.
//!
//! The resolver only sees colors. Something has to find the background an
//! element actually sits on, read its text color, and write the fixed pair
//! back. That something implements [`StyledElement`]: a DOM binding, a
//! widget tree, or the small in-memory tree used in tests.

use legible_color::ColorError;
use legible_color::parse::{is_transparent_css, parse_css_color};
use tracing::debug;

use crate::resolver::{Resolution, ResolverConfig, resolve_with};

/// Background used when no element up to the root paints one.
pub const DEFAULT_BACKGROUND: &str = "rgb(255, 255, 255)";

/// An element with computed colors and writable inline colors.
pub trait StyledElement {
    /// The containing element, or `None` at the root.
    fn parent(&self) -> Option<&Self>;

    /// Computed `background-color`, or `None` if the element has none.
    fn background_color(&self) -> Option<&str>;

    /// Computed text `color`.
    fn text_color(&self) -> &str;

    /// Set the inline text color.
    fn set_text_color(&mut self, css: &str);

    /// Set the inline background color.
    fn set_background_color(&mut self, css: &str);
}

/// The background `element` is painted on.
///
/// Walks from `element` through its ancestors and returns the first
/// background that is not transparent (`transparent` or zero alpha).
/// Falls back to [`DEFAULT_BACKGROUND`] at the root.
pub fn find_ancestor_background<E: StyledElement + ?Sized>(element: &E) -> String {
    let mut node = Some(element);
    while let Some(current) = node {
        if let Some(background) = current.background_color() {
            if !is_transparent_css(background) {
                return background.to_owned();
            }
        }
        node = current.parent();
    }
    debug!("no painted ancestor, assuming white background");
    DEFAULT_BACKGROUND.to_owned()
}

/// Make `element` readable against the background it sits on.
///
/// Reads the inherited background and the text color, resolves them, and
/// when anything changed writes both back as `rgb(r, g, b)` inline colors.
/// An exhausted search is still written back: the best pair found beats
/// the original.
///
/// # Errors
///
/// Returns a [`ColorError`] if either computed color is not an `rgb()` /
/// `rgba()` string. The element is left untouched in that case.
pub fn fix_element<E: StyledElement + ?Sized>(
    element: &mut E,
    config: &ResolverConfig,
) -> Result<Resolution, ColorError> {
    let background = parse_css_color(&find_ancestor_background(element))?;
    let text = parse_css_color(element.text_color())?;

    let resolution = resolve_with(background, text, config);
    if resolution.changed() {
        element.set_text_color(&resolution.text.to_string());
        element.set_background_color(&resolution.background.to_string());
    }
    Ok(resolution)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
