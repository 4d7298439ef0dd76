// SPDX-License-Identifier: MIT
//
// Computed-style color strings → Rgb.
//
// Browsers serialize computed colors as `rgb(r, g, b)` or
// `rgba(r, g, b, a)`; that is the only syntax accepted here. Hex, named
// colors, and hsl() are rejected with `ColorError::InvalidColorInput`
// rather than guessed at.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;
use crate::error::ColorError;

/// `rgb(` / `rgba(` + three integer channels + optional alpha, any spacing.
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*rgba?\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*(\d*\.?\d+)\s*)?\)\s*$",
    )
    .expect("rgb() pattern is a valid regex")
});

/// Parse a CSS `rgb(r, g, b)` or `rgba(r, g, b, a)` string.
///
/// Whitespace around tokens is ignored and the function name is
/// case-insensitive. Either name may carry the optional fourth (alpha)
/// argument, as modern serializers do.
///
/// # Errors
///
/// - [`ColorError::InvalidColorInput`] if the string is not an `rgb()` /
///   `rgba()` literal with integer channels.
/// - [`ColorError::ChannelOutOfRange`] if a channel exceeds 255.
/// - [`ColorError::AlphaOutOfRange`] if alpha is above 1.0.
///
/// # Examples
///
/// ```
/// use legible_color::color::Rgb;
/// use legible_color::parse::parse_css_color;
///
/// assert_eq!(parse_css_color("rgb(12, 34, 56)").unwrap(), Rgb::new(12, 34, 56));
/// assert!(parse_css_color("rgba(0,0,0,0)").unwrap().is_transparent());
/// assert!(parse_css_color("#fff").is_err());
/// ```
pub fn parse_css_color(input: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidColorInput(input.to_owned());

    let caps = RGB_FUNCTION.captures(input).ok_or_else(invalid)?;

    let channel = |idx: usize, name: &'static str| -> Result<u8, ColorError> {
        let digits = caps.get(idx).ok_or_else(invalid)?.as_str();
        let value: u32 = digits.parse().map_err(|_| invalid())?;
        u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
            channel: name,
            value,
            input: input.to_owned(),
        })
    };

    let r = channel(1, "red")?;
    let g = channel(2, "green")?;
    let b = channel(3, "blue")?;

    match caps.get(4) {
        None => Ok(Rgb::new(r, g, b)),
        Some(alpha) => {
            let alpha: f32 = alpha.as_str().parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ColorError::AlphaOutOfRange(input.to_owned()));
            }
            Ok(Rgb::with_alpha(r, g, b, alpha))
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_color(s)
    }
}

/// Whether a computed background string means "nothing painted here".
///
/// Matches the `transparent` keyword and any `rgba()` with zero alpha.
/// Strings that fail to parse are not considered transparent.
#[must_use]
pub fn is_transparent_css(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case("transparent")
        || parse_css_color(trimmed).is_ok_and(Rgb::is_transparent)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Accepted forms ───────────────────────────────────────────────────

    #[test]
    fn parses_rgb() {
        assert_eq!(parse_css_color("rgb(255, 128, 0)"), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parses_rgba() {
        assert_eq!(
            parse_css_color("rgba(10, 20, 30, 0.5)"),
            Ok(Rgb::with_alpha(10, 20, 30, 0.5))
        );
    }

    #[test]
    fn whitespace_insensitive() {
        let expected = Ok(Rgb::new(1, 2, 3));
        assert_eq!(parse_css_color("rgb(1,2,3)"), expected);
        assert_eq!(parse_css_color("  rgb ( 1 ,2,   3 )  "), expected);
        assert_eq!(parse_css_color("rgb(\t1,\n2, 3)"), expected);
    }

    #[test]
    fn function_name_case_insensitive() {
        assert_eq!(parse_css_color("RGB(4, 5, 6)"), Ok(Rgb::new(4, 5, 6)));
    }

    #[test]
    fn alpha_forms() {
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0)").map(|c| c.alpha), Ok(Some(0.0)));
        assert_eq!(parse_css_color("rgba(0, 0, 0, 1)").map(|c| c.alpha), Ok(Some(1.0)));
        assert_eq!(parse_css_color("rgba(0, 0, 0, .25)").map(|c| c.alpha), Ok(Some(0.25)));
    }

    #[test]
    fn from_str_delegates() {
        let c: Rgb = "rgb(9, 8, 7)".parse().unwrap();
        assert_eq!(c, Rgb::new(9, 8, 7));
    }

    #[test]
    fn display_output_parses_back() {
        let c = Rgb::new(200, 17, 99);
        assert_eq!(parse_css_color(&c.to_string()), Ok(c));
    }

    // ── Rejected forms ───────────────────────────────────────────────────

    #[test]
    fn rejects_other_syntaxes() {
        for input in ["#ffffff", "white", "hsl(0, 100%, 50%)", "", "rgb()", "rgb(1, 2)"] {
            assert_eq!(
                parse_css_color(input),
                Err(ColorError::InvalidColorInput(input.to_owned())),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn rejects_fractional_and_percent_channels() {
        assert!(matches!(
            parse_css_color("rgb(1.5, 2, 3)"),
            Err(ColorError::InvalidColorInput(_))
        ));
        assert!(matches!(
            parse_css_color("rgb(50%, 2, 3)"),
            Err(ColorError::InvalidColorInput(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_channel() {
        assert_eq!(
            parse_css_color("rgb(0, 256, 0)"),
            Err(ColorError::ChannelOutOfRange {
                channel: "green",
                value: 256,
                input: "rgb(0, 256, 0)".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_huge_channel_as_invalid() {
        assert!(matches!(
            parse_css_color("rgb(99999999999, 0, 0)"),
            Err(ColorError::InvalidColorInput(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        assert_eq!(
            parse_css_color("rgba(0, 0, 0, 1.5)"),
            Err(ColorError::AlphaOutOfRange("rgba(0, 0, 0, 1.5)".to_owned()))
        );
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = parse_css_color("teal").unwrap_err();
        assert_eq!(err.to_string(), "invalid color input: \"teal\"");
    }

    // ── Transparency ─────────────────────────────────────────────────────

    #[test]
    fn transparent_backgrounds() {
        assert!(is_transparent_css("transparent"));
        assert!(is_transparent_css(" TRANSPARENT "));
        assert!(is_transparent_css("rgba(0, 0, 0, 0)"));
        assert!(!is_transparent_css("rgba(0, 0, 0, 0.1)"));
        assert!(!is_transparent_css("rgb(0, 0, 0)"));
        assert!(!is_transparent_css("garbage"));
    }
}
