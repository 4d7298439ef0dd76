// SPDX-License-Identifier: MIT
//
// legible color model: 8-bit sRGB and HSV with explicit conversion contracts.
//
// Single-character variable names (r, g, b, h, s, v) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Two representations live here:
//
//   Rgb: what computed styles hand us and what we hand back (rgb(r, g, b))
//   Hsv: where the contrast search happens, because moving only the value
//        channel keeps the hue family and the saturation untouched
//
// Conversion pipeline:
//
//   Rgb (u8) ↔ normalized sRGB (0.0–1.0) ↔ Hsv (hue°, sat %, value %)
//
// Clamping contract: every Hsv constructor clamps saturation and value to
// 0–100 and normalizes hue to 0–359; Hsv → Rgb clamps each channel to 0–255.
// Out-of-range numbers are clamped here and never leak into luminance math.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color, as read from a computed style.
///
/// Alpha is carried when the source string was `rgba(...)`, but it takes no
/// part in luminance or contrast math. Compositing against an ancestor is not
/// attempted; [`Rgb::opaque`] simply drops it.
///
/// # Examples
///
/// ```
/// use legible_color::color::Rgb;
///
/// let slate = Rgb::new(51, 102, 153);
/// let hsv = slate.to_hsv();
/// assert_eq!(hsv.hue(), 210);
/// assert_eq!(hsv.to_rgb(), slate);
/// assert_eq!(slate.to_string(), "rgb(51, 102, 153)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel, 0 to 255.
    pub r: u8,

    /// Green channel, 0 to 255.
    pub g: u8,

    /// Blue channel, 0 to 255.
    pub b: u8,

    /// Alpha from an `rgba()` source, 0.0 (transparent) to 1.0 (opaque).
    pub alpha: Option<f32>,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white. Also the fallback page background.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Create a color with alpha (clamped to 0.0–1.0).
    #[must_use]
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha.clamp(0.0, 1.0)),
        }
    }

    /// Return a copy without alpha.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self { alpha: None, ..self }
    }

    /// Whether this color is fully transparent (alpha present and <= 0.0).
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha.is_some_and(|a| a <= 0.0)
    }

    /// Channels normalized to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to HSV. See [`rgb_to_hsv`].
    #[inline]
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl Default for Rgb {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Formats as a CSS `rgb(r, g, b)` string. Alpha is dropped.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Hsv ─────────────────────────────────────────────────────────────────────

/// A color in hue / saturation / value form.
///
/// - hue: integer degrees, 0 to 359
/// - saturation: percent, 0.0 to 100.0
/// - value (brightness): percent, 0.0 to 100.0
///
/// Fields are private so the ranges always hold. No constructor guesses
/// whether `s` and `v` are fractions or percents; pick
/// [`Hsv::from_percent`] or [`Hsv::from_unit`] at the call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    h: u16,
    s: f64,
    v: f64,
}

impl Hsv {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create from hue in degrees and saturation/value in percent (0–100).
    ///
    /// Hue is rounded to the nearest degree and wrapped into 0–359.
    /// Saturation and value are clamped to 0–100.
    #[must_use]
    pub fn from_percent(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            v: clamp_percent(v),
        }
    }

    /// Create from hue in degrees and saturation/value as unit fractions (0–1).
    #[must_use]
    pub fn from_unit(h: f64, s: f64, v: f64) -> Self {
        Self::from_percent(h, s * 100.0, v * 100.0)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Hue in whole degrees, 0 to 359.
    #[inline]
    #[must_use]
    pub const fn hue(self) -> u16 {
        self.h
    }

    /// Saturation in percent.
    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.s
    }

    /// Value (brightness) in percent.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.v
    }

    // ─── Brightness ──────────────────────────────────────────────────────
    //
    // Hue and saturation are carried over untouched by all three.

    /// Set value to an absolute percent (clamped to 0–100).
    #[inline]
    #[must_use]
    pub fn with_value(self, v: f64) -> Self {
        Self {
            v: clamp_percent(v),
            ..self
        }
    }

    /// Increase value by `amount` percent (clamped to 100).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.with_value(self.v + amount)
    }

    /// Decrease value by `amount` percent (clamped to 0).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.with_value(self.v - amount)
    }

    // ─── Conversion ──────────────────────────────────────────────────────

    /// Convert to 8-bit RGB.
    ///
    /// Uses the sector form `f(n) = v - v·s·max(min(k, 4 - k, 1), 0)` with
    /// `k = (n + h/60) mod 6` for n = 5, 3, 1 (red, green, blue). Channels
    /// are rounded to nearest and clamped to 0–255.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h) / 60.0;
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let channel = |n: f64| {
            let k = (n + h) % 6.0;
            let weight = k.min(4.0 - k).clamp(0.0, 1.0);
            to_u8((v * s).mul_add(-weight, v))
        };

        Rgb::new(channel(5.0), channel(3.0), channel(1.0))
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Convert 8-bit RGB to HSV.
///
/// Value is the largest channel, chroma the spread between largest and
/// smallest. A zero chroma is a gray: hue and saturation are both 0.
/// Otherwise the hue comes from the six-sector formula keyed on whichever
/// channel is largest, wrapped into one turn and rounded to whole degrees.
/// Saturation and value are percentages rounded to two decimals.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let (r, g, b) = rgb.to_srgb();
    let v = f64::from(max) / 255.0;

    if max == min {
        return Hsv {
            h: 0,
            s: 0.0,
            v: round_percent(v),
        };
    }

    let chroma = f64::from(max - min) / 255.0;
    let s = chroma / v;

    // Distance of each channel from the max, as a fraction of a turn.
    let sector = |c: f64| (v - c) / 6.0 / chroma + 0.5;
    let (rr, gg, bb) = (sector(r), sector(g), sector(b));

    let mut h = if rgb.r == max {
        bb - gg
    } else if rgb.g == max {
        1.0 / 3.0 + rr - bb
    } else {
        2.0 / 3.0 + gg - rr
    };

    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    Hsv {
        h: normalize_hue(h * 360.0),
        s: round_percent(s),
        v: round_percent(v),
    }
}

/// Convert HSV to 8-bit RGB, inferring the scale of `s` and `v`.
///
/// Each of `s` and `v` is read as a unit fraction when it is `<= 1.0` and as
/// a percent otherwise. That makes an input of exactly `1.0` mean "full", not
/// "1 percent". New code should build an [`Hsv`] with an explicit
/// constructor instead.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let as_percent = |x: f64| if x <= 1.0 { x * 100.0 } else { x };
    Hsv::from_percent(h, as_percent(s), as_percent(v)).to_rgb()
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Round to the nearest degree and wrap into 0–359.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normalize_hue(h: f64) -> u16 {
    if !h.is_finite() {
        return 0;
    }
    // Safe: rem_euclid keeps the value in [0, 360).
    h.round().rem_euclid(360.0) as u16
}

/// Clamp a percent to 0–100. NaN collapses to 0.
#[inline]
fn clamp_percent(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 100.0) }
}

/// Scale a unit fraction to percent, rounded to two decimals.
#[inline]
fn round_percent(x: f64) -> f64 {
    (x * 10_000.0).round() / 100.0
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(x: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
