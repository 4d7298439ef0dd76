//! WCAG relative luminance and contrast ratio.
//!
//! Luminance is computed from 8-bit sRGB with the WCAG 2.0 piecewise
//! linearization (knee at 0.03928) and the Rec. 709 channel weights.
//! Contrast is the ratio of the two luminances, each offset by 0.05 so
//! black-on-black stays finite.

use legible_color::Rgb;

/// WCAG linearization knee. Below it the sRGB curve is a straight line.
const LINEAR_KNEE: f64 = 0.039_28;

/// Flare offset added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= LINEAR_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
/// Alpha is ignored.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Contrast ratio between two luminances.
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments, always >= 1.0, and exactly 1.0 when the
/// luminances are equal. The maximum (white on black) is 21.0.
#[must_use]
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let (lighter, darker) = if lum1 >= lum2 { (lum1, lum2) } else { (lum2, lum1) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Contrast ratio between two colors.
#[must_use]
pub fn rgb_contrast(a: Rgb, b: Rgb) -> f64 {
    contrast_ratio(relative_luminance(a), relative_luminance(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-12), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Rgb::new(128, 128, 128));
        // 128/255 linearizes to ~0.2158
        assert!(approx_eq(lum, 0.2158, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_channel_weights() {
        let red = relative_luminance(Rgb::new(255, 0, 0));
        let green = relative_luminance(Rgb::new(0, 255, 0));
        let blue = relative_luminance(Rgb::new(0, 0, 255));
        assert!(approx_eq(red, 0.2126, 1e-9), "Red luminance: {red}");
        assert!(approx_eq(green, 0.7152, 1e-9), "Green luminance: {green}");
        assert!(approx_eq(blue, 0.0722, 1e-9), "Blue luminance: {blue}");
    }

    #[test]
    fn linearization_is_continuous_at_knee() {
        let below = srgb_to_linear(LINEAR_KNEE);
        let above = srgb_to_linear(LINEAR_KNEE + 1e-9);
        assert!(approx_eq(below, above, 1e-5), "{below} vs {above}");
    }

    #[test]
    fn dark_channels_use_linear_segment() {
        // 10/255 = 0.0392 sits under the knee.
        let lin = srgb_to_linear(10.0 / 255.0);
        assert!(approx_eq(lin, 10.0 / 255.0 / 12.92, 1e-12));
    }

    #[test]
    fn luminance_ignores_alpha() {
        let opaque = relative_luminance(Rgb::new(90, 60, 30));
        let faded = relative_luminance(Rgb::with_alpha(90, 60, 30, 0.1));
        assert!(approx_eq(opaque, faded, 1e-15));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = rgb_contrast(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_luminance_is_exactly_1() {
        for lum in [0.0, 0.2158, 0.5, 1.0] {
            assert!((contrast_ratio(lum, lum) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = relative_luminance(Rgb::new(204, 51, 77));
        let b = relative_luminance(Rgb::new(26, 26, 102));
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!((ab - ba).abs() < f64::EPSILON, "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn near_identical_grays_are_near_1() {
        let ratio = rgb_contrast(Rgb::new(128, 128, 128), Rgb::new(120, 120, 120));
        assert!(ratio >= 1.0 && ratio < 1.2, "Gray contrast: {ratio}");
    }

    // ── Property-based tests ─────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn luminance_within_unit_range(r: u8, g: u8, b: u8) {
                let lum = relative_luminance(Rgb::new(r, g, b));
                prop_assert!((0.0..=1.0 + 1e-12).contains(&lum), "lum: {}", lum);
            }

            #[test]
            fn contrast_symmetric_and_at_least_one(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
                let ab = contrast_ratio(a, b);
                let ba = contrast_ratio(b, a);
                prop_assert!((ab - ba).abs() < f64::EPSILON);
                prop_assert!(ab >= 1.0);
                prop_assert!(ab <= 21.0 + 1e-9);
            }

            #[test]
            fn contrast_identity(x in 0.0f64..=1.0) {
                prop_assert!((contrast_ratio(x, x) - 1.0).abs() < f64::EPSILON);
            }

            #[test]
            fn brighter_green_never_lowers_luminance(g in 0u8..255) {
                let dim = relative_luminance(Rgb::new(40, g, 40));
                let bright = relative_luminance(Rgb::new(40, g + 1, 40));
                prop_assert!(bright > dim);
            }
        }
    }
}
