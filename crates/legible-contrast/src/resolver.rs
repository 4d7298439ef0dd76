//! Brightness-only contrast resolution.
//!
//! Given a background and a text color whose contrast is too low, walk the
//! HSV value of one color at a time until the pair clears the threshold.
//! Hue and saturation never change, so the fixed colors stay in the same
//! family as the originals.
//!
//! Policy, decided from the background's *current* value on every step:
//!
//! | Background value | Phase `AdjustingText`     | Phase `AdjustingBackground` |
//! |------------------|---------------------------|-----------------------------|
//! | `> 50` (light)   | darken text toward 0      | lighten background to 100   |
//! | `<= 50` (dark)   | lighten text toward 100   | darken background to 0      |
//!
//! The phase moves to `AdjustingBackground` only once the text has reached
//! the bound for the current polarity. When the background reaches its
//! bound too, the search is `Exhausted`. The text starts from value 50
//! regardless of its original brightness, which shortens the walk; if that
//! reset alone clears the threshold, no step is taken.
//!
//! ```text
//! Checking ──ratio ok──────────────────────────────▶ Unchanged
//!    │
//!    └──▶ Adjusting ──ratio ok───────────────────────▶ Satisfied
//!             │
//!             └──both bounds hit / step cap─────────▶ Exhausted
//! ```

use std::fmt;

use legible_color::{Hsv, Rgb};
use tracing::{debug, trace, warn};

use crate::luminance::rgb_contrast;

/// Default minimum contrast ratio.
///
/// Lower than the WCAG AA body-text bar of 4.5; tuned for large UI text.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Background values strictly above this are "light".
pub const MIDPOINT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Knobs for one resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Minimum acceptable contrast ratio.
    pub threshold: f64,
    /// Value (percent) the text is reset to before the walk begins.
    pub start_value: f64,
    /// Value change per step, in percent.
    pub step: f64,
    /// Hard cap on steps. 200 covers a full 0–100 walk of both colors.
    pub max_steps: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            start_value: MIDPOINT,
            step: 1.0,
            max_steps: 200,
        }
    }
}

impl ResolverConfig {
    /// A NaN threshold falls back to [`DEFAULT_THRESHOLD`]; no ratio could
    /// ever compare against it.
    #[must_use]
    pub fn with_threshold(self, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold };
        Self { threshold, ..self }
    }

    #[must_use]
    pub const fn with_start_value(self, start_value: f64) -> Self {
        Self { start_value, ..self }
    }

    /// Non-positive steps fall back to 1.0 so the walk always moves.
    #[must_use]
    pub fn with_step(self, step: f64) -> Self {
        let step = if step > 0.0 { step } else { 1.0 };
        Self { step, ..self }
    }

    #[must_use]
    pub const fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

/// Which way the background leans, from its HSV value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Value above 50: text goes darker, background goes lighter.
    Light,
    /// Value of 50 or below: text goes lighter, background goes darker.
    Dark,
}

impl Polarity {
    /// Classify a background. Exactly 50 is dark.
    #[must_use]
    pub fn of(background: Hsv) -> Self {
        if background.value() > MIDPOINT {
            Self::Light
        } else {
            Self::Dark
        }
    }

    fn text_at_bound(self, text: Hsv) -> bool {
        match self {
            Self::Light => text.value() <= 0.0,
            Self::Dark => text.value() >= 100.0,
        }
    }

    fn background_at_bound(self, background: Hsv) -> bool {
        match self {
            Self::Light => background.value() >= 100.0,
            Self::Dark => background.value() <= 0.0,
        }
    }

    fn push_text(self, text: Hsv, step: f64) -> Hsv {
        match self {
            Self::Light => text.darken(step),
            Self::Dark => text.lighten(step),
        }
    }

    fn push_background(self, background: Hsv, step: f64) -> Hsv {
        match self {
            Self::Light => background.lighten(step),
            Self::Dark => background.darken(step),
        }
    }
}

/// Which color the search is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AdjustingText,
    AdjustingBackground,
}

/// The working pair of one adjustment search.
///
/// Owned by a single [`resolve_with`] call; exposed so the stepping rule can
/// be driven and inspected directly.
#[derive(Debug, Clone, Copy)]
pub struct Search {
    background: Hsv,
    text: Hsv,
    phase: Phase,
    step: f64,
}

impl Search {
    /// Start a search. The text value is reset to `config.start_value`.
    #[must_use]
    pub fn new(background: Hsv, text: Hsv, config: &ResolverConfig) -> Self {
        Self {
            background,
            text: text.with_value(config.start_value),
            phase: Phase::AdjustingText,
            step: config.step,
        }
    }

    #[must_use]
    pub const fn background(&self) -> Hsv {
        self.background
    }

    #[must_use]
    pub const fn text(&self) -> Hsv {
        self.text
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Polarity of the live background.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.background)
    }

    /// Move one color by one step.
    ///
    /// Returns `false`, leaving the pair untouched, when both the text and
    /// the background are pinned at their bounds.
    pub fn advance(&mut self) -> bool {
        let polarity = self.polarity();

        if self.phase == Phase::AdjustingText && polarity.text_at_bound(self.text) {
            self.phase = Phase::AdjustingBackground;
        }

        match self.phase {
            Phase::AdjustingText => {
                self.text = polarity.push_text(self.text, self.step);
            }
            Phase::AdjustingBackground => {
                if polarity.background_at_bound(self.background) {
                    return false;
                }
                self.background = polarity.push_background(self.background, self.step);
            }
        }
        true
    }

    /// Current pair as RGB: `(background, text)`.
    #[must_use]
    pub fn colors(&self) -> (Rgb, Rgb) {
        (Rgb::from(self.background), Rgb::from(self.text))
    }

    /// Contrast of the current pair after RGB rounding.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let (background, text) = self.colors();
        rgb_contrast(background, text)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// How a resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input pair already met the threshold.
    Unchanged,
    /// The search found a pair that meets the threshold.
    Satisfied,
    /// Both colors hit their bounds (or the step cap) first. The returned
    /// pair is the best one seen and should still be applied.
    Exhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unchanged => "unchanged",
            Self::Satisfied => "satisfied",
            Self::Exhausted => "exhausted",
        })
    }
}

/// The result of [`resolve_contrast`] / [`resolve_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Background to apply (opaque).
    pub background: Rgb,
    /// Text color to apply (opaque).
    pub text: Rgb,
    /// HSV the background was derived from.
    pub background_hsv: Hsv,
    /// HSV the text was derived from.
    pub text_hsv: Hsv,
    /// Contrast of `background` against `text`.
    pub ratio: f64,
    /// Adjustment steps taken.
    pub steps: usize,
    pub outcome: Outcome,
}

impl Resolution {
    /// Whether the colors should be written back.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.outcome != Outcome::Unchanged
    }

    /// Whether the returned pair meets the threshold.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.outcome != Outcome::Exhausted
    }
}

/// Snapshot of a visited pair, including the caller's own.
#[derive(Clone, Copy)]
struct Candidate {
    background: Rgb,
    text: Rgb,
    background_hsv: Hsv,
    text_hsv: Hsv,
    ratio: f64,
}

impl Candidate {
    fn input(background: Rgb, text: Rgb, ratio: f64) -> Self {
        Self {
            background,
            text,
            background_hsv: background.to_hsv(),
            text_hsv: text.to_hsv(),
            ratio,
        }
    }

    fn of(search: &Search) -> Self {
        let (background, text) = search.colors();
        Self {
            background,
            text,
            background_hsv: search.background(),
            text_hsv: search.text(),
            ratio: search.ratio(),
        }
    }

    const fn into_resolution(self, steps: usize, outcome: Outcome) -> Resolution {
        Resolution {
            background: self.background,
            text: self.text,
            background_hsv: self.background_hsv,
            text_hsv: self.text_hsv,
            ratio: self.ratio,
            steps,
            outcome,
        }
    }
}

/// Resolve a background/text pair against `threshold` with default knobs.
#[must_use]
pub fn resolve_contrast(background: Rgb, text: Rgb, threshold: f64) -> Resolution {
    resolve_with(background, text, &ResolverConfig::default().with_threshold(threshold))
}

/// Resolve a background/text pair.
///
/// Alpha on either input is dropped. If the pair already meets
/// `config.threshold` it comes back unchanged. Otherwise the brightness
/// search runs until the threshold is met or no step is left; it never
/// runs more than `config.max_steps` steps. An exhausted search returns the
/// highest-contrast pair seen, which may be the input itself.
#[must_use]
pub fn resolve_with(background: Rgb, text: Rgb, config: &ResolverConfig) -> Resolution {
    let background = background.opaque();
    let text = text.opaque();

    let initial = rgb_contrast(background, text);
    let mut best = Candidate::input(background, text, initial);
    if initial >= config.threshold {
        debug!(%background, %text, ratio = initial, "contrast already sufficient");
        return best.into_resolution(0, Outcome::Unchanged);
    }

    let mut search = Search::new(background.to_hsv(), text.to_hsv(), config);
    debug!(
        %background,
        %text,
        ratio = initial,
        threshold = config.threshold,
        polarity = ?search.polarity(),
        "contrast below threshold, searching"
    );

    // The reset alone can be enough.
    let reset = Candidate::of(&search);
    let mut steps = 0;

    let outcome = if reset.ratio >= config.threshold {
        best = reset;
        Outcome::Satisfied
    } else {
        if reset.ratio > best.ratio {
            best = reset;
        }
        loop {
            if steps >= config.max_steps || !search.advance() {
                break Outcome::Exhausted;
            }
            steps += 1;

            let current = Candidate::of(&search);
            trace!(
                step = steps,
                phase = ?search.phase(),
                text_value = current.text_hsv.value(),
                background_value = current.background_hsv.value(),
                ratio = current.ratio,
                "step"
            );

            if current.ratio >= config.threshold {
                best = current;
                break Outcome::Satisfied;
            }
            if current.ratio > best.ratio {
                best = current;
            }
        }
    };

    let resolution = best.into_resolution(steps, outcome);
    match outcome {
        Outcome::Exhausted => warn!(
            background = %resolution.background,
            text = %resolution.text,
            ratio = resolution.ratio,
            threshold = config.threshold,
            steps,
            "could not reach target contrast"
        ),
        _ => debug!(
            background = %resolution.background,
            text = %resolution.text,
            ratio = resolution.ratio,
            steps,
            "contrast resolved"
        ),
    }
    resolution
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
