//! Floating markers for the decorative page backdrop.
//!
//! Purely cosmetic. The randomness source is injected so the browser can use
//! `Math.random` while tests stay reproducible.

/// Number of floating dots drawn over the background.
pub const MARKER_COUNT: usize = 20;

const MAX_DELAY_SECS: f64 = 5.0;
const MIN_DURATION_SECS: f64 = 5.0;
const DURATION_SPREAD_SECS: f64 = 10.0;

/// One floating dot: where it sits and how its animation is timed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl Marker {
    /// Draw a marker from four samples of a `[0, 1)` source.
    pub fn sample(mut unit: impl FnMut() -> f64) -> Self {
        Self {
            left_pct: unit() * 100.0,
            top_pct: unit() * 100.0,
            delay_secs: unit() * MAX_DELAY_SECS,
            duration_secs: MIN_DURATION_SECS + unit() * DURATION_SPREAD_SECS,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left_pct, self.top_pct, self.delay_secs, self.duration_secs
        )
    }
}

/// Scatter `count` markers using `unit` as the random source.
pub fn scatter_markers(count: usize, mut unit: impl FnMut() -> f64) -> Vec<Marker> {
    (0..count).map(|_| Marker::sample(&mut unit)).collect()
}
