//! Logarithmic scales mapping a ratio onto the 0..1000 pixel grid of the overlay.

/// Full extent of the overlay grid in pixels.
pub const EXTENT: f64 = 1000.0;

/// A log scale calibrated so that `lo` lands on 0 and `lo * hi` lands on [`EXTENT`].
///
/// The second constructor argument is a ratio relative to `lo`, not an absolute bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    ln_lo: f64,
    ln_span: f64,
}

impl LogScale {
    pub fn new(lo: f64, hi: f64) -> Self {
        let ln_lo = lo.ln();
        Self {
            ln_lo,
            ln_span: (lo * hi).ln() - ln_lo,
        }
    }

    /// Positivity and hospitalization ratios: 100% at the top, 0.01% at the bottom.
    pub fn vertical() -> Self {
        Self::new(1.0, 0.0001)
    }

    /// Tests per million population: 1 at the left edge, 100 000 at the right.
    pub fn horizontal() -> Self {
        Self::new(1.0, 100_000.0)
    }

    /// Map `v` to a pixel coordinate.
    ///
    /// Returns `None` when `v <= 0` or the result is not finite. Values outside the
    /// calibrated range yield coordinates below 0 or above 1000; callers filter those.
    pub fn apply(&self, v: f64) -> Option<i32> {
        if v <= 0.0 {
            return None;
        }
        let px = EXTENT * (v.ln() - self.ln_lo) / self.ln_span;
        if !px.is_finite() {
            return None;
        }
        // Round half toward +inf; `f64::round` would send -2.5 to -3.
        Some((px + 0.5).floor() as i32)
    }
}
