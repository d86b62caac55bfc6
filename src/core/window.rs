use crate::core::kinematics::TrajectorySample;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;
const EMPTY_X_SPAN_M: f64 = 10.0;

/// Data-space rectangle shown by a plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// False when padding pushed an edge or a span out of `f64`.
    pub fn is_finite(&self) -> bool {
        self.width().is_finite() && self.height().is_finite()
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: EMPTY_X_SPAN_M,
            y_min: 0.0,
            y_max: EMPTY_X_SPAN_M / DISTANCE_TO_HEIGHT_RATIO,
        }
    }
}

// Pads whichever ends of [lo, hi] lie away from the origin.
fn padded_extent(lo: f64, hi: f64, ratio: f64) -> (f64, f64) {
    let span = (hi - lo).max(MIN_SPAN_M);
    let pad = span * ratio;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    let hi = if hi > 0.0 || lo == 0.0 { hi + pad } else { hi };
    if hi - lo < MIN_SPAN_M {
        (lo, lo + MIN_SPAN_M)
    } else {
        (lo, hi)
    }
}

/// Bounds that include the origin and every sample, padded and widened to
/// a fixed x:y ratio.
pub fn axis_bounds(samples: &[TrajectorySample]) -> PlotBounds {
    if samples.is_empty() {
        return PlotBounds::default();
    }

    let (mut x_lo, mut x_hi, mut y_lo, mut y_hi) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    for s in samples {
        x_lo = x_lo.min(s.x_m);
        x_hi = x_hi.max(s.x_m);
        y_lo = y_lo.min(s.y_m);
        y_hi = y_hi.max(s.y_m);
    }

    let (mut x_min, mut x_max) = padded_extent(x_lo, x_hi, X_PADDING_RATIO);
    let (y_min, mut y_max) = padded_extent(y_lo, y_hi, Y_PADDING_RATIO);

    let x_span = x_max - x_min;
    let y_span = y_max - y_min;
    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        let extra = y_span * DISTANCE_TO_HEIGHT_RATIO - x_span;
        if x_hi <= 0.0 && x_lo < 0.0 {
            x_min -= extra;
        } else {
            x_max += extra;
        }
    } else {
        y_max = y_min + x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    PlotBounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x_m: f64, y_m: f64) -> TrajectorySample {
        TrajectorySample {
            time_s: 0.0,
            x_m,
            y_m,
        }
    }

    fn assert_ratio(bounds: PlotBounds) {
        let ratio = bounds.width() / bounds.height();
        assert!((ratio - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9, "{bounds:?}");
    }

    #[test]
    fn empty_curve_uses_default_window() {
        assert_eq!(axis_bounds(&[]), PlotBounds::default());
    }

    #[test]
    fn wide_flight_pads_and_grows_height() {
        let bounds = axis_bounds(&[sample(0.0, 0.0), sample(20.0, 10.0), sample(40.0, 0.0)]);

        assert_eq!(bounds.x_min, 0.0);
        assert_eq!(bounds.y_min, 0.0);
        assert!((bounds.x_max - 42.4).abs() < 1e-9);
        assert!(bounds.y_max >= 11.0);
        assert_ratio(bounds);
    }

    #[test]
    fn tall_flight_grows_width() {
        let bounds = axis_bounds(&[sample(0.0, 5.0), sample(0.0, 10.0), sample(0.0, 0.0)]);

        assert!(bounds.y_max >= 10.0);
        assert!(bounds.x_max > 1.0);
        assert_ratio(bounds);
    }

    #[test]
    fn keeps_below_ground_and_negative_range_in_view() {
        let bounds = axis_bounds(&[sample(0.0, -5.0), sample(-8.0, 2.0), sample(-16.0, 0.0)]);

        assert!(bounds.x_min < -16.0);
        assert!(bounds.x_max >= 0.0);
        assert!(bounds.y_min < -5.0);
        assert!(bounds.y_max > 2.0);
        assert_ratio(bounds);
    }

    #[test]
    fn padding_near_f64_max_is_not_finite() {
        let bounds = axis_bounds(&[sample(0.0, 0.0), sample(1.7e308, 0.0)]);
        assert!(!bounds.is_finite());
        assert!(PlotBounds::default().is_finite());
    }

    #[test]
    fn degenerate_curve_keeps_minimum_span() {
        let bounds = axis_bounds(&[sample(0.0, 0.0)]);
        assert!(bounds.width() >= MIN_SPAN_M);
        assert!(bounds.height() >= MIN_SPAN_M / DISTANCE_TO_HEIGHT_RATIO);
    }
}
