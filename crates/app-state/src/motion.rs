//! Cubic-bezier timing curves
//!
//! Implements the CSS `cubic-bezier` timing function used by the tab-bar
//! visibility animation. The curve is parameterised by two control points
//! `(x1, y1)` and `(x2, y2)`; evaluation solves for the curve parameter
//! whose x-coordinate matches the requested progress, then returns the
//! y-coordinate at that parameter.

use serde::{Deserialize, Serialize};

/// A cubic-bezier easing curve with fixed endpoints (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// First control point x
    pub x1: f32,
    /// First control point y
    pub y1: f32,
    /// Second control point x
    pub x2: f32,
    /// Second control point y
    pub y2: f32,
}

impl CubicBezier {
    /// Create a curve from its two control points
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    /// Create a curve from a `[x1, y1, x2, y2]` point array
    pub fn from_points(points: [f32; 4]) -> Self {
        CubicBezier::new(points[0], points[1], points[2], points[3])
    }

    /// The control points as a `[x1, y1, x2, y2]` array
    pub fn points(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Evaluate eased progress for linear progress `t` in `[0, 1]`
    ///
    /// Endpoints are exact; interior values are solved with a bisection on
    /// the x polynomial, computed in f64 to keep per-frame sampling stable.
    pub fn eval(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let x = t as f64;
        let (x1, x2) = (self.x1 as f64, self.x2 as f64);
        let (y1, y2) = (self.y1 as f64, self.y2 as f64);

        // Bisection: sample_axis is monotone in x for valid control points
        // (x1, x2 in [0, 1]), so this always converges.
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        let mut p = x;
        for _ in 0..32 {
            let sampled = sample_axis(p, x1, x2);
            if (sampled - x).abs() < 1e-6 {
                break;
            }
            if sampled < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }

        sample_axis(p, y1, y2) as f32
    }
}

/// Evaluate one axis of the bezier at parameter `t` (Horner form)
#[inline]
fn sample_axis(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB_BAR_CURVE: CubicBezier = CubicBezier::new(0.2, 0.0, 0.2, 1.0);

    #[test]
    fn test_endpoints_exact() {
        assert_eq!(TAB_BAR_CURVE.eval(0.0), 0.0);
        assert_eq!(TAB_BAR_CURVE.eval(1.0), 1.0);
        assert_eq!(TAB_BAR_CURVE.eval(-0.5), 0.0);
        assert_eq!(TAB_BAR_CURVE.eval(1.5), 1.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.eval(t) - t).abs() < 1e-4, "t={t}");
        }
    }

    #[test]
    fn test_monotone_over_unit_interval() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let eased = TAB_BAR_CURVE.eval(i as f32 / 100.0);
            assert!(eased >= prev - 1e-5, "decreasing at step {i}");
            prev = eased;
        }
    }

    #[test]
    fn test_ease_out_shape() {
        // The tab-bar curve decelerates: past the midpoint it is ahead of linear.
        assert!(TAB_BAR_CURVE.eval(0.5) > 0.5);
        assert!(TAB_BAR_CURVE.eval(0.9) > 0.9);
    }

    #[test]
    fn test_from_points_round_trip() {
        let curve = CubicBezier::from_points([0.0, 0.0, 0.2, 1.0]);
        assert_eq!(curve.points(), [0.0, 0.0, 0.2, 1.0]);
    }
}
