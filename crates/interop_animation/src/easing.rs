//! Timing functions for animations

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing curve
///
/// The curve runs from (0, 0) to (1, 1). Evaluating it means finding the
/// curve parameter whose x equals the input progress, then returning its y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Create a curve; x control points are clamped to [0, 1] so the curve
    /// stays a function of time
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Eased value for `progress` in [0, 1]
    ///
    /// Solved in f64: Newton-Raphson first, bisection when the slope flattens.
    pub fn ease(&self, progress: f32) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }

        let x = progress as f64;
        let (x1, x2) = (self.x1 as f64, self.x2 as f64);
        let (y1, y2) = (self.y1 as f64, self.y2 as f64);

        let mut t = x;
        for _ in 0..8 {
            let error = sample(t, x1, x2) - x;
            if error.abs() < EPSILON {
                return sample(t, y1, y2) as f32;
            }
            let slope = slope(t, x1, x2);
            if slope.abs() < EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..32 {
            let value = sample(t, x1, x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }

        sample(t, y1, y2) as f32
    }
}

const EPSILON: f64 = 1e-7;

/// One coordinate of the curve at parameter `t`
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of [`sample`] with respect to `t`
#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Timing function applied to raw animation progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// CSS `ease`
    Ease,
    /// CSS `ease-in`
    EaseIn,
    /// CSS `ease-out`
    EaseOut,
    /// CSS `ease-in-out`
    EaseInOut,
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Curve used by scroll-area page and button scrolling
    pub const SCROLL: Easing = Easing::CubicBezier(CubicBezier {
        x1: 0.16,
        y1: 0.0,
        x2: 0.73,
        y2: 1.0,
    });

    /// Apply to a progress value in [0, 1]
    pub fn apply(&self, progress: f32) -> f32 {
        match self {
            Easing::Linear => progress.clamp(0.0, 1.0),
            Easing::Ease => CubicBezier::new(0.25, 0.1, 0.25, 1.0).ease(progress),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).ease(progress),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).ease(progress),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).ease(progress),
            Easing::CubicBezier(curve) => curve.ease(progress),
        }
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Easing::CubicBezier(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::Ease, Easing::SCROLL] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_diagonal_curve_is_linear() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 1..10 {
            let t = step as f32 / 10.0;
            assert!((curve.ease(t) - t).abs() < 1e-4, "t = {t}");
        }
    }

    #[test]
    fn test_scroll_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::SCROLL.apply(step as f32 / 100.0);
            assert!(value >= previous - 1e-5);
            previous = value;
        }
    }

    #[test]
    fn test_scroll_curve_front_loads() {
        // (0.16, 0, 0.73, 1) starts slow and covers most ground mid-way
        assert!(Easing::SCROLL.apply(0.1) < 0.1);
        assert!(Easing::SCROLL.apply(0.6) > 0.6);
    }

    #[test]
    fn test_x_control_points_are_clamped() {
        let curve = CubicBezier::new(-1.0, 0.5, 2.0, 0.5);
        assert_eq!(curve.control_points(), (0.0, 0.5, 1.0, 0.5));
    }
}
