//! Timing curves for non-spring sheet animations

/// Easing curve
///
/// The named curves are the standard platform timing functions, so a resize
/// animated here moves like one animated by the host toolkit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::EaseIn => BezierCurve::new(0.42, 0.0, 1.0, 1.0).solve(t),
            Easing::EaseOut => BezierCurve::new(0.0, 0.0, 0.58, 1.0).solve(t),
            Easing::EaseInOut => BezierCurve::new(0.42, 0.0, 0.58, 1.0).solve(t),
            Easing::CubicBezier(x1, y1, x2, y2) => BezierCurve::new(*x1, *y1, *x2, *y2).solve(t),
        }
    }
}

/// Unit cubic bezier with fixed endpoints (0, 0) and (1, 1)
#[derive(Clone, Copy, Debug)]
struct BezierCurve {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl BezierCurve {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1 as f64,
            y1: y1 as f64,
            x2: x2 as f64,
            y2: y2 as f64,
        }
    }

    /// y for the given x. Newton-Raphson first, bisection when the slope flattens.
    fn solve(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let x = t as f64;
        let mut p = x;
        for _ in 0..8 {
            let err = sample(p, self.x1, self.x2) - x;
            if err.abs() < 1e-7 {
                return sample(p, self.y1, self.y2) as f32;
            }
            let slope = slope(p, self.x1, self.x2);
            if slope.abs() < 1e-7 {
                break;
            }
            p -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        p = x;
        for _ in 0..24 {
            let val = sample(p, self.x1, self.x2);
            if (val - x).abs() < 1e-7 {
                break;
            }
            if val < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }

        sample(p, self.y1, self.y2) as f32
    }
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³ in Horner form
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
