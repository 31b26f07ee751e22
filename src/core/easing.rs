/// CSS-style cubic Bézier timing function through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Fast start, long deceleration; the wheel's spin curve
pub const SPIN_EASE_OUT: CubicBezier = CubicBezier::new(0.23, 1.0, 0.32, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample_x(&self, u: f64) -> f64 {
        bezier(u, self.x1, self.x2)
    }

    fn sample_y(&self, u: f64) -> f64 {
        bezier(u, self.y1, self.y2)
    }

    fn sample_dx(&self, u: f64) -> f64 {
        let a = 1.0 - 3.0 * self.x2 + 3.0 * self.x1;
        let b = 3.0 * self.x2 - 6.0 * self.x1;
        let c = 3.0 * self.x1;
        (3.0 * a * u + 2.0 * b) * u + c
    }

    /// Curve parameter whose x equals `x`; Newton first, bisection fallback
    fn solve_u(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..8 {
            let err = self.sample_x(u) - x;
            if err.abs() < 1e-7 {
                return u;
            }
            let slope = self.sample_dx(u);
            if slope.abs() < 1e-6 {
                break;
            }
            u -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        u = x;
        for _ in 0..64 {
            let value = self.sample_x(u);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) / 2.0;
        }
        u
    }

    /// Eased progress for linear progress `t`, both in `[0, 1]`
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_u(t))
    }
}

fn bezier(u: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(SPIN_EASE_OUT.ease(0.0), 0.0);
        assert_eq!(SPIN_EASE_OUT.ease(1.0), 1.0);
        assert_eq!(SPIN_EASE_OUT.ease(-0.5), 0.0);
        assert_eq!(SPIN_EASE_OUT.ease(2.0), 1.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((linear.ease(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ease_out_is_monotonic_and_front_loaded() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = SPIN_EASE_OUT.ease(i as f64 / 100.0);
            assert!(value >= previous - 1e-9);
            previous = value;
        }
        // Decelerates toward the end: most of the sweep is done by halfway
        assert!(SPIN_EASE_OUT.ease(0.5) > 0.8);
        assert!(SPIN_EASE_OUT.ease(0.1) > 0.1);
    }
}
