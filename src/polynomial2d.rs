// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parametric 2D curves built from a pair of polynomials.

use crate::common::integrate_gauss_legendre;
use crate::{BBox, CurveError, Polynomial, Vec2};

/// Subdivision limit for the adaptive arc length quadrature.
const MAX_ARCLEN_DEPTH: usize = 16;

/// A 2D curve whose coordinates are polynomials in `t`.
///
/// Bézier segments of degree one to three are converted to this monomial
/// form once, at construction, and evaluated through it afterwards.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial2D {
    /// The x coordinate as a function of `t`.
    pub x: Polynomial,
    /// The y coordinate as a function of `t`.
    pub y: Polynomial,
}

impl Polynomial2D {
    /// Pair two scalar polynomials into a curve.
    #[inline]
    pub const fn new(x: Polynomial, y: Polynomial) -> Polynomial2D {
        Polynomial2D { x, y }
    }

    /// Build a curve from vector coefficients, constant first.
    pub fn from_coefficients(c0: Vec2, c1: Vec2, c2: Vec2, c3: Vec2) -> Polynomial2D {
        Polynomial2D {
            x: Polynomial::new(c0.x, c1.x, c2.x, c3.x),
            y: Polynomial::new(c0.y, c1.y, c2.y, c3.y),
        }
    }

    /// The straight line from `p0` to `p1`.
    pub fn from_line(p0: Vec2, p1: Vec2) -> Polynomial2D {
        Polynomial2D::from_coefficients(p0, p1 - p0, Vec2::ZERO, Vec2::ZERO)
    }

    /// The monomial form of a quadratic Bézier.
    pub fn from_quad_bez(p0: Vec2, p1: Vec2, p2: Vec2) -> Polynomial2D {
        Polynomial2D::from_coefficients(
            p0,
            2.0 * (p1 - p0),
            p0 - 2.0 * p1 + p2,
            Vec2::ZERO,
        )
    }

    /// The monomial form of a cubic Bézier.
    pub fn from_cubic_bez(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Polynomial2D {
        Polynomial2D::from_coefficients(
            p0,
            3.0 * (p1 - p0),
            3.0 * p0 - 6.0 * p1 + 3.0 * p2,
            -p0 + 3.0 * p1 - 3.0 * p2 + p3,
        )
    }

    /// The monomial form of the Bézier defined by 2, 3 or 4 control points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ControlPointCount`] for any other number of
    /// points.
    pub fn from_control_points(points: &[Vec2]) -> Result<Polynomial2D, CurveError> {
        match *points {
            [p0, p1] => Ok(Polynomial2D::from_line(p0, p1)),
            [p0, p1, p2] => Ok(Polynomial2D::from_quad_bez(p0, p1, p2)),
            [p0, p1, p2, p3] => Ok(Polynomial2D::from_cubic_bez(p0, p1, p2, p3)),
            _ => Err(CurveError::ControlPointCount {
                found: points.len(),
            }),
        }
    }

    /// Evaluate the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Vec2 {
        Vec2::new(self.x.eval(t), self.y.eval(t))
    }

    /// Evaluate the first derivative at `t`; its direction is the tangent.
    #[inline]
    pub fn eval_derivative(&self, t: f64) -> Vec2 {
        Vec2::new(self.x.deriv().eval(t), self.y.deriv().eval(t))
    }

    /// Evaluate the derivative of the given order at `t`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is greater than 3.
    pub fn eval_nth_derivative(&self, t: f64, order: usize) -> Vec2 {
        self.differentiate(order).eval(t)
    }

    /// The derivative of the given order, as a new curve.
    ///
    /// # Panics
    ///
    /// Panics if `order` is greater than 3, see
    /// [`Polynomial::differentiate`].
    pub fn differentiate(&self, order: usize) -> Polynomial2D {
        Polynomial2D::new(self.x.differentiate(order), self.y.differentiate(order))
    }

    /// Split the curve at `u` into the pieces covering `[0, u]` and `[u, 1]`.
    ///
    /// Both coordinates are split at the same parameter, so the pieces join
    /// at `self.eval(u)`.
    pub fn split(&self, u: f64) -> (Polynomial2D, Polynomial2D) {
        let (x0, x1) = self.x.split(u);
        let (y0, y1) = self.y.split(u);
        (Polynomial2D::new(x0, y0), Polynomial2D::new(x1, y1))
    }

    /// The tight axis-aligned bounding box over `t ∈ [0, 1]`.
    pub fn bounds(&self) -> BBox {
        BBox::from_extents(self.x.output_range_01(), self.y.output_range_01())
    }

    /// The arc length over `t ∈ [0, 1]`.
    ///
    /// This integrates the speed `|B'(t)|` with 16-point Gauss-Legendre
    /// quadrature, halving intervals until two successive levels agree
    /// within `accuracy`. The subdivision depth is capped, which only
    /// matters near cusps where the speed is not smooth.
    pub fn arc_length(&self, accuracy: f64) -> f64 {
        let deriv = self.differentiate(1);
        let speed = |t: f64| deriv.eval(t).hypot();
        fn rec(
            speed: &impl Fn(f64) -> f64,
            t0: f64,
            t1: f64,
            whole: f64,
            accuracy: f64,
            depth: usize,
        ) -> f64 {
            let tm = 0.5 * (t0 + t1);
            let left = integrate_gauss_legendre(speed, t0, tm);
            let right = integrate_gauss_legendre(speed, tm, t1);
            let refined = left + right;
            if (refined - whole).abs() < accuracy || depth >= MAX_ARCLEN_DEPTH {
                refined
            } else {
                rec(speed, t0, tm, left, accuracy * 0.5, depth + 1)
                    + rec(speed, tm, t1, right, accuracy * 0.5, depth + 1)
            }
        }
        let whole = integrate_gauss_legendre(speed, 0.0, 1.0);
        rec(&speed, 0.0, 1.0, whole, accuracy, 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CurveError, Polynomial2D, Vec2};

    fn assert_near(p0: Vec2, p1: Vec2, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn cubic_bez_endpoints() {
        let p0 = Vec2::new(1.0, 2.0);
        let p3 = Vec2::new(-4.0, 7.0);
        let c = Polynomial2D::from_cubic_bez(p0, Vec2::new(3.0, 3.0), Vec2::new(0.0, 5.0), p3);
        assert_near(c.eval(0.0), p0, 1e-12);
        assert_near(c.eval(1.0), p3, 1e-12);
        // B'(0) = 3 (p1 - p0)
        assert_near(c.eval_derivative(0.0), Vec2::new(6.0, 3.0), 1e-12);
        assert_near(c.eval_nth_derivative(0.5, 1), c.eval_derivative(0.5), 1e-12);
    }

    #[test]
    fn quad_bez_midpoint() {
        let c = Polynomial2D::from_quad_bez(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 0.0),
        );
        assert_near(c.eval(0.5), Vec2::new(1.0, 1.0), 1e-12);
    }

    #[test]
    fn from_control_points() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0)];
        let line = Polynomial2D::from_control_points(&pts).unwrap();
        assert_near(line.eval(0.25), Vec2::new(0.5, 1.0), 1e-12);
        let err = Polynomial2D::from_control_points(&pts[..1]).unwrap_err();
        assert!(matches!(err, CurveError::ControlPointCount { found: 1 }));
    }

    #[test]
    fn split() {
        let c = Polynomial2D::from_cubic_bez(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(4.0, -1.0),
            Vec2::new(5.0, 2.0),
        );
        let (a, b) = c.split(0.3);
        assert_near(a.eval(1.0), c.eval(0.3), 1e-12);
        assert_near(b.eval(0.0), c.eval(0.3), 1e-12);
        assert_near(b.eval(0.5), c.eval(0.65), 1e-12);
    }

    #[test]
    fn cubic_bounds() {
        let c = Polynomial2D::from_cubic_bez(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, -2.0),
            Vec2::new(3.0, 0.0),
        );
        let bounds = c.bounds();
        // y(t) = 6t(1 - t)(1 - 2t) peaks at t = 1/2 ∓ √3/6 with |y| = 1/√3.
        let extreme = 3.0f64.sqrt().recip();
        assert!((bounds.min_y() + extreme).abs() < 1e-6);
        assert!((bounds.max_y() - extreme).abs() < 1e-6);
        assert!(bounds.min_x().abs() < 1e-12);
        assert!((bounds.max_x() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn parabola_arc_length() {
        // y = x², the same curve as a quadratic and a raised cubic
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        let q = Polynomial2D::from_quad_bez(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, 1.0),
        );
        let c = Polynomial2D::from_cubic_bez(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0 / 3.0, 0.0),
            Vec2::new(2.0 / 3.0, 1.0 / 3.0),
            Vec2::new(1.0, 1.0),
        );
        for i in 0..10 {
            let accuracy = 0.1f64.powi(i);
            assert!((q.arc_length(accuracy) - true_arclen).abs() < accuracy);
            assert!((c.arc_length(accuracy) - true_arclen).abs() < accuracy);
        }
    }

    #[test]
    fn line_arc_length() {
        let line = Polynomial2D::from_line(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert!((line.arc_length(1e-9) - 5.0).abs() < 1e-12);
    }
}
