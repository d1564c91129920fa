// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior shared by the Bézier segments.

use crate::{BBox, CurvePoint, PathSink, Polynomial2D, UniformPolynomialCurveSampler, Vec2};

/// The curve point at parameter `t`, with the tangent taken from the first
/// derivative.
pub(crate) fn eval_curve_point(curve: &Polynomial2D, t: f64) -> CurvePoint {
    CurvePoint::new(curve.eval(t), curve.eval_derivative(t).safe_normalize())
}

/// A segment backed by a [`Polynomial2D`].
///
/// Implementors keep their control points next to the polynomial, compute
/// the arc length once and own an arc length sampler built at construction.
/// Lookups by distance go through the sampler; lookups by parameter go
/// straight to the polynomial.
pub trait PolynomialSegment {
    /// The monomial form of the segment.
    fn curve(&self) -> &Polynomial2D;

    /// The arc length, computed at construction.
    fn arc_length(&self) -> f64;

    /// The arc length lookup table.
    fn sampler(&self) -> &UniformPolynomialCurveSampler;

    /// The control points, start point first.
    fn points(&self) -> &[Vec2];

    /// Split the segment at parameter `t` into two segments of the same kind.
    fn split(&self, t: f64) -> (Self, Self)
    where
        Self: Sized;

    /// Emit the native drawing command for the part of the curve between
    /// parameters `t0` and `t1`, preceded by a `move_to` to its start if
    /// `move_to` is set.
    fn draw_range<S: PathSink + ?Sized>(&self, sink: &mut S, t0: f64, t1: f64, move_to: bool);

    /// The start point.
    fn start(&self) -> Vec2 {
        self.points().first().copied().unwrap_or_default()
    }

    /// The end point.
    fn end(&self) -> Vec2 {
        self.points().last().copied().unwrap_or_default()
    }

    /// The curve point at parameter `t`.
    #[inline]
    fn eval(&self, t: f64) -> CurvePoint {
        eval_curve_point(self.curve(), t)
    }

    /// The point at the given fraction of the arc length.
    ///
    /// The fraction is clamped to `[0, 1]`.
    fn get_point(&self, fraction: f64) -> CurvePoint {
        self.sampler()
            .point_at_distance(self.arc_length() * fraction.clamp(0.0, 1.0))
    }

    /// Draw the part of the segment between two fractions of its arc length.
    ///
    /// The fractions are converted to curve parameters through the sampler
    /// and the window between them is cut out of the control polygon, so
    /// the emitted command is still a Bézier of the same degree. The
    /// returned points are evaluated on this segment at the window's
    /// parameters.
    fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint) {
        let start = start.clamp(0.0, 1.0);
        let end = end.clamp(start, 1.0);
        let (t0, t1) = if start == 0.0 && end == 1.0 {
            (0.0, 1.0)
        } else {
            let sampler = self.sampler();
            (
                sampler.distance_to_t(self.arc_length() * start),
                sampler.distance_to_t(self.arc_length() * end),
            )
        };
        self.draw_range(sink, t0, t1, move_to);
        (self.eval(t0), self.eval(t1))
    }

    /// The tight axis-aligned bounding box.
    fn bounds(&self) -> BBox {
        self.curve().bounds()
    }
}

/// Cut the parameter window `[t0, t1]` out of a control polygon.
///
/// The polygon is split at `t0`, and the remainder split again at the
/// matching parameter, using de Casteljau subdivision.
pub(crate) fn window<const N: usize>(points: [Vec2; N], t0: f64, t1: f64) -> [Vec2; N] {
    if t0 == 0.0 && t1 == 1.0 {
        return points;
    }
    let (_, tail) = subdivide(points, t0);
    let rest = 1.0 - t0;
    let relative = if rest > f64::EPSILON {
        ((t1 - t0) / rest).clamp(0.0, 1.0)
    } else {
        0.0
    };
    subdivide(tail, relative).0
}

/// De Casteljau subdivision of a control polygon at `t`.
pub(crate) fn subdivide<const N: usize>(points: [Vec2; N], t: f64) -> ([Vec2; N], [Vec2; N]) {
    let mut left = points;
    let mut right = points;
    let mut work = points;
    for level in 0..N {
        left[level] = work[0];
        right[N - 1 - level] = work[N - 1 - level];
        for i in 0..N - 1 - level {
            work[i] = work[i].lerp(work[i + 1], t);
        }
    }
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::{subdivide, window};
    use crate::{Polynomial2D, Vec2};

    const PTS: [Vec2; 4] = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 3.0),
        Vec2::new(4.0, -1.0),
        Vec2::new(5.0, 2.0),
    ];

    #[test]
    fn subdivide_matches_curve() {
        let curve = Polynomial2D::from_cubic_bez(PTS[0], PTS[1], PTS[2], PTS[3]);
        let (left, right) = subdivide(PTS, 0.3);
        assert_eq!(left[0], PTS[0]);
        assert_eq!(right[3], PTS[3]);
        assert_eq!(left[3], right[0]);
        assert!((left[3] - curve.eval(0.3)).hypot() < 1e-12);
        let left_curve = Polynomial2D::from_cubic_bez(left[0], left[1], left[2], left[3]);
        let right_curve = Polynomial2D::from_cubic_bez(right[0], right[1], right[2], right[3]);
        for i in 0..=10 {
            let s = i as f64 / 10.0;
            assert!((left_curve.eval(s) - curve.eval(0.3 * s)).hypot() < 1e-12);
            assert!((right_curve.eval(s) - curve.eval(0.3 + 0.7 * s)).hypot() < 1e-12);
        }
    }

    #[test]
    fn window_endpoints() {
        let curve = Polynomial2D::from_cubic_bez(PTS[0], PTS[1], PTS[2], PTS[3]);
        let w = window(PTS, 0.2, 0.6);
        assert!((w[0] - curve.eval(0.2)).hypot() < 1e-12);
        assert!((w[3] - curve.eval(0.6)).hypot() < 1e-12);
        assert_eq!(window(PTS, 0.0, 1.0), PTS);
        // A window at the very end collapses to the end point.
        let w = window(PTS, 1.0, 1.0);
        assert!(w.iter().all(|p| (*p - PTS[3]).hypot() < 1e-12));
    }
}
