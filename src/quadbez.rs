// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::poly_segment::{subdivide, window};
use crate::{
    CubicBezierSegment, PathSink, Polynomial2D, PolynomialSegment, SegmentOpts,
    UniformPolynomialCurveSampler, Vec2,
};

/// A single quadratic Bézier segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBezierSegment {
    points: [Vec2; 3],
    curve: Polynomial2D,
    length: f64,
    sampler: UniformPolynomialCurveSampler,
    opts: SegmentOpts,
}

impl QuadBezierSegment {
    /// Create a new quadratic Bézier segment with default options.
    #[inline]
    pub fn new<V: Into<Vec2>>(p0: V, p1: V, p2: V) -> QuadBezierSegment {
        Self::new_with_opts(p0, p1, p2, &SegmentOpts::default())
    }

    /// Create a new quadratic Bézier segment.
    pub fn new_with_opts<V: Into<Vec2>>(p0: V, p1: V, p2: V, opts: &SegmentOpts) -> QuadBezierSegment {
        Self::from_points([p0.into(), p1.into(), p2.into()], opts)
    }

    fn from_points(points: [Vec2; 3], opts: &SegmentOpts) -> QuadBezierSegment {
        let [p0, p1, p2] = points;
        let curve = Polynomial2D::from_quad_bez(p0, p1, p2);
        let length = curve.arc_length(opts.accuracy);
        let sampler = UniformPolynomialCurveSampler::from_curve(curve, length, opts.samples);
        QuadBezierSegment {
            points,
            curve,
            length,
            sampler,
            opts: *opts,
        }
    }

    /// The start point.
    #[inline]
    pub fn p0(&self) -> Vec2 {
        self.points[0]
    }

    /// The control point.
    #[inline]
    pub fn p1(&self) -> Vec2 {
        self.points[1]
    }

    /// The end point.
    #[inline]
    pub fn p2(&self) -> Vec2 {
        self.points[2]
    }

    /// The options the segment was built with.
    #[inline]
    pub fn opts(&self) -> &SegmentOpts {
        &self.opts
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    pub fn raise(&self) -> CubicBezierSegment {
        let [p0, p1, p2] = self.points;
        CubicBezierSegment::new_with_opts(
            p0,
            p0 + (2.0 / 3.0) * (p1 - p0),
            p2 + (2.0 / 3.0) * (p1 - p2),
            p2,
            &self.opts,
        )
    }
}

impl PolynomialSegment for QuadBezierSegment {
    #[inline]
    fn curve(&self) -> &Polynomial2D {
        &self.curve
    }

    #[inline]
    fn arc_length(&self) -> f64 {
        self.length
    }

    #[inline]
    fn sampler(&self) -> &UniformPolynomialCurveSampler {
        &self.sampler
    }

    #[inline]
    fn points(&self) -> &[Vec2] {
        &self.points
    }

    fn split(&self, t: f64) -> (QuadBezierSegment, QuadBezierSegment) {
        let (left, right) = subdivide(self.points, t.clamp(0.0, 1.0));
        (
            Self::from_points(left, &self.opts),
            Self::from_points(right, &self.opts),
        )
    }

    fn draw_range<S: PathSink + ?Sized>(&self, sink: &mut S, t0: f64, t1: f64, move_to: bool) {
        let [p0, p1, p2] = window(self.points, t0, t1);
        if move_to {
            sink.move_to(p0);
        }
        sink.quad_to(p1, p2);
    }
}
