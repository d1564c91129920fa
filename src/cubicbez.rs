// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::poly_segment::{subdivide, window};
use crate::{
    PathSink, Polynomial2D, PolynomialSegment, SegmentOpts, UniformPolynomialCurveSampler, Vec2,
};

/// A single cubic Bézier segment.
///
/// The arc length and the sampler are computed when the segment is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezierSegment {
    points: [Vec2; 4],
    curve: Polynomial2D,
    length: f64,
    sampler: UniformPolynomialCurveSampler,
    opts: SegmentOpts,
}

impl CubicBezierSegment {
    /// Create a new cubic Bézier segment with default options.
    #[inline]
    pub fn new<V: Into<Vec2>>(p0: V, p1: V, p2: V, p3: V) -> CubicBezierSegment {
        Self::new_with_opts(p0, p1, p2, p3, &SegmentOpts::default())
    }

    /// Create a new cubic Bézier segment.
    pub fn new_with_opts<V: Into<Vec2>>(
        p0: V,
        p1: V,
        p2: V,
        p3: V,
        opts: &SegmentOpts,
    ) -> CubicBezierSegment {
        Self::from_points([p0.into(), p1.into(), p2.into(), p3.into()], opts)
    }

    fn from_points(points: [Vec2; 4], opts: &SegmentOpts) -> CubicBezierSegment {
        let [p0, p1, p2, p3] = points;
        let curve = Polynomial2D::from_cubic_bez(p0, p1, p2, p3);
        let length = curve.arc_length(opts.accuracy);
        let sampler = UniformPolynomialCurveSampler::from_curve(curve, length, opts.samples);
        CubicBezierSegment {
            points,
            curve,
            length,
            sampler,
            opts: *opts,
        }
    }

    /// The first control point.
    #[inline]
    pub fn p0(&self) -> Vec2 {
        self.points[0]
    }

    /// The second control point.
    #[inline]
    pub fn p1(&self) -> Vec2 {
        self.points[1]
    }

    /// The third control point.
    #[inline]
    pub fn p2(&self) -> Vec2 {
        self.points[2]
    }

    /// The last control point.
    #[inline]
    pub fn p3(&self) -> Vec2 {
        self.points[3]
    }

    /// The options the segment was built with.
    #[inline]
    pub fn opts(&self) -> &SegmentOpts {
        &self.opts
    }
}

impl PolynomialSegment for CubicBezierSegment {
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

    fn split(&self, t: f64) -> (CubicBezierSegment, CubicBezierSegment) {
        let (left, right) = subdivide(self.points, t.clamp(0.0, 1.0));
        (
            Self::from_points(left, &self.opts),
            Self::from_points(right, &self.opts),
        )
    }

    fn draw_range<S: PathSink + ?Sized>(&self, sink: &mut S, t0: f64, t1: f64, move_to: bool) {
        let [p0, p1, p2, p3] = window(self.points, t0, t1);
        if move_to {
            sink.move_to(p0);
        }
        sink.curve_to(p1, p2, p3);
    }
}
