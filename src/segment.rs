// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of curve segments a profile is made of.

use crate::{
    BBox, CircleSegment, CubicBezierSegment, CurveError, LineSegment, PathSink,
    PolynomialSegment, QuadBezierSegment, Vec2,
};

/// The default number of samples in a [`UniformPolynomialCurveSampler`] table.
///
/// [`UniformPolynomialCurveSampler`]: crate::UniformPolynomialCurveSampler
pub const DEFAULT_SAMPLES: usize = 20;

/// The default absolute accuracy of Bézier arc length computation.
pub const DEFAULT_ACCURACY: f64 = 1e-9;

/// A sample on a curve: its position and orientation.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// The position on the curve.
    pub position: Vec2,
    /// The unit tangent, in the direction of travel.
    ///
    /// This is the zero vector on degenerate geometry.
    pub tangent: Vec2,
    /// The unit normal, always `tangent.perpendicular()`.
    pub normal: Vec2,
}

impl CurvePoint {
    /// A curve point with the normal derived from the tangent.
    #[inline]
    pub fn new(position: Vec2, tangent: Vec2) -> CurvePoint {
        CurvePoint {
            position,
            tangent,
            normal: tangent.perpendicular(),
        }
    }

    /// The point reported for an empty profile: the origin, with tangent and
    /// normal both [`Vec2::UP`].
    pub const FALLBACK: CurvePoint = CurvePoint {
        position: Vec2::ZERO,
        tangent: Vec2::UP,
        normal: Vec2::UP,
    };
}

/// Options for building Bézier segments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentOpts {
    /// The number of samples in the arc length lookup table.
    pub samples: usize,
    /// The absolute accuracy of the arc length.
    pub accuracy: f64,
}

impl Default for SegmentOpts {
    fn default() -> Self {
        SegmentOpts {
            samples: DEFAULT_SAMPLES,
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl SegmentOpts {
    /// Builder method for setting the lookup table size.
    ///
    /// Tables always hold at least two samples.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builder method for setting the arc length accuracy.
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }
}

/// A segment of a [`CurveProfile`].
///
/// [`CurveProfile`]: crate::CurveProfile
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A straight line.
    Line(LineSegment),
    /// A circular arc.
    Circle(CircleSegment),
    /// A quadratic Bézier.
    Quad(QuadBezierSegment),
    /// A cubic Bézier.
    Cubic(CubicBezierSegment),
}

impl Segment {
    /// The segment defined by 2 (line), 3 (quadratic) or 4 (cubic) control
    /// points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ControlPointCount`] for any other number of
    /// points.
    pub fn from_control_points(points: &[Vec2], opts: &SegmentOpts) -> Result<Segment, CurveError> {
        match *points {
            [p0, p1] => Ok(LineSegment::new(p0, p1).into()),
            [p0, p1, p2] => Ok(QuadBezierSegment::new_with_opts(p0, p1, p2, opts).into()),
            [p0, p1, p2, p3] => Ok(CubicBezierSegment::new_with_opts(p0, p1, p2, p3, opts).into()),
            _ => Err(CurveError::ControlPointCount {
                found: points.len(),
            }),
        }
    }

    /// The length of the segment.
    pub fn arc_length(&self) -> f64 {
        match self {
            Segment::Line(line) => line.arc_length(),
            Segment::Circle(circle) => circle.arc_length(),
            Segment::Quad(quad) => quad.arc_length(),
            Segment::Cubic(cubic) => cubic.arc_length(),
        }
    }

    /// The point at the given fraction of the segment's arc length.
    ///
    /// The fraction is clamped to `[0, 1]`.
    pub fn get_point(&self, fraction: f64) -> CurvePoint {
        match self {
            Segment::Line(line) => line.get_point(fraction),
            Segment::Circle(circle) => circle.get_point(fraction),
            Segment::Quad(quad) => quad.get_point(fraction),
            Segment::Cubic(cubic) => cubic.get_point(fraction),
        }
    }

    /// Draw the part of the segment between two fractions of its arc length.
    ///
    /// `start` must not exceed `end`. When `move_to` is set, a `move_to`
    /// to the start of the drawn part is emitted first. Returns the curve
    /// points at both ends of the drawn part.
    pub fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint) {
        match self {
            Segment::Line(line) => line.draw(sink, start, end, move_to),
            Segment::Circle(circle) => circle.draw(sink, start, end, move_to),
            Segment::Quad(quad) => quad.draw(sink, start, end, move_to),
            Segment::Cubic(cubic) => cubic.draw(sink, start, end, move_to),
        }
    }

    /// Split the segment at parameter `t`.
    ///
    /// For lines and arcs the parameter is the fraction of the arc length;
    /// for Béziers it is the curve's own parameter. Both pieces keep the
    /// variant of the original.
    pub fn split(&self, t: f64) -> (Segment, Segment) {
        match self {
            Segment::Line(line) => {
                let (a, b) = line.split(t);
                (a.into(), b.into())
            }
            Segment::Circle(circle) => {
                let (a, b) = circle.split(t);
                (a.into(), b.into())
            }
            Segment::Quad(quad) => {
                let (a, b) = quad.split(t);
                (a.into(), b.into())
            }
            Segment::Cubic(cubic) => {
                let (a, b) = cubic.split(t);
                (a.into(), b.into())
            }
        }
    }

    /// The start point.
    pub fn start(&self) -> Vec2 {
        match self {
            Segment::Line(line) => line.from(),
            Segment::Circle(circle) => circle.from(),
            Segment::Quad(quad) => quad.start(),
            Segment::Cubic(cubic) => cubic.start(),
        }
    }

    /// The end point.
    pub fn end(&self) -> Vec2 {
        match self {
            Segment::Line(line) => line.to(),
            Segment::Circle(circle) => circle.to(),
            Segment::Quad(quad) => quad.end(),
            Segment::Cubic(cubic) => cubic.end(),
        }
    }

    /// The tight axis-aligned bounding box.
    pub fn bounds(&self) -> BBox {
        match self {
            Segment::Line(line) => line.bounds(),
            Segment::Circle(circle) => circle.bounds(),
            Segment::Quad(quad) => quad.bounds(),
            Segment::Cubic(cubic) => cubic.bounds(),
        }
    }
}

impl From<LineSegment> for Segment {
    fn from(line: LineSegment) -> Segment {
        Segment::Line(line)
    }
}

impl From<CircleSegment> for Segment {
    fn from(circle: CircleSegment) -> Segment {
        Segment::Circle(circle)
    }
}

impl From<QuadBezierSegment> for Segment {
    fn from(quad: QuadBezierSegment) -> Segment {
        Segment::Quad(quad)
    }
}

impl From<CubicBezierSegment> for Segment {
    fn from(cubic: CubicBezierSegment) -> Segment {
        Segment::Cubic(cubic)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{
        BezPath, CircleSegment, CurveError, LineSegment, Segment, SegmentOpts, Vec2,
    };

    fn random_point(rng: &mut StdRng) -> Vec2 {
        Vec2::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
    }

    #[test]
    fn from_control_points() {
        let opts = SegmentOpts::default();
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 1.0),
        ];
        assert!(matches!(
            Segment::from_control_points(&pts[..2], &opts),
            Ok(Segment::Line(_))
        ));
        assert!(matches!(
            Segment::from_control_points(&pts[..3], &opts),
            Ok(Segment::Quad(_))
        ));
        assert!(matches!(
            Segment::from_control_points(&pts, &opts),
            Ok(Segment::Cubic(_))
        ));
        assert_eq!(
            Segment::from_control_points(&[], &opts),
            Err(CurveError::ControlPointCount { found: 0 })
        );
    }

    #[test]
    fn split_preserves_arc_length() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let opts = SegmentOpts::default();
        for _ in 0..50 {
            let pts = [
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
            ];
            let t = rng.random_range(0.05..0.95);
            let segments = [
                Segment::from(LineSegment::new(pts[0], pts[1])),
                Segment::from(CircleSegment::new(pts[0], 10.0, pts[1], pts[2], rng.random())),
                Segment::from_control_points(&pts[..3], &opts).unwrap(),
                Segment::from_control_points(&pts, &opts).unwrap(),
            ];
            for segment in &segments {
                let (a, b) = segment.split(t);
                let total = a.arc_length() + b.arc_length();
                let relative = (total - segment.arc_length()).abs() / segment.arc_length();
                assert!(relative < 1e-4, "{segment:?} split at {t}: {total}");
                assert!((a.end() - b.start()).hypot() < 1e-9);
                assert!((a.start() - segment.start()).hypot() < 1e-9);
                assert!((b.end() - segment.end()).hypot() < 1e-9);
            }
        }
    }

    #[test]
    fn draw_dispatch() {
        let segment = Segment::from(CircleSegment::new(
            Vec2::ZERO,
            2.0,
            Vec2::new(2.0, 0.0),
            Vec2::new(-2.0, 0.0),
            false,
        ));
        assert!((segment.arc_length() - 2.0 * PI).abs() < 1e-12);
        let mut path = BezPath::new();
        let (start, end) = segment.draw(&mut path, 0.0, 1.0, true);
        assert!((start.position - Vec2::new(2.0, 0.0)).hypot() < 1e-12);
        assert!((end.position - Vec2::new(-2.0, 0.0)).hypot() < 1e-12);
        assert!((path.current_point().unwrap() - end.position).hypot() < 1e-12);
    }
}
