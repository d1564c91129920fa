// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{BBox, CurvePoint, PathSink, Vec2};

/// A straight line segment.
///
/// The parameter of a line is proportional to distance, so fractions of the
/// arc length and curve parameters coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    from: Vec2,
    to: Vec2,
    length: f64,
    tangent: Vec2,
    normal: Vec2,
}

impl LineSegment {
    /// Create a new line.
    ///
    /// A line from a point to itself has zero tangent and normal.
    #[inline]
    pub fn new(from: impl Into<Vec2>, to: impl Into<Vec2>) -> LineSegment {
        let from = from.into();
        let to = to.into();
        let tangent = (to - from).safe_normalize();
        LineSegment {
            from,
            to,
            length: from.distance(to),
            tangent,
            normal: tangent.perpendicular(),
        }
    }

    /// The start point.
    #[inline]
    pub fn from(&self) -> Vec2 {
        self.from
    }

    /// The end point.
    #[inline]
    pub fn to(&self) -> Vec2 {
        self.to
    }

    /// The unit direction from start to end.
    #[inline]
    pub fn tangent(&self) -> Vec2 {
        self.tangent
    }

    /// The unit normal, the perpendicular of the tangent.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// The length of the line.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.length
    }

    /// The point at the given fraction of the length.
    ///
    /// The fraction is clamped to `[0, 1]`.
    pub fn get_point(&self, fraction: f64) -> CurvePoint {
        CurvePoint {
            position: self.from.lerp(self.to, fraction.clamp(0.0, 1.0)),
            tangent: self.tangent,
            normal: self.normal,
        }
    }

    /// Draw the part of the line between two fractions of its length.
    pub fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint) {
        let start = self.get_point(start);
        let end = self.get_point(end);
        if move_to {
            sink.move_to(start.position);
        }
        sink.line_to(end.position);
        (start, end)
    }

    /// Split the line at the given fraction of its length.
    pub fn split(&self, t: f64) -> (LineSegment, LineSegment) {
        let mid = self.get_point(t).position;
        (LineSegment::new(self.from, mid), LineSegment::new(mid, self.to))
    }

    /// Returns a copy of this line with the end points swapped.
    #[must_use]
    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.to, self.from)
    }

    /// The bounding box of the end points.
    #[inline]
    pub fn bounds(&self) -> BBox {
        BBox::from_points(self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BezPath, LineSegment, PathEl, Vec2};

    #[test]
    fn length_and_orientation() {
        let line = LineSegment::new((1.0, 1.0), (4.0, 5.0));
        assert_eq!(line.arc_length(), 5.0);
        assert_eq!(line.tangent(), Vec2::new(0.6, 0.8));
        assert_eq!(line.normal(), Vec2::new(0.8, -0.6));
        let p = line.get_point(0.5);
        assert_eq!(p.position, Vec2::new(2.5, 3.0));
        assert_eq!(p.normal, p.tangent.perpendicular());
    }

    #[test]
    fn get_point_clamps() {
        let line = LineSegment::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(line.get_point(-0.5).position, Vec2::new(0.0, 0.0));
        assert_eq!(line.get_point(1.5).position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn zero_length() {
        let line = LineSegment::new((2.0, 2.0), (2.0, 2.0));
        assert_eq!(line.arc_length(), 0.0);
        let p = line.get_point(0.5);
        assert_eq!(p.position, Vec2::new(2.0, 2.0));
        assert_eq!(p.tangent, Vec2::ZERO);
        assert_eq!(p.normal, Vec2::ZERO);
    }

    #[test]
    fn draw_sub_range() {
        let line = LineSegment::new((0.0, 0.0), (10.0, 0.0));
        let mut path = BezPath::new();
        let (start, end) = line.draw(&mut path, 0.25, 0.75, true);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Vec2::new(2.5, 0.0)),
                PathEl::LineTo(Vec2::new(7.5, 0.0)),
            ]
        );
        assert_eq!(start.tangent, Vec2::new(1.0, 0.0));
        assert_eq!(end.position, Vec2::new(7.5, 0.0));

        let mut path = BezPath::new();
        line.draw(&mut path, 0.0, 1.0, false);
        assert_eq!(path.elements(), &[PathEl::LineTo(Vec2::new(10.0, 0.0))]);
    }

    #[test]
    fn split() {
        let line = LineSegment::new((0.0, 0.0), (0.0, 8.0));
        let (a, b) = line.split(0.25);
        assert_eq!(a.to(), Vec2::new(0.0, 2.0));
        assert_eq!(b.from(), Vec2::new(0.0, 2.0));
        assert_eq!(a.arc_length() + b.arc_length(), 8.0);
        assert_eq!(a.tangent(), line.tangent());
        assert_eq!(line.reversed().tangent(), -line.tangent());
    }
}
