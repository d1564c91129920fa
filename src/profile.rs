// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite paths made of heterogeneous segments.

use alloc::vec::Vec;

use crate::{BBox, CurvePoint, PathSink, Segment};

/// An ordered sequence of segments forming one continuous path.
///
/// The profile keeps the total arc length of its segments and the smallest
/// sine of the half angle at any of its corners, which stroking code uses to
/// size miter joins. A profile without corners has a `min_sin` of 1.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveProfile {
    segments: Vec<Segment>,
    arc_length: f64,
    min_sin: f64,
}

impl Default for CurveProfile {
    fn default() -> Self {
        CurveProfile {
            segments: Vec::new(),
            arc_length: 0.0,
            min_sin: 1.0,
        }
    }
}

impl CurveProfile {
    /// Create an empty profile.
    pub fn new() -> CurveProfile {
        CurveProfile::default()
    }

    /// Create a profile from a sequence of segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> CurveProfile {
        let mut profile = CurveProfile::new();
        profile.extend(segments);
        profile
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        let segment = segment.into();
        self.arc_length += segment.arc_length();
        self.segments.push(segment);
    }

    /// Record the sine of the half angle at a corner.
    ///
    /// The profile keeps the smallest value recorded.
    pub fn record_corner(&mut self, sin: f64) {
        self.min_sin = self.min_sin.min(sin);
    }

    /// The segments, in path order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the profile has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The total length of all segments.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// The smallest recorded corner sine, 1 if no corner was recorded.
    #[inline]
    pub fn min_sin(&self) -> f64 {
        self.min_sin
    }

    /// The point at the given distance along the profile.
    ///
    /// See [`get_point_at_distance`].
    #[inline]
    pub fn point_at_distance(&self, distance: f64) -> CurvePoint {
        get_point_at_distance(self, distance)
    }

    /// The point at the given fraction of the profile's length.
    #[inline]
    pub fn point_at_fraction(&self, fraction: f64) -> CurvePoint {
        get_point_at_distance(self, fraction * self.arc_length)
    }

    /// The union of the segment bounding boxes, `None` for an empty profile.
    pub fn bounds(&self) -> Option<BBox> {
        self.segments
            .iter()
            .map(Segment::bounds)
            .reduce(|acc, bbox| acc.union(bbox))
    }

    /// Draw the part of the profile between two fractions of its length.
    ///
    /// The fractions are clamped to `[0, 1]` and swapped if out of order. The
    /// drawn part starts with a `move_to`. Returns the curve points at both
    /// ends of the drawn part, or `None` if the profile is empty.
    pub fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
    ) -> Option<(CurvePoint, CurvePoint)> {
        if self.segments.is_empty() {
            return None;
        }
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        let from = start.clamp(0.0, 1.0) * self.arc_length;
        let to = end.clamp(0.0, 1.0) * self.arc_length;
        if to <= from {
            let point = self.point_at_distance(from);
            sink.move_to(point.position);
            return Some((point, point));
        }

        let mut first = None;
        let mut last = None;
        let mut offset = 0.0;
        for segment in &self.segments {
            let length = segment.arc_length();
            let segment_start = offset;
            offset += length;
            if length <= 0.0 || offset <= from || segment_start >= to {
                continue;
            }
            let relative_start = ((from - segment_start) / length).clamp(0.0, 1.0);
            let relative_end = ((to - segment_start) / length).clamp(0.0, 1.0);
            let (a, b) = segment.draw(sink, relative_start, relative_end, first.is_none());
            if first.is_none() {
                first = Some(a);
            }
            last = Some(b);
        }
        log::trace!(
            "drew profile range {from}..{to} of {} segments",
            self.segments.len()
        );
        match (first, last) {
            (Some(first), Some(last)) => Some((first, last)),
            // Only zero-length segments in range.
            _ => {
                let point = self.point_at_distance(from);
                sink.move_to(point.position);
                Some((point, self.point_at_distance(to)))
            }
        }
    }
}

impl Extend<Segment> for CurveProfile {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        for segment in iter {
            self.push(segment);
        }
    }
}

impl FromIterator<Segment> for CurveProfile {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        CurveProfile::from_segments(iter)
    }
}

/// The point at the given distance along a profile.
///
/// The distance is clamped to `[0, profile.arc_length()]`. The first segment
/// whose cumulative length reaches the distance owns the point. An empty
/// profile yields [`CurvePoint::FALLBACK`].
pub fn get_point_at_distance(profile: &CurveProfile, distance: f64) -> CurvePoint {
    let clamped = distance.max(0.0).min(profile.arc_length);
    let mut length = 0.0;
    for segment in &profile.segments {
        let previous = length;
        length += segment.arc_length();
        if length >= clamped {
            let relative = if segment.arc_length() > 0.0 {
                ((clamped - previous) / segment.arc_length()).clamp(0.0, 1.0)
            } else {
                0.0
            };
            return segment.get_point(relative);
        }
    }
    match profile.segments.last() {
        Some(segment) => segment.get_point(1.0),
        None => CurvePoint::FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        get_point_at_distance, BezPath, CircleSegment, CubicBezierSegment, CurvePoint,
        CurveProfile, LineSegment, PathEl, Segment, Vec2,
    };

    fn assert_near(p0: Vec2, p1: Vec2, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    fn two_lines() -> CurveProfile {
        CurveProfile::from_segments([
            Segment::from(LineSegment::new((0.0, 0.0), (10.0, 0.0))),
            Segment::from(LineSegment::new((10.0, 0.0), (10.0, 5.0))),
        ])
    }

    #[test]
    fn arc_length_is_sum() {
        let profile = two_lines();
        assert_eq!(profile.arc_length(), 15.0);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.min_sin(), 1.0);
        let total: f64 = profile.segments().iter().map(Segment::arc_length).sum();
        assert_eq!(total, profile.arc_length());
    }

    #[test]
    fn walk_two_lines() {
        let profile = two_lines();
        let p = get_point_at_distance(&profile, 12.0);
        assert_eq!(p.position, Vec2::new(10.0, 2.0));
        assert_eq!(p.tangent, Vec2::new(0.0, 1.0));
        let p = get_point_at_distance(&profile, 4.0);
        assert_eq!(p.position, Vec2::new(4.0, 0.0));
        // The corner belongs to the first segment.
        let p = get_point_at_distance(&profile, 10.0);
        assert_eq!(p.tangent, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn walk_clamps() {
        let profile = two_lines();
        assert_eq!(profile.point_at_distance(-3.0).position, Vec2::new(0.0, 0.0));
        assert_eq!(profile.point_at_distance(100.0).position, Vec2::new(10.0, 5.0));
        assert_eq!(profile.point_at_fraction(1.0).position, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn empty_profile() {
        let profile = CurveProfile::new();
        assert!(profile.is_empty());
        assert_eq!(profile.arc_length(), 0.0);
        let p = get_point_at_distance(&profile, 5.0);
        assert_eq!(p, CurvePoint::FALLBACK);
        assert_eq!(p.tangent, Vec2::UP);
        assert_eq!(p.normal, Vec2::UP);
        assert_eq!(profile.bounds(), None);
        let mut path = BezPath::new();
        assert_eq!(profile.draw(&mut path, 0.0, 1.0), None);
        assert!(path.is_empty());
    }

    #[test]
    fn mixed_segments() {
        let mut profile = CurveProfile::new();
        profile.push(LineSegment::new((0.0, 0.0), (10.0, 0.0)));
        profile.push(CircleSegment::new((10.0, 5.0), 5.0, (10.0, 0.0), (15.0, 5.0), false));
        profile.push(CubicBezierSegment::new((15.0, 5.0), (15.0, 10.0), (20.0, 10.0), (20.0, 15.0)));
        let sum: f64 = profile.segments().iter().map(Segment::arc_length).sum();
        assert!((sum - profile.arc_length()).abs() < 1e-9);
        let quarter = 2.5 * core::f64::consts::PI;
        let p = profile.point_at_distance(10.0 + quarter);
        assert_near(p.position, Vec2::new(15.0, 5.0), 1e-9);
        let end = profile.point_at_distance(profile.arc_length());
        assert_near(end.position, Vec2::new(20.0, 15.0), 1e-9);
        let bbox = profile.bounds().unwrap();
        assert_eq!(bbox.min_x(), 0.0);
        assert!((bbox.max_x() - 20.0).abs() < 1e-9);
        assert!((bbox.max_y() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn draw_across_segments() {
        let profile = two_lines();
        let mut path = BezPath::new();
        let (start, end) = profile.draw(&mut path, 0.6, 0.2).unwrap();
        assert_eq!(start.position, Vec2::new(3.0, 0.0));
        assert_eq!(end.position, Vec2::new(9.0, 0.0));
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Vec2::new(3.0, 0.0)),
                PathEl::LineTo(Vec2::new(9.0, 0.0)),
            ]
        );

        let mut path = BezPath::new();
        let (start, end) = profile.draw(&mut path, 0.0, 1.0).unwrap();
        assert_eq!(start.position, Vec2::new(0.0, 0.0));
        assert_eq!(end.position, Vec2::new(10.0, 5.0));
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Vec2::new(0.0, 0.0)),
                PathEl::LineTo(Vec2::new(10.0, 0.0)),
                PathEl::LineTo(Vec2::new(10.0, 5.0)),
            ]
        );
    }

    #[test]
    fn draw_empty_range() {
        let profile = two_lines();
        let mut path = BezPath::new();
        let (start, end) = profile.draw(&mut path, 0.4, 0.4).unwrap();
        assert_eq!(start, end);
        assert_eq!(path.elements(), &[PathEl::MoveTo(Vec2::new(6.0, 0.0))]);
    }
}
