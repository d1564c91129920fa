// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiles of cubic Bézier splines.

use alloc::vec::Vec;

use crate::{CubicBezierSegment, CurveProfile, SegmentOpts, Vec2};

/// A point of a Bézier spline, with its two handles.
///
/// Handles are absolute positions. The spline arrives at `position` from the
/// direction of `start_handle` and leaves towards `end_handle`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knot {
    /// The point the spline passes through.
    pub position: Vec2,
    /// The control point of the incoming segment.
    pub start_handle: Vec2,
    /// The control point of the outgoing segment.
    pub end_handle: Vec2,
}

impl Knot {
    /// Create a new knot.
    #[inline]
    pub fn new(
        position: impl Into<Vec2>,
        start_handle: impl Into<Vec2>,
        end_handle: impl Into<Vec2>,
    ) -> Knot {
        Knot {
            position: position.into(),
            start_handle: start_handle.into(),
            end_handle: end_handle.into(),
        }
    }

    /// A knot with both handles on the point.
    #[inline]
    pub fn corner(position: impl Into<Vec2>) -> Knot {
        let position = position.into();
        Knot::new(position, position, position)
    }

    /// A knot whose incoming handle mirrors the outgoing one.
    pub fn mirrored(position: impl Into<Vec2>, end_handle: impl Into<Vec2>) -> Knot {
        let position = position.into();
        let end_handle = end_handle.into();
        Knot::new(position, 2.0 * position - end_handle, end_handle)
    }

    /// Knots through `points` with handles derived from the neighbours.
    ///
    /// Each handle is offset from its point by `(next - prev) * smoothness / 2`,
    /// so a smoothness of `1/3` gives a Catmull-Rom spline and `0` a
    /// polygon. The ends of an open spline have no neighbour on one side and
    /// get both handles on the point.
    pub fn smooth(points: &[Vec2], closed: bool, smoothness: f64) -> Vec<Knot> {
        let n = points.len();
        (0..n)
            .map(|i| {
                let position = points[i];
                let neighbours = if closed && n > 2 {
                    Some((points[(i + n - 1) % n], points[(i + 1) % n]))
                } else if i > 0 && i + 1 < n {
                    Some((points[i - 1], points[i + 1]))
                } else {
                    None
                };
                match neighbours {
                    Some((prev, next)) => {
                        let offset = (0.5 * smoothness) * (next - prev);
                        Knot::new(position, position - offset, position + offset)
                    }
                    None => Knot::corner(position),
                }
            })
            .collect()
    }
}

impl CurveProfile {
    /// Build a profile from a Bézier spline, with default segment options.
    pub fn spline(knots: &[Knot], closed: bool) -> CurveProfile {
        CurveProfile::spline_with_opts(knots, closed, &SegmentOpts::default())
    }

    /// Build a profile from a Bézier spline.
    ///
    /// Consecutive knots are joined by cubic Béziers, and a closed spline
    /// also joins the last knot to the first. Fewer than two knots give an
    /// empty profile. The profile's `min_sin` reflects the sharpest turn
    /// between adjacent segments.
    pub fn spline_with_opts(knots: &[Knot], closed: bool, opts: &SegmentOpts) -> CurveProfile {
        let mut profile = CurveProfile::new();
        let n = knots.len();
        if n < 2 {
            log::debug!("spline with {n} knots, empty profile");
            return profile;
        }
        let count = if closed { n } else { n - 1 };
        let mut first_direction = None;
        let mut previous_direction = None;
        for i in 0..count {
            let a = knots[i];
            let b = knots[(i + 1) % n];
            let segment = CubicBezierSegment::new_with_opts(
                a.position,
                a.end_handle,
                b.start_handle,
                b.position,
                opts,
            );
            let (start, end) = end_directions(&segment);
            if let (Some(incoming), Some(outgoing)) = (previous_direction, start) {
                profile.record_corner(corner_sin(incoming, outgoing));
            }
            if i == 0 {
                first_direction = start;
            }
            previous_direction = end;
            profile.push(segment);
        }
        if closed {
            if let (Some(incoming), Some(outgoing)) = (previous_direction, first_direction) {
                profile.record_corner(corner_sin(incoming, outgoing));
            }
        }
        log::debug!(
            "spline profile: {} segments, length {}, min_sin {}",
            profile.len(),
            profile.arc_length(),
            profile.min_sin()
        );
        profile
    }
}

/// The unit directions in which a segment leaves its start and reaches its
/// end, skipping control points that coincide with the end point.
fn end_directions(segment: &CubicBezierSegment) -> (Option<Vec2>, Option<Vec2>) {
    let [p0, p1, p2, p3] = [segment.p0(), segment.p1(), segment.p2(), segment.p3()];
    let start = [p1 - p0, p2 - p0, p3 - p0]
        .into_iter()
        .find(|d| d.hypot2() > 0.0)
        .map(Vec2::normalize);
    let end = [p3 - p2, p3 - p1, p3 - p0]
        .into_iter()
        .find(|d| d.hypot2() > 0.0)
        .map(Vec2::normalize);
    (start, end)
}

/// The sine of the interior half angle between two unit directions.
fn corner_sin(incoming: Vec2, outgoing: Vec2) -> f64 {
    (0.5 * (1.0 + incoming.dot(outgoing))).clamp(0.0, 1.0).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_1_SQRT_2;

    use crate::{CurveProfile, Knot, Segment, SegmentOpts, Vec2};

    #[test]
    fn smooth_handles() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 2.0)];
        let knots = Knot::smooth(&points, false, 0.5);
        assert_eq!(knots.len(), 3);
        assert_eq!(knots[0], Knot::corner((0.0, 0.0)));
        assert_eq!(knots[2], Knot::corner((2.0, 2.0)));
        assert_eq!(knots[1].start_handle, Vec2::new(0.5, -0.5));
        assert_eq!(knots[1].end_handle, Vec2::new(1.5, 0.5));

        let closed = Knot::smooth(&points, true, 0.5);
        assert_eq!(closed[0].end_handle, Vec2::new(-0.25, -0.5));
    }

    #[test]
    fn mirrored() {
        let knot = Knot::mirrored((1.0, 1.0), (2.0, 3.0));
        assert_eq!(knot.start_handle, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn passes_through_knots() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 1.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(1.0, 4.0),
        ];
        let knots = Knot::smooth(&points, true, 1.0 / 3.0);
        let profile = CurveProfile::spline(&knots, true);
        assert_eq!(profile.len(), 4);
        for (segment, point) in profile.segments().iter().zip(points) {
            assert_eq!(segment.start(), point);
            assert!(matches!(segment, Segment::Cubic(_)));
        }
        assert_eq!(profile.segments()[3].end(), points[0]);
        // Every knot is smooth.
        assert_abs_diff_eq!(profile.min_sin(), 1.0, epsilon = 1e-12);
        let sum: f64 = profile.segments().iter().map(Segment::arc_length).sum();
        assert_abs_diff_eq!(sum, profile.arc_length(), epsilon = 1e-9);
    }

    #[test]
    fn corner_knots() {
        let knots = [
            Knot::corner((0.0, 0.0)),
            Knot::corner((10.0, 0.0)),
            Knot::corner((10.0, 10.0)),
        ];
        let opts = SegmentOpts::default().with_samples(8);
        let profile = CurveProfile::spline_with_opts(&knots, false, &opts);
        assert_eq!(profile.len(), 2);
        assert_abs_diff_eq!(profile.arc_length(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.min_sin(), FRAC_1_SQRT_2, epsilon = 1e-12);
        let mid = profile.point_at_distance(15.0);
        assert!((mid.position - Vec2::new(10.0, 5.0)).hypot() < 1e-3);
    }

    #[test]
    fn too_few_knots() {
        assert!(CurveProfile::spline(&[], false).is_empty());
        assert!(CurveProfile::spline(&[Knot::corner((1.0, 1.0))], true).is_empty());
    }
}
