// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arc segments.

use core::f64::consts::{FRAC_PI_2, TAU};

use crate::{BBox, CurvePoint, PathSink, Vec2};

/// Sweeps below this angle are drawn as a line.
const MIN_DRAWN_SWEEP: f64 = 1e-4;

/// The number of quarter-turn pieces in a full turn.
const MAX_PIECES: f64 = 4.0;

/// A circular arc.
///
/// Angles follow [`Vec2::from_angle`]: zero points along the positive x axis
/// and angles increase towards the positive y axis. A clockwise arc in a
/// y-down coordinate system therefore has increasing angles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleSegment {
    center: Vec2,
    radius: f64,
    from: Vec2,
    to: Vec2,
    counter: bool,
    start_angle: f64,
    sweep: f64,
}

impl CircleSegment {
    /// Create a new arc around `center`, from the direction of `from` to the
    /// direction of `to`.
    ///
    /// `from` and `to` need not lie on the circle; only their direction as
    /// seen from the center matters. With `counter` unset the angle increases
    /// along the arc, otherwise it decreases. The arc is always shorter than
    /// a full turn, and coinciding directions give an empty arc.
    pub fn new(
        center: impl Into<Vec2>,
        radius: f64,
        from: impl Into<Vec2>,
        to: impl Into<Vec2>,
        counter: bool,
    ) -> CircleSegment {
        let center = center.into();
        let u = from.into() - center;
        let v = to.into() - center;
        let mut sweep = u.cross(v).atan2(u.dot(v));
        if !counter && sweep < 0.0 {
            sweep += TAU;
        } else if counter && sweep > 0.0 {
            sweep -= TAU;
        }
        CircleSegment::from_angles(center, radius, u.atan2(), sweep, counter)
    }

    /// Create a new arc from its start angle and signed sweep, in radians.
    ///
    /// A positive sweep increases the angle along the arc. The sweep is
    /// clamped to at most one full turn either way.
    pub fn from_sweep(center: impl Into<Vec2>, radius: f64, start_angle: f64, sweep: f64) -> CircleSegment {
        let sweep = sweep.clamp(-TAU, TAU);
        CircleSegment::from_angles(center.into(), radius, start_angle, sweep, sweep < 0.0)
    }

    fn from_angles(
        center: Vec2,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        counter: bool,
    ) -> CircleSegment {
        CircleSegment {
            center,
            radius,
            from: center + radius * Vec2::from_angle(start_angle),
            to: center + radius * Vec2::from_angle(start_angle + sweep),
            counter,
            start_angle,
            sweep,
        }
    }

    /// The center of the circle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// The radius of the circle.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The start point, on the circle.
    #[inline]
    pub fn from(&self) -> Vec2 {
        self.from
    }

    /// The end point, on the circle.
    #[inline]
    pub fn to(&self) -> Vec2 {
        self.to
    }

    /// Whether the angle decreases along the arc.
    #[inline]
    pub fn counter(&self) -> bool {
        self.counter
    }

    /// The angle of the start point, in radians.
    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// The signed angle covered by the arc, in radians.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// The length of the arc.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// The point at the given fraction of the arc length.
    ///
    /// The fraction is clamped to `[0, 1]`. A zero radius gives zero tangent
    /// and normal.
    pub fn get_point(&self, fraction: f64) -> CurvePoint {
        self.point_at_angle(self.angle_at(fraction.clamp(0.0, 1.0)))
    }

    fn angle_at(&self, fraction: f64) -> f64 {
        self.start_angle + fraction * self.sweep
    }

    fn point_at_angle(&self, angle: f64) -> CurvePoint {
        let radial = Vec2::from_angle(angle);
        let direction = if self.counter { -1.0 } else { 1.0 };
        let tangent = Vec2::new(-radial.y, radial.x) * (direction * self.radius);
        CurvePoint::new(self.center + self.radius * radial, tangent.safe_normalize())
    }

    /// Draw the part of the arc between two fractions of its length.
    ///
    /// The arc is emitted as `arc_to` pieces of at most a quarter turn each.
    /// Pieces too short to draw as an arc are emitted as a line.
    pub fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint) {
        let a0 = self.angle_at(start.clamp(0.0, 1.0));
        let a1 = self.angle_at(end.clamp(0.0, 1.0));
        let first = self.point_at_angle(a0);
        let last = self.point_at_angle(a1);
        if move_to {
            sink.move_to(first.position);
        }
        let sweep = a1 - a0;
        if sweep.abs() < MIN_DRAWN_SWEEP {
            sink.line_to(last.position);
            return (first, last);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a sweep of at most a full turn needs at most four pieces"
        )]
        let n = (sweep.abs() / FRAC_PI_2).ceil().clamp(1.0, MAX_PIECES) as usize;
        let step = sweep / n as f64;
        let through_distance = self.radius / (0.5 * step).cos();
        for i in 0..n {
            let mid = a0 + (i as f64 + 0.5) * step;
            let to = if i + 1 == n {
                last.position
            } else {
                self.center + self.radius * Vec2::from_angle(a0 + (i + 1) as f64 * step)
            };
            let through = self.center + through_distance * Vec2::from_angle(mid);
            sink.arc_to(through, to, self.radius);
        }
        (first, last)
    }

    /// Split the arc at the given fraction of its length.
    pub fn split(&self, t: f64) -> (CircleSegment, CircleSegment) {
        let t = t.clamp(0.0, 1.0);
        let mid = self.angle_at(t);
        (
            CircleSegment::from_angles(
                self.center,
                self.radius,
                self.start_angle,
                t * self.sweep,
                self.counter,
            ),
            CircleSegment::from_angles(
                self.center,
                self.radius,
                mid,
                (1.0 - t) * self.sweep,
                self.counter,
            ),
        )
    }

    /// The tight axis-aligned bounding box.
    ///
    /// This covers the end points and every axis extreme the arc passes.
    pub fn bounds(&self) -> BBox {
        let mut bbox = BBox::from_points(self.from, self.to);
        let (lo, hi) = if self.sweep < 0.0 {
            (self.start_angle + self.sweep, self.start_angle)
        } else {
            (self.start_angle, self.start_angle + self.sweep)
        };
        // An arc shorter than a full turn passes at most four extremes.
        let first = (lo / FRAC_PI_2).ceil();
        for i in 0..5 {
            let angle = (first + i as f64) * FRAC_PI_2;
            if angle.is_nan() || angle > hi {
                break;
            }
            bbox = bbox.union_pt(self.center + self.radius * Vec2::from_angle(angle));
        }
        bbox
    }
}
