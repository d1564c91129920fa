// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiles of straight edges with rounded corners.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::{CircleSegment, CurveProfile, LineSegment, Vec2};

/// Consecutive points closer than this are merged.
const MERGE_DISTANCE: f64 = 1e-9;

/// Turns smaller than this, or this close to a reversal, are left sharp.
const MIN_TURN: f64 = 1e-9;

/// How a vertex shortens its two edges.
#[derive(Clone, Copy, Default)]
struct Corner {
    /// Distance cut from each adjacent edge.
    trim: f64,
    arc: Option<CircleSegment>,
}

impl CurveProfile {
    /// Build a profile from a polyline, rounding its corners.
    ///
    /// Each corner is replaced by a circular arc of `corner_radius` tangent
    /// to both edges. The radius shrinks where needed so that an arc never
    /// uses more than half of an edge, or the whole edge next to an open
    /// end. A `corner_radius` of zero keeps the corners sharp.
    ///
    /// The profile's `min_sin` is the smallest `cos(turn / 2)` over all
    /// corners. Repeated points are dropped; fewer than two distinct points
    /// give an empty profile.
    pub fn polyline(points: &[Vec2], corner_radius: f64, closed: bool) -> CurveProfile {
        let mut vertices: Vec<Vec2> = Vec::with_capacity(points.len());
        for &point in points {
            if vertices
                .last()
                .is_some_and(|last| last.distance(point) <= MERGE_DISTANCE)
            {
                continue;
            }
            vertices.push(point);
        }
        if closed && vertices.len() > 2 {
            if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
                if first.distance(*last) <= MERGE_DISTANCE {
                    vertices.pop();
                }
            }
        }
        let dropped = points.len() - vertices.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} repeated polyline points");
        }

        let mut profile = CurveProfile::new();
        let n = vertices.len();
        if n < 2 {
            log::debug!("polyline with {n} distinct points, empty profile");
            return profile;
        }

        let corners: Vec<Corner> = (0..n)
            .map(|i| {
                if !closed && (i == 0 || i + 1 == n) {
                    return Corner::default();
                }
                // Open polylines let the end corners use whole edges.
                let prev_limit = if !closed && i == 1 { 1.0 } else { 0.5 };
                let next_limit = if !closed && i + 2 == n { 1.0 } else { 0.5 };
                let (corner, sin) = round_corner(
                    vertices[(i + n - 1) % n],
                    vertices[i],
                    vertices[(i + 1) % n],
                    corner_radius,
                    prev_limit,
                    next_limit,
                );
                profile.record_corner(sin);
                corner
            })
            .collect();

        let edges = if closed { n } else { n - 1 };
        for i in 0..edges {
            let j = (i + 1) % n;
            let (a, b) = (vertices[i], vertices[j]);
            let direction = (b - a).normalize();
            let start = a + corners[i].trim * direction;
            let end = b - corners[j].trim * direction;
            if start.distance(end) > MERGE_DISTANCE {
                profile.push(LineSegment::new(start, end));
            }
            if let Some(arc) = corners[j].arc {
                profile.push(arc);
            }
        }
        log::debug!(
            "polyline profile: {} segments, length {}, min_sin {}",
            profile.len(),
            profile.arc_length(),
            profile.min_sin()
        );
        profile
    }
}

/// Fit an arc into the corner at `cur`, returning it with the sine of the
/// interior half angle.
fn round_corner(
    prev: Vec2,
    cur: Vec2,
    next: Vec2,
    corner_radius: f64,
    prev_limit: f64,
    next_limit: f64,
) -> (Corner, f64) {
    let incoming = cur - prev;
    let outgoing = next - cur;
    let (in_len, out_len) = (incoming.hypot(), outgoing.hypot());
    let u = incoming / in_len;
    let v = outgoing / out_len;
    let turn = u.dot(v).clamp(-1.0, 1.0).acos();
    let half = 0.5 * turn;
    let sin = half.cos();
    if corner_radius.is_nan() || corner_radius <= 0.0 || turn < MIN_TURN || PI - turn < MIN_TURN
    {
        return (Corner::default(), sin);
    }
    let tan = half.tan();
    let radius = corner_radius
        .min(in_len * prev_limit / tan)
        .min(out_len * next_limit / tan);
    let trim = radius * tan;
    let center = cur + (radius / sin) * (v - u).normalize();
    let arc = CircleSegment::new(center, radius, cur - trim * u, cur + trim * v, u.cross(v) < 0.0);
    (
        Corner {
            trim,
            arc: Some(arc),
        },
        sin,
    )
}
