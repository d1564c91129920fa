// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path emission: the drawing interface segments render into.

use alloc::vec::Vec;

use crate::Vec2;

/// A receiver of drawing commands.
///
/// This mirrors the path-building half of a 2D canvas API. Segments call it
/// from their `draw` methods; a renderer implements it to turn the commands
/// into pixels, and [`BezPath`] implements it to record them.
pub trait PathSink {
    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: Vec2);

    /// A straight line from the current point to `p`.
    fn line_to(&mut self, p: Vec2);

    /// A quadratic Bézier from the current point, with control point `p1`,
    /// ending at `p2`.
    fn quad_to(&mut self, p1: Vec2, p2: Vec2);

    /// A cubic Bézier from the current point, with control points `p1` and
    /// `p2`, ending at `p3`.
    fn curve_to(&mut self, p1: Vec2, p2: Vec2, p3: Vec2);

    /// A circular arc of the given radius tangent to the lines from the
    /// current point to `through` and from `through` to `to`.
    ///
    /// Segments only emit this with the current point and `to` both on the
    /// arc, so the arc starts at the current point and ends at `to`.
    fn arc_to(&mut self, through: Vec2, to: Vec2, radius: f64);
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn move_to(&mut self, p: Vec2) {
        (**self).move_to(p);
    }

    fn line_to(&mut self, p: Vec2) {
        (**self).line_to(p);
    }

    fn quad_to(&mut self, p1: Vec2, p2: Vec2) {
        (**self).quad_to(p1, p2);
    }

    fn curve_to(&mut self, p1: Vec2, p2: Vec2, p3: Vec2) {
        (**self).curve_to(p1, p2, p3);
    }

    fn arc_to(&mut self, through: Vec2, to: Vec2, radius: f64) {
        (**self).arc_to(through, to, radius);
    }
}

/// A recorded drawing command.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Vec2),
    /// Draw a line from the current location to the point.
    LineTo(Vec2),
    /// Draw a quadratic Bézier using the current location and the two points.
    QuadTo(Vec2, Vec2),
    /// Draw a cubic Bézier using the current location and the three points.
    CurveTo(Vec2, Vec2, Vec2),
    /// Draw a circular arc, see [`PathSink::arc_to`].
    ArcTo {
        /// The intersection of the arc's end tangents.
        through: Vec2,
        /// The end of the arc.
        to: Vec2,
        /// The arc radius.
        radius: f64,
    },
}

impl PathEl {
    /// The point the path is at after this element.
    pub fn end_point(&self) -> Vec2 {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p,
            PathEl::QuadTo(_, p2) => p2,
            PathEl::CurveTo(_, _, p3) => p3,
            PathEl::ArcTo { to, .. } => to,
        }
    }
}

/// A recording [`PathSink`].
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<PathEl>);

impl BezPath {
    /// Create a new path.
    pub fn new() -> BezPath {
        BezPath::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// The number of recorded elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The end point of the last element, if any.
    pub fn current_point(&self) -> Option<Vec2> {
        self.0.last().map(PathEl::end_point)
    }
}

impl PathSink for BezPath {
    fn move_to(&mut self, p: Vec2) {
        self.push(PathEl::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.push(PathEl::LineTo(p));
    }

    fn quad_to(&mut self, p1: Vec2, p2: Vec2) {
        self.push(PathEl::QuadTo(p1, p2));
    }

    fn curve_to(&mut self, p1: Vec2, p2: Vec2, p3: Vec2) {
        self.push(PathEl::CurveTo(p1, p2, p3));
    }

    fn arc_to(&mut self, through: Vec2, to: Vec2, radius: f64) {
        self.push(PathEl::ArcTo {
            through,
            to,
            radius,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::{BezPath, PathEl, PathSink, Vec2};

    #[test]
    fn records_commands() {
        let mut path = BezPath::new();
        assert!(path.is_empty());
        assert_eq!(path.current_point(), None);
        path.move_to(Vec2::new(0.0, 0.0));
        path.line_to(Vec2::new(1.0, 0.0));
        path.curve_to(Vec2::new(1.0, 1.0), Vec2::new(2.0, 1.0), Vec2::new(2.0, 0.0));
        path.arc_to(Vec2::new(3.0, 0.0), Vec2::new(3.0, 1.0), 1.0);
        assert_eq!(path.len(), 4);
        assert_eq!(path.current_point(), Some(Vec2::new(3.0, 1.0)));
        assert_eq!(path.elements()[1], PathEl::LineTo(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn through_mut_ref() {
        fn draw(mut sink: impl PathSink) {
            sink.move_to(Vec2::ZERO);
            sink.quad_to(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        }
        let mut path = BezPath::new();
        draw(&mut path);
        assert_eq!(path.len(), 2);
    }
}
