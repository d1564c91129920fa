// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis-aligned bounding box.

use crate::Vec2;

/// An axis-aligned bounding box, stored as origin and size.
///
/// Boxes built by this crate always have non-negative width and height.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    /// The minimum x coordinate.
    pub x: f64,
    /// The minimum y coordinate.
    pub y: f64,
    /// The extent along the x axis.
    pub width: f64,
    /// The extent along the y axis.
    pub height: f64,
}

impl BBox {
    /// A new box from origin and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> BBox {
        BBox {
            x,
            y,
            width,
            height,
        }
    }

    /// A new box from minimum and maximum coordinates.
    #[inline]
    pub fn from_extents(x_range: (f64, f64), y_range: (f64, f64)) -> BBox {
        BBox::new(
            x_range.0,
            y_range.0,
            x_range.1 - x_range.0,
            y_range.1 - y_range.0,
        )
    }

    /// The smallest box containing two points.
    #[inline]
    pub fn from_points(p0: impl Into<Vec2>, p1: impl Into<Vec2>) -> BBox {
        let p0 = p0.into();
        let p1 = p1.into();
        BBox::from_extents((p0.x.min(p1.x), p0.x.max(p1.x)), (p0.y.min(p1.y), p0.y.max(p1.y)))
    }

    /// The minimum x coordinate.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// The maximum x coordinate.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// The minimum y coordinate.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// The maximum y coordinate.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// The center point of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// Whether the point lies inside the box or on its boundary.
    #[inline]
    pub fn contains(&self, pt: Vec2) -> bool {
        pt.x >= self.min_x() && pt.x <= self.max_x() && pt.y >= self.min_y() && pt.y <= self.max_y()
    }

    /// The smallest box enclosing two boxes.
    #[inline]
    pub fn union(&self, other: BBox) -> BBox {
        BBox::from_extents(
            (self.min_x().min(other.min_x()), self.max_x().max(other.max_x())),
            (self.min_y().min(other.min_y()), self.max_y().max(other.max_y())),
        )
    }

    /// Compute the union with one point.
    ///
    /// A succession of `union_pt` operations on a series of points yields
    /// their enclosing box.
    #[inline]
    pub fn union_pt(&self, pt: Vec2) -> BBox {
        BBox::from_extents(
            (self.min_x().min(pt.x), self.max_x().max(pt.x)),
            (self.min_y().min(pt.y), self.max_y().max(pt.y)),
        )
    }
}
