// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve geometry for path animation.
//!
//! Pathwise evaluates lines, circular arcs and quadratic and cubic Bézier
//! segments, measures their arc length and re-parameterizes them by
//! distance, so that animation progress maps to uniform movement along a
//! path. Segments combine into a [`CurveProfile`], which answers point
//! queries by distance and draws any sub-range of itself into a
//! [`PathSink`].
//!
//! The numerical layer underneath is exposed too: [`Polynomial`] and
//! [`Polynomial2D`] carry the closed-form root finding, splitting and tight
//! bounds the segments are built on.
//!
//! # Examples
//!
//! Walking a cubic at uniform speed:
//!
//! ```
//! use pathwise::{CubicBezierSegment, PolynomialSegment, Vec2};
//!
//! let curve = CubicBezierSegment::new(
//!     (-200.0, -200.0),
//!     (100.0, -200.0),
//!     (-100.0, 200.0),
//!     (200.0, 200.0),
//! );
//! assert!(curve.arc_length() > 0.0);
//! let start = curve.get_point(0.0);
//! assert_eq!(start.position, Vec2::new(-200.0, -200.0));
//! assert_eq!(start.normal, start.tangent.perpendicular());
//! ```
//!
//! Building a rounded polyline and drawing half of it:
//!
//! ```
//! use pathwise::{BezPath, CurveProfile, Vec2};
//!
//! let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)];
//! let profile = CurveProfile::polyline(&points, 10.0, false);
//! let mut path = BezPath::new();
//! let (start, end) = profile.draw(&mut path, 0.0, 0.5).unwrap();
//! assert_eq!(start.position, Vec2::new(0.0, 0.0));
//! assert!((end.position - profile.point_at_fraction(0.5).position).hypot() < 1e-9);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for all value types.
//! - `mint`: conversions between [`Vec2`] and `mint::Vector2<f64>`.
//!
//! Diagnostics go through the [`log`] facade; the crate installs no logger.
//!
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod bbox;
mod bezpath;
mod circle;
pub mod common;
mod cubicbez;
mod error;
mod line;
mod poly_segment;
mod polyline;
mod polynomial;
mod polynomial2d;
mod profile;
mod quadbez;
mod sampler;
mod segment;
mod spline;
mod vec2;

pub use crate::bbox::*;
pub use crate::bezpath::*;
pub use crate::circle::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::poly_segment::PolynomialSegment;
pub use crate::polynomial::*;
pub use crate::polynomial2d::*;
pub use crate::profile::*;
pub use crate::quadbez::*;
pub use crate::sampler::*;
pub use crate::segment::*;
pub use crate::spline::*;
pub use crate::vec2::*;
