// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for fallible curve construction.

use thiserror::Error;

/// Errors produced when building curves from runtime-sized input.
///
/// Degenerate geometry is not an error: it produces zero tangents and
/// normals instead, and out-of-range parameters are clamped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CurveError {
    /// A Bézier needs 2 (line), 3 (quadratic) or 4 (cubic) control points.
    #[error("expected 2, 3 or 4 control points, found {found}")]
    ControlPointCount {
        /// The number of points supplied.
        found: usize,
    },
}
