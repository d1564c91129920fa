// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use core::f64::consts::TAU;

use arrayvec::ArrayVec;

/// Discriminant threshold below which a depressed cubic is solved with the
/// trigonometric method.
const CUBIC_DISCRIMINANT_EPSILON: f64 = 1e-5;

/// Magnitude of the `acos` argument at which two of the three trigonometric
/// roots are treated as one double root.
const DOUBLE_ROOT_THRESHOLD: f64 = 0.9999;

/// How much larger than the roots of its quadratic part the far root of a
/// cubic must be before the cubic is solved through its quadratic part.
const NEARLY_QUADRATIC_RATIO: f64 = 1e7;

/// Find the real root of a linear equation.
///
/// Return the value of x for which c0 + c1 x = 0, or `None` when `c1` is
/// zero.
pub fn solve_linear(c0: f64, c1: f64) -> Option<f64> {
    if c1 == 0.0 {
        None
    } else {
        Some(-c0 / c1)
    }
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0, sorted in ascending
/// order. A double root is returned once.
///
/// The coefficients are scaled by `c2` first. If that overflows, `c2` is
/// zero or negligible and the equation is solved as a linear one; the
/// other root would be out of representable range. The smaller root is
/// recovered from the product of the roots, so it keeps full precision
/// when the two roots differ greatly in magnitude.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        result.extend(solve_linear(c0, c1).filter(|root| root.is_finite()));
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // sc1 * sc1 overflowed. Find one root using sc1 x + x² = 0, the
        // other as sc0 / root1.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        result.push(root1.min(root2));
        result.push(root1.max(root2));
    } else {
        result.push(root1);
    }
    result
}

/// Find real roots of cubic equation.
///
/// The cubic is depressed into the form t³ + pt + q = 0 and solved in
/// closed form, picking the trigonometric or hyperbolic method depending
/// on the sign of the discriminant. See [`solve_depressed_cubic`].
///
/// Return values of x for which c0 + c1 x + c2 x² + c3 x³ = 0, sorted in
/// ascending order. When `c3` is zero the equation is solved as a quadratic,
/// and when it is negligible next to `c2` the far root is split off first.
pub fn solve_cubic(c0: f64, c1: f64, c2: f64, c3: f64) -> ArrayVec<f64, 3> {
    let c3_recip = c3.recip();
    let (sc0, sc1, sc2) = (c0 * c3_recip, c1 * c3_recip, c2 * c3_recip);
    if !(sc0.is_finite() && sc1.is_finite() && sc2.is_finite()) {
        // cubic coefficient is zero or nearly so.
        return solve_quadratic(c0, c1, c2).into_iter().collect();
    }
    if c2 != 0.0 {
        // When the cubic term only matters far away from the roots of the
        // quadratic part, depressing the cubic cancels those roots away.
        // Solve the quadratic part and add the far root, -c2/c3 to first
        // order.
        let near = (c1 / c2).abs().max((c0 / c2).abs().sqrt());
        if sc2.abs() > NEARLY_QUADRATIC_RATIO * near {
            let mut result: ArrayVec<f64, 3> =
                solve_quadratic(c0, c1, c2).into_iter().collect();
            result.push(c1 / c2 - sc2);
            result.sort_by(f64::total_cmp);
            return result;
        }
    }
    let (a, b, c, d) = (c3, c2, c1, c0);
    let aa = a * a;
    let ac = a * c;
    let bb = b * b;
    let p = (3.0 * ac - bb) / (3.0 * aa);
    let q = (2.0 * bb * b - 9.0 * ac * b + 27.0 * aa * d) / (27.0 * aa * a);
    let shift = b / (3.0 * a);
    let mut result: ArrayVec<f64, 3> = solve_depressed_cubic(p, q)
        .into_iter()
        .map(|root| root - shift)
        .collect();
    result.sort_by(f64::total_cmp);
    result
}

/// Find real roots of the depressed cubic t³ + pt + q = 0.
///
/// * `|p| < f64::EPSILON`: the equation reduces to t³ = -q, one root.
/// * discriminant `4p³ + 27q²` below `1e-5` (with `p < 0`): three real
///   roots from the cosine substitution. When the `acos` argument
///   saturates at ±1 two of them coincide, and only two roots are returned.
/// * positive discriminant with `p < 0`: one root from the `acosh`
///   substitution.
/// * `p > 0`: one root from the `asinh` substitution.
///
/// The roots are returned in the order the method produces them.
pub fn solve_depressed_cubic(p: f64, q: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    if p.abs() < f64::EPSILON {
        result.push((-q).cbrt());
        return result;
    }
    let discriminant = 4.0 * p * p * p + 27.0 * q * q;
    if discriminant < CUBIC_DISCRIMINANT_EPSILON && p < 0.0 {
        let pre = 2.0 * (-p / 3.0).sqrt();
        let acos_inner = ((3.0 * q) / (2.0 * p)) * (-3.0 / p).sqrt();
        let theta = acos_inner.clamp(-1.0, 1.0).acos() / 3.0;
        let root = |k: f64| pre * (theta - TAU / 3.0 * k).cos();
        if acos_inner >= DOUBLE_ROOT_THRESHOLD {
            result.push(root(0.0));
            result.push(root(2.0));
        } else if acos_inner <= -DOUBLE_ROOT_THRESHOLD {
            result.push(root(1.0));
            result.push(root(2.0));
        } else {
            result.push(root(0.0));
            result.push(root(1.0));
            result.push(root(2.0));
        }
    } else if discriminant > 0.0 && p < 0.0 {
        let inner = (((-3.0 * q.abs()) / (2.0 * p)) * (-3.0 / p).sqrt()).acosh() / 3.0;
        result.push(-2.0 * q.signum() * (-p / 3.0).sqrt() * inner.cosh());
    } else if p > 0.0 {
        let inner = (((3.0 * q) / (2.0 * p)) * (3.0 / p).sqrt()).asinh() / 3.0;
        result.push(-2.0 * (p / 3.0).sqrt() * inner.sinh());
    }
    result
}

// Table of Legendre-Gauss quadrature coefficients, adapted from:
// <https://pomax.github.io/bezierinfo/legendre-gauss.html>

pub const GAUSS_LEGENDRE_COEFFS_16: &[(f64, f64)] = &[
    (0.1894506104550685, -0.0950125098376374),
    (0.1894506104550685, 0.0950125098376374),
    (0.1826034150449236, -0.2816035507792589),
    (0.1826034150449236, 0.2816035507792589),
    (0.1691565193950025, -0.4580167776572274),
    (0.1691565193950025, 0.4580167776572274),
    (0.1495959888165767, -0.6178762444026438),
    (0.1495959888165767, 0.6178762444026438),
    (0.1246289712555339, -0.7554044083550030),
    (0.1246289712555339, 0.7554044083550030),
    (0.0951585116824928, -0.8656312023878318),
    (0.0951585116824928, 0.8656312023878318),
    (0.0622535239386479, -0.9445750230732326),
    (0.0622535239386479, 0.9445750230732326),
    (0.0271524594117541, -0.9894009349916499),
    (0.0271524594117541, 0.9894009349916499),
];

/// Integrate `f` over `t0..t1` with 16-point Gauss-Legendre
/// quadrature.
pub fn integrate_gauss_legendre(f: impl Fn(f64) -> f64, t0: f64, t1: f64) -> f64 {
    let half = 0.5 * (t1 - t0);
    let mid = 0.5 * (t0 + t1);
    GAUSS_LEGENDRE_COEFFS_16
        .iter()
        .map(|&(wi, xi)| wi * f(mid + half * xi))
        .sum::<f64>()
        * half
}
