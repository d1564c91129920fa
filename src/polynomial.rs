// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar polynomials of degree at most three.

use arrayvec::ArrayVec;

use crate::common::{solve_cubic, solve_linear, solve_quadratic};

/// A polynomial `c0 + c1 t + c2 t² + c3 t³`.
///
/// Polynomials are immutable values: differentiating or splitting one
/// produces new polynomials.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    /// The constant coefficient.
    pub c0: f64,
    /// The linear coefficient.
    pub c1: f64,
    /// The quadratic coefficient.
    pub c2: f64,
    /// The cubic coefficient.
    pub c3: f64,
}

impl Polynomial {
    /// Create a new cubic polynomial from its coefficients, constant first.
    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64, c3: f64) -> Polynomial {
        Polynomial { c0, c1, c2, c3 }
    }

    /// A polynomial that evaluates to `c0` everywhere.
    #[inline]
    pub const fn constant(c0: f64) -> Polynomial {
        Polynomial::new(c0, 0.0, 0.0, 0.0)
    }

    /// The polynomial `c0 + c1 t`.
    #[inline]
    pub const fn linear(c0: f64, c1: f64) -> Polynomial {
        Polynomial::new(c0, c1, 0.0, 0.0)
    }

    /// The polynomial `c0 + c1 t + c2 t²`.
    #[inline]
    pub const fn quadratic(c0: f64, c1: f64, c2: f64) -> Polynomial {
        Polynomial::new(c0, c1, c2, 0.0)
    }

    /// The polynomial `c0 + c1 t + c2 t² + c3 t³`, same as [`Polynomial::new`].
    #[inline]
    pub const fn cubic(c0: f64, c1: f64, c2: f64, c3: f64) -> Polynomial {
        Polynomial::new(c0, c1, c2, c3)
    }

    /// The coefficients, with the coefficient of `t^i` at index `i`.
    #[inline]
    pub fn coeffs(&self) -> [f64; 4] {
        [self.c0, self.c1, self.c2, self.c3]
    }

    /// The index of the highest non-zero coefficient.
    ///
    /// The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        if self.c3 != 0.0 {
            3
        } else if self.c2 != 0.0 {
            2
        } else if self.c1 != 0.0 {
            1
        } else {
            0
        }
    }

    /// Evaluate the polynomial at `t`.
    ///
    /// Any `t` is accepted; curves built on top of this clamp their own
    /// parameters.
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        ((self.c3 * t + self.c2) * t + self.c1) * t + self.c0
    }

    /// Evaluate the derivative of the given order at `t`.
    ///
    /// An order of 0 evaluates the polynomial itself.
    ///
    /// # Panics
    ///
    /// Panics if `order` is greater than 3, see [`Polynomial::differentiate`].
    #[inline]
    pub fn eval_derivative(&self, t: f64, order: usize) -> f64 {
        self.differentiate(order).eval(t)
    }

    /// The first derivative.
    #[inline]
    pub fn deriv(&self) -> Polynomial {
        Polynomial::quadratic(self.c1, 2.0 * self.c2, 3.0 * self.c3)
    }

    /// The derivative of the given order, as a new polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `order` is greater than 3. Curves in this crate never need
    /// more than the third derivative, so a larger order indicates a bug in
    /// the calling code rather than bad input data.
    pub fn differentiate(&self, order: usize) -> Polynomial {
        match order {
            0 => *self,
            1 => self.deriv(),
            2 => Polynomial::linear(2.0 * self.c2, 6.0 * self.c3),
            3 => Polynomial::constant(6.0 * self.c3),
            _ => panic!("unsupported derivative order: {order}"),
        }
    }

    /// Split the polynomial at `u`.
    ///
    /// Returns the pieces covering `[0, u]` and `[u, 1]`, each
    /// re-parameterized onto `[0, 1]`.
    pub fn split(&self, u: f64) -> (Polynomial, Polynomial) {
        let pre = Polynomial::new(
            self.c0,
            self.c1 * u,
            self.c2 * u * u,
            self.c3 * u * u * u,
        );
        // Taylor expansion around u, scaled onto the remaining interval.
        let d = 1.0 - u;
        let post = Polynomial::new(
            self.eval(u),
            self.eval_derivative(u, 1) * d,
            self.eval_derivative(u, 2) * d * d / 2.0,
            self.eval_derivative(u, 3) * d * d * d / 6.0,
        );
        (pre, post)
    }

    /// The real roots, in ascending order.
    ///
    /// The solver is picked by [degree](Polynomial::degree): a constant has
    /// no roots, and the linear, quadratic and cubic cases are handled by
    /// [`solve_linear`], [`solve_quadratic`] and [`solve_cubic`].
    pub fn roots(&self) -> ArrayVec<f64, 3> {
        match self.degree() {
            3 => solve_cubic(self.c0, self.c1, self.c2, self.c3),
            2 => solve_quadratic(self.c0, self.c1, self.c2).into_iter().collect(),
            1 => solve_linear(self.c0, self.c1).into_iter().collect(),
            _ => ArrayVec::new(),
        }
    }

    /// The parameters where the first derivative vanishes.
    pub fn local_extrema(&self) -> ArrayVec<f64, 2> {
        // The derivative is at most quadratic.
        self.deriv().roots().into_iter().take(2).collect()
    }

    /// The local extrema within `[0, 1]`.
    pub fn local_extrema_01(&self) -> ArrayVec<f64, 2> {
        self.local_extrema()
            .into_iter()
            .filter(|t| (0.0..=1.0).contains(t))
            .collect()
    }

    /// The minimum and maximum value over `[0, 1]`.
    pub fn output_range_01(&self) -> (f64, f64) {
        let mut min = self.eval(0.0).min(self.eval(1.0));
        let mut max = self.eval(0.0).max(self.eval(1.0));
        for t in self.local_extrema_01() {
            let value = self.eval(t);
            min = min.min(value);
            max = max.max(value);
        }
        (min, max)
    }
}
