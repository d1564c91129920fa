// Copyright 2024 the Pathwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc length parameterization of polynomial curves.

use smallvec::SmallVec;

use crate::{CurvePoint, Polynomial2D, PolynomialSegment, DEFAULT_SAMPLES};

/// Maps distances along a polynomial curve to curve parameters.
///
/// The sampler evaluates the curve at evenly spaced parameters and records
/// the cumulative chord length at each of them. Queries then invert that
/// table by linear interpolation, so that moving by equal distances moves
/// by (approximately) equal lengths along the curve, independent of how the
/// curve's own parameter speeds up and slows down.
///
/// The last table entry is the curve's exact arc length rather than the
/// chord sum; interior entries are polyline approximations and so slightly
/// underestimate the true distance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformPolynomialCurveSampler {
    curve: Polynomial2D,
    arc_length: f64,
    sampled_distances: SmallVec<[f64; DEFAULT_SAMPLES]>,
}

impl UniformPolynomialCurveSampler {
    /// Build a sampler for a segment.
    ///
    /// A sample count below 2 is raised to 2.
    pub fn new<S: PolynomialSegment + ?Sized>(segment: &S, samples: usize) -> Self {
        Self::from_curve(*segment.curve(), segment.arc_length(), samples)
    }

    /// Build a sampler from a curve and its known arc length.
    pub fn from_curve(curve: Polynomial2D, arc_length: f64, samples: usize) -> Self {
        let mut sampler = UniformPolynomialCurveSampler {
            curve,
            arc_length,
            sampled_distances: SmallVec::new(),
        };
        sampler.resample(samples);
        sampler
    }

    /// Rebuild the lookup table with the given number of samples.
    pub fn resample(&mut self, samples: usize) {
        let samples = samples.max(2);
        let step = ((samples - 1) as f64).recip();
        self.sampled_distances.clear();
        self.sampled_distances.reserve(samples);
        self.sampled_distances.push(0.0);
        let mut length = 0.0;
        let mut previous = self.curve.eval(0.0);
        for i in 1..samples {
            let point = self.curve.eval(i as f64 * step);
            length += previous.distance(point);
            // The chord sum can not exceed the true length, but rounding can.
            self.sampled_distances.push(length.min(self.arc_length));
            previous = point;
        }
        if let Some(last) = self.sampled_distances.last_mut() {
            *last = self.arc_length;
        }
        log::trace!(
            "resampled curve of length {} with {} samples, chord sum {}",
            self.arc_length,
            samples,
            length
        );
    }

    /// The number of samples in the table.
    #[inline]
    pub fn samples(&self) -> usize {
        self.sampled_distances.len()
    }

    /// The cumulative distance at each sampled parameter.
    ///
    /// The entries are non-decreasing, the first is 0 and the last is the
    /// arc length.
    #[inline]
    pub fn sampled_distances(&self) -> &[f64] {
        &self.sampled_distances
    }

    /// The arc length of the sampled curve.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// The point at the given distance along the curve.
    pub fn point_at_distance(&self, distance: f64) -> CurvePoint {
        crate::poly_segment::eval_curve_point(&self.curve, self.distance_to_t(distance))
    }

    /// The curve parameter at the given distance along the curve.
    ///
    /// Distances outside `[0, arc_length]` are clamped, so that a distance
    /// of zero maps to exactly 0 and the arc length to exactly 1.
    pub fn distance_to_t(&self, distance: f64) -> f64 {
        if distance.is_nan() || distance <= 0.0 {
            return 0.0;
        }
        if distance >= self.arc_length {
            return 1.0;
        }
        let step = (self.sampled_distances.len().saturating_sub(1).max(1) as f64).recip();
        for (i, pair) in self.sampled_distances.windows(2).enumerate() {
            let (lower, upper) = (pair[0], pair[1]);
            if distance >= lower && distance <= upper {
                let t0 = i as f64 * step;
                if upper <= lower {
                    return t0;
                }
                let fraction = (distance - lower) / (upper - lower);
                return t0 + fraction * step;
            }
        }
        1.0
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CubicBezierSegment, Polynomial2D, PolynomialSegment, QuadBezierSegment,
        UniformPolynomialCurveSampler, Vec2,
    };

    fn cubic() -> Polynomial2D {
        Polynomial2D::from_cubic_bez(
            Vec2::new(-200.0, -200.0),
            Vec2::new(100.0, -200.0),
            Vec2::new(-100.0, 200.0),
            Vec2::new(200.0, 200.0),
        )
    }

    #[test]
    fn distance_to_t_endpoints() {
        let curve = cubic();
        let length = curve.arc_length(1e-9);
        let sampler = UniformPolynomialCurveSampler::from_curve(curve, length, 20);
        assert_eq!(sampler.distance_to_t(0.0), 0.0);
        assert_eq!(sampler.distance_to_t(length), 1.0);
        assert_eq!(sampler.distance_to_t(-5.0), 0.0);
        assert_eq!(sampler.distance_to_t(length + 5.0), 1.0);
        assert_eq!(sampler.distance_to_t(f64::NAN), 0.0);
    }

    #[test]
    fn table_shape() {
        let curve = cubic();
        let length = curve.arc_length(1e-9);
        let sampler = UniformPolynomialCurveSampler::from_curve(curve, length, 20);
        let table = sampler.sampled_distances();
        assert_eq!(table.len(), 20);
        assert_eq!(table[0], 0.0);
        assert_eq!(table[19], length);
        assert!(table.windows(2).all(|w| w[0] <= w[1]));

        let mut sampler = sampler;
        sampler.resample(0);
        assert_eq!(sampler.sampled_distances(), &[0.0, length]);
    }

    #[test]
    fn distance_to_t_monotonic() {
        let curve = cubic();
        let length = curve.arc_length(1e-9);
        let sampler = UniformPolynomialCurveSampler::from_curve(curve, length, 20);
        let mut last = 0.0;
        for i in 0..=100 {
            let t = sampler.distance_to_t(length * i as f64 / 100.0);
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn line_is_uniform() {
        // A line with a non-uniform parameterization: x = t³.
        let curve = Polynomial2D::from_cubic_bez(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
        );
        let sampler = UniformPolynomialCurveSampler::from_curve(curve, 1.0, 200);
        let p = sampler.point_at_distance(0.5);
        assert!((p.position.x - 0.5).abs() < 1e-3);
        assert!((p.tangent - Vec2::new(1.0, 0.0)).hypot() < 1e-9);
    }

    #[test]
    fn converges_with_samples() {
        // Quarter circle approximation; compare with the densest table.
        let curve = Polynomial2D::from_cubic_bez(
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.5523),
            Vec2::new(0.5523, 1.0),
            Vec2::new(0.0, 1.0),
        );
        let length = curve.arc_length(1e-12);
        let reference = UniformPolynomialCurveSampler::from_curve(curve, length, 4000);
        let mut last_error = f64::INFINITY;
        for samples in [5, 20, 80, 320] {
            let sampler = UniformPolynomialCurveSampler::from_curve(curve, length, samples);
            let error = (0..=10)
                .map(|i| {
                    let d = length * i as f64 / 10.0;
                    (sampler.point_at_distance(d).position
                        - reference.point_at_distance(d).position)
                        .hypot()
                })
                .fold(0.0, f64::max);
            assert!(error <= last_error, "{samples}: {error} > {last_error}");
            last_error = error;
        }
        assert!(last_error < 1e-3);
    }

    #[test]
    fn from_segment() {
        let segment = CubicBezierSegment::new(
            (-200.0, -200.0),
            (100.0, -200.0),
            (-100.0, 200.0),
            (200.0, 200.0),
        );
        let sampler = UniformPolynomialCurveSampler::new(&segment, 20);
        assert_eq!(sampler.arc_length(), segment.arc_length());
        assert_eq!(&sampler, segment.sampler());
        assert_eq!(sampler.distance_to_t(segment.arc_length()), 1.0);
        let start = sampler.point_at_distance(0.0);
        assert_eq!(start.position, segment.start());

        // Too few samples are raised to two.
        let quad = QuadBezierSegment::new((0.0, 0.0), (1.0, 2.0), (3.0, 0.0));
        let sampler = UniformPolynomialCurveSampler::new(&quad, 1);
        assert_eq!(sampler.samples(), 2);
        assert_eq!(sampler.sampled_distances(), &[0.0, quad.arc_length()]);
    }
}
