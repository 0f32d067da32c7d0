// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer geometry.

use kurbo::Point;

/// Baseline distances below this are treated as a single point.
const MIN_DISTANCE: f64 = 1e-6;

/// Distance and midpoint of a pair of pointers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    /// Distance between the two pointers.
    pub distance: f64,
    /// Point halfway between the two pointers.
    pub midpoint: Point,
}

impl Pinch {
    /// Measures the pair `(a, b)`.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
        }
    }

    /// Measures the first two entries of `points`, if there are two.
    #[must_use]
    pub fn from_slice(points: &[Point]) -> Option<Self> {
        match points {
            [a, b, ..] => Some(Self::from_points(*a, *b)),
            _ => None,
        }
    }

    /// Returns `true` if the pointers are too close together to measure a
    /// meaningful spread.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.distance.is_finite() || self.distance < MIN_DISTANCE
    }

    /// Ratio of this pinch's spread to `baseline`'s.
    ///
    /// Returns `1.0` when the baseline is degenerate, so such a pinch acts as
    /// a pure pan.
    #[must_use]
    pub fn ratio_to(&self, baseline: &Self) -> f64 {
        if baseline.is_degenerate() {
            1.0
        } else {
            self.distance / baseline.distance
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Pinch;

    #[test]
    fn measures_distance_and_midpoint() {
        let p = Pinch::from_points(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert_eq!(p.distance, 50.0);
        assert_eq!(p.midpoint, Point::new(15.0, 20.0));
    }

    #[test]
    fn from_slice_needs_two_points() {
        assert!(Pinch::from_slice(&[]).is_none());
        assert!(Pinch::from_slice(&[Point::ZERO]).is_none());
        let three = [Point::ZERO, Point::new(10.0, 0.0), Point::new(99.0, 99.0)];
        assert_eq!(Pinch::from_slice(&three).unwrap().distance, 10.0);
    }

    #[test]
    fn ratio_against_baseline() {
        let base = Pinch::from_points(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let wide = Pinch::from_points(Point::new(0.0, 0.0), Point::new(25.0, 0.0));
        assert_eq!(wide.ratio_to(&base), 2.5);
        assert_eq!(base.ratio_to(&wide), 0.4);
    }

    #[test]
    fn degenerate_baseline_is_neutral() {
        let base = Pinch::from_points(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        let wide = Pinch::from_points(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(base.is_degenerate());
        assert_eq!(wide.ratio_to(&base), 1.0);
    }
}
