// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Inclusive bounds on the magnitude of the `a` and `d` scale components.
///
/// Clamping works on magnitudes and keeps the sign, so a flipped axis
/// (negative scale) stays flipped after being clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates limits from a minimum and maximum scale.
    ///
    /// The pair is normalized so that `min <= max`, and negative values are
    /// replaced by their magnitude. A non-finite bound leaves that side open.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min.abs() } else { 0.0 };
        let max = if max.is_finite() { max.abs() } else { f64::MAX };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns the minimum scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits, preserving its sign.
    ///
    /// A zero scale clamps to the minimum, keeping the zero's sign.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        let magnitude = scale.abs().clamp(self.min, self.max);
        if scale.is_sign_negative() { -magnitude } else { magnitude }
    }

    /// Returns `true` if the magnitude of `scale` lies within the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        let magnitude = scale.abs();
        magnitude >= self.min && magnitude <= self.max
    }

    /// Clamps both the `a` and `d` components of `matrix`.
    #[must_use]
    pub fn apply(&self, matrix: Affine) -> Affine {
        let (a, d) = scale_of(matrix);
        with_scale(matrix, self.clamp(a), self.clamp(d))
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: 0.3, max: 6.0 }
    }
}

/// Returns the `(a, d)` scale components of `matrix`.
#[must_use]
pub fn scale_of(matrix: Affine) -> (f64, f64) {
    let [a, _, _, d, _, _] = matrix.as_coeffs();
    (a, d)
}

/// Returns `matrix` with its `a` and `d` components replaced.
///
/// Skew (`b`, `c`) and translation (`e`, `f`) are left untouched.
#[must_use]
pub fn with_scale(matrix: Affine, a: f64, d: f64) -> Affine {
    let [_, b, c, _, e, f] = matrix.as_coeffs();
    Affine::new([a, b, c, d, e, f])
}

/// Sets the scale of `matrix` to `(a, d)` while keeping `focal` fixed.
///
/// `focal` is expressed in the coordinate space the translation lives in
/// (the element's untransformed frame, origin at its top-left corner). Each
/// axis is adjusted independently:
///
/// `new_e = fx - (fx - e) * (a / old_a)` and `new_f = fy - (fy - f) * (d / old_d)`.
///
/// An axis whose current scale is zero has no well-defined ratio; its
/// translation is kept.
#[must_use]
pub fn zoom_about(matrix: Affine, a: f64, d: f64, focal: Point) -> Affine {
    let [old_a, b, c, old_d, e, f] = matrix.as_coeffs();
    let e = if old_a == 0.0 {
        e
    } else {
        focal.x - (focal.x - e) * (a / old_a)
    };
    let f = if old_d == 0.0 {
        f
    } else {
        focal.y - (focal.y - f) * (d / old_d)
    };
    Affine::new([a, b, c, d, e, f])
}

/// Bounding box of an element of `size` under the linear part of `matrix`.
///
/// The element's untransformed box is `(0, 0)..size`; the translation of
/// `matrix` is ignored, so the result is the extent relative to the
/// translated origin.
#[must_use]
pub fn rendered_extent(matrix: Affine, size: Size) -> Rect {
    let linear = matrix.with_translation(kurbo::Vec2::ZERO);
    let q0 = linear * Point::ZERO;
    let q1 = linear * Point::new(size.width, 0.0);
    let q2 = linear * Point::new(0.0, size.height);
    let q3 = linear * Point::new(size.width, size.height);
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
