// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};

use crate::matrix::rendered_extent;

/// Containment policy for the translation of a transformed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Contain {
    /// Do not apply any clamping; the element may move freely.
    #[default]
    None,
    /// Keep the rendered element inside its parent.
    ///
    /// On an axis where the element is larger than the parent this flips to
    /// keeping the parent covered, so no empty space is exposed.
    Inside,
    /// Keep some part of the rendered element overlapping its parent.
    ///
    /// The element may be dragged until its far edge meets the opposite edge
    /// of the parent, but never entirely out of view.
    Invert,
}

/// Layout geometry used to contain a transformed element.
///
/// Bounds are measured on demand from the host; they are never cached by the
/// controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Untransformed layout box of the element, in parent coordinates.
    pub element: Rect,
    /// Size of the parent the element is contained in.
    pub parent: Size,
}

impl Bounds {
    /// Creates bounds from the element's layout box and its parent's size.
    #[must_use]
    pub fn new(element: Rect, parent: Size) -> Self {
        Self { element, parent }
    }

    /// Returns `true` if the parent has no usable area to contain against.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.parent.width > 0.0 && self.parent.height > 0.0)
            || !self.parent.is_finite()
            || !self.element.is_finite()
    }

    /// Returns the rectangle covered by the element under `matrix`, in parent
    /// coordinates.
    #[must_use]
    pub fn rendered_rect(&self, matrix: Affine) -> Rect {
        let origin = self.element.origin().to_vec2() + matrix.translation();
        rendered_extent(matrix, self.element.size()) + origin
    }

    /// Returns the range of translations allowed by `mode` for `matrix`.
    ///
    /// The result is a rectangle in translation space: `x0..=x1` bounds `e`
    /// and `y0..=y1` bounds `f`. Returns `None` when `mode` is
    /// [`Contain::None`] or the bounds are degenerate.
    #[must_use]
    pub fn allowed_translation(&self, mode: Contain, matrix: Affine) -> Option<Rect> {
        if mode == Contain::None || self.is_degenerate() {
            return None;
        }
        let extent = rendered_extent(matrix, self.element.size());
        let origin = self.element.origin();
        let (x0, x1) = axis_range(
            mode,
            origin.x,
            extent.x0,
            extent.x1,
            self.parent.width,
        );
        let (y0, y1) = axis_range(
            mode,
            origin.y,
            extent.y0,
            extent.y1,
            self.parent.height,
        );
        Some(Rect::new(x0, y0, x1, y1))
    }

    /// Clamps the translation of `matrix` according to `mode`.
    ///
    /// Only `e` and `f` change; scale and skew are kept.
    #[must_use]
    pub fn clamp(&self, mode: Contain, matrix: Affine) -> Affine {
        let Some(allowed) = self.allowed_translation(mode, matrix) else {
            return matrix;
        };
        let t = matrix.translation();
        let clamped = Vec2::new(
            t.x.clamp(allowed.x0, allowed.x1),
            t.y.clamp(allowed.y0, allowed.y1),
        );
        if clamped == t {
            matrix
        } else {
            matrix.with_translation(clamped)
        }
    }
}

/// Allowed translation interval on one axis.
///
/// `origin` is the element's layout position, `lo..hi` its rendered extent
/// relative to the translated origin, and `len` the parent length.
fn axis_range(mode: Contain, origin: f64, lo: f64, hi: f64, len: f64) -> (f64, f64) {
    match mode {
        Contain::Inside => {
            let p = -origin - lo;
            let q = len - origin - hi;
            (p.min(q), p.max(q))
        }
        Contain::Invert => (-origin - hi, len - origin - lo),
        // Unbounded; callers bail out before reaching this.
        Contain::None => (f64::NEG_INFINITY, f64::INFINITY),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect, Size, Vec2};

    use super::{Bounds, Contain};

    fn bounds() -> Bounds {
        // 100x50 element laid out at (20, 10) inside a 400x300 parent.
        Bounds::new(Rect::new(20.0, 10.0, 120.0, 60.0), Size::new(400.0, 300.0))
    }

    #[test]
    fn none_never_clamps() {
        let m = Affine::translate((-5_000.0, 5_000.0));
        assert_eq!(bounds().clamp(Contain::None, m), m);
        assert!(bounds().allowed_translation(Contain::None, m).is_none());
    }

    #[test]
    fn inside_keeps_small_element_within_parent() {
        let b = bounds();
        for t in [(-500.0, -500.0), (500.0, 500.0), (35.0, 12.0)] {
            let m = b.clamp(Contain::Inside, Affine::translate(t));
            let r = b.rendered_rect(m);
            assert!(r.x0 >= -1e-9 && r.x1 <= 400.0 + 1e-9, "x out of parent: {r:?}");
            assert!(r.y0 >= -1e-9 && r.y1 <= 300.0 + 1e-9, "y out of parent: {r:?}");
        }
        // Already inside: untouched.
        let m = Affine::translate((35.0, 12.0));
        assert_eq!(b.clamp(Contain::Inside, m), m);
    }

    #[test]
    fn inside_keeps_large_element_covering_parent() {
        let b = bounds();
        // Scaled by 10 the element is 1000x500, larger than the parent on both axes.
        let m = Affine::new([10.0, 0.0, 0.0, 10.0, 300.0, -900.0]);
        let clamped = b.clamp(Contain::Inside, m);
        let r = b.rendered_rect(clamped);
        assert!(r.x0 <= 1e-9 && r.x1 >= 400.0 - 1e-9, "parent exposed on x: {r:?}");
        assert!(r.y0 <= 1e-9 && r.y1 >= 300.0 - 1e-9, "parent exposed on y: {r:?}");
    }

    #[test]
    fn invert_keeps_some_overlap() {
        let b = bounds();
        let m = b.clamp(Contain::Invert, Affine::translate((10_000.0, -10_000.0)));
        let r = b.rendered_rect(m);
        assert_eq!(r.x0, 400.0);
        assert_eq!(r.y1, 0.0);

        // Free movement inside the overlap range.
        let m = Affine::translate((300.0, 200.0));
        assert_eq!(b.clamp(Contain::Invert, m), m);
    }

    #[test]
    fn scale_is_preserved_by_clamp() {
        let b = bounds();
        let m = Affine::new([2.0, 0.0, 0.0, 0.5, -1_000.0, 0.0]);
        let clamped = b.clamp(Contain::Inside, m);
        let [a, _, _, d, _, _] = clamped.as_coeffs();
        assert_eq!((a, d), (2.0, 0.5));
        assert_eq!(clamped.translation(), Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn degenerate_parent_disables_clamping() {
        let b = Bounds::new(Rect::new(0.0, 0.0, 10.0, 10.0), Size::ZERO);
        let m = Affine::translate((99.0, 99.0));
        assert!(b.is_degenerate());
        assert_eq!(b.clamp(Contain::Inside, m), m);
    }
}
