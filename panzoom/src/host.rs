// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use kurbo::{Affine, Rect, Size};
use panzoom_transform::ScaleLimits;

use crate::options::Transition;

/// The element a [`PanZoom`](crate::PanZoom) controller transforms.
///
/// A host adapts one concrete rendering surface (a DOM element, an SVG node,
/// a retained scene node, …). The controller reads geometry from it on demand
/// and pushes every new matrix to it. The optional hooks default to no-ops,
/// so hosts without a cursor or zoom range control only implement the
/// required methods.
pub trait Host {
    /// Untransformed layout box of the element, in parent coordinates.
    fn element_rect(&self) -> Rect;

    /// Size of the element's parent.
    fn parent_size(&self) -> Size;

    /// Applies `matrix` to the element, animated by `transition` if given.
    fn apply_transform(&mut self, matrix: &Affine, transition: Option<&Transition>);

    /// Transform the element already carries, used as the reset target when
    /// no start transform is configured.
    fn initial_transform(&self) -> Option<Affine> {
        None
    }

    /// Shows `cursor` over the element, or restores the neutral cursor.
    fn set_cursor(&mut self, cursor: Option<&str>) {
        let _ = cursor;
    }

    /// Drops any in-flight transition styling.
    fn cancel_transition(&mut self) {}

    /// Configures a bound zoom range input.
    fn configure_range(&mut self, limits: ScaleLimits, step: f64) {
        let _ = (limits, step);
    }

    /// Moves a bound zoom range input to `scale`.
    fn set_range_value(&mut self, scale: f64) {
        let _ = scale;
    }
}

impl<H: Host + ?Sized> Host for &mut H {
    fn element_rect(&self) -> Rect {
        (**self).element_rect()
    }

    fn parent_size(&self) -> Size {
        (**self).parent_size()
    }

    fn apply_transform(&mut self, matrix: &Affine, transition: Option<&Transition>) {
        (**self).apply_transform(matrix, transition);
    }

    fn initial_transform(&self) -> Option<Affine> {
        (**self).initial_transform()
    }

    fn set_cursor(&mut self, cursor: Option<&str>) {
        (**self).set_cursor(cursor);
    }

    fn cancel_transition(&mut self) {
        (**self).cancel_transition();
    }

    fn configure_range(&mut self, limits: ScaleLimits, step: f64) {
        (**self).configure_range(limits, step);
    }

    fn set_range_value(&mut self, scale: f64) {
        (**self).set_range_value(scale);
    }
}

/// State of a zoom range input as seen by a [`HeadlessHost`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeState {
    /// Lower end of the range.
    pub min: f64,
    /// Upper end of the range.
    pub max: f64,
    /// Step between values.
    pub step: f64,
    /// Current value.
    pub value: f64,
}

/// In-memory [`Host`] that records what the controller gives it.
///
/// Useful for tests, benchmarks, and embedders that read the matrix back out
/// rather than rendering it.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessHost {
    /// Untransformed layout box of the element, in parent coordinates.
    pub element: Rect,
    /// Size of the parent.
    pub parent: Size,
    /// Transform the element starts with.
    pub initial: Option<Affine>,
    /// Last transform applied.
    pub transform: Affine,
    /// Transition the last transform was applied with.
    pub transition: Option<Transition>,
    /// Current cursor styling.
    pub cursor: Option<String>,
    /// Zoom range input, once configured.
    pub range: Option<RangeState>,
    /// Number of transforms applied so far.
    pub applied: usize,
}

impl HeadlessHost {
    /// Creates a host for an element with layout box `element` inside a
    /// parent of size `parent`.
    #[must_use]
    pub fn new(element: Rect, parent: Size) -> Self {
        Self {
            element,
            parent,
            initial: None,
            transform: Affine::IDENTITY,
            transition: None,
            cursor: None,
            range: None,
            applied: 0,
        }
    }

    /// Sets the transform the element starts with.
    #[must_use]
    pub fn with_initial_transform(mut self, matrix: Affine) -> Self {
        self.initial = Some(matrix);
        self.transform = matrix;
        self
    }
}

impl Host for HeadlessHost {
    fn element_rect(&self) -> Rect {
        self.element
    }

    fn parent_size(&self) -> Size {
        self.parent
    }

    fn apply_transform(&mut self, matrix: &Affine, transition: Option<&Transition>) {
        self.transform = *matrix;
        self.transition = transition.cloned();
        self.applied += 1;
    }

    fn initial_transform(&self) -> Option<Affine> {
        self.initial
    }

    fn set_cursor(&mut self, cursor: Option<&str>) {
        self.cursor = cursor.map(ToString::to_string);
    }

    fn cancel_transition(&mut self) {
        self.transition = None;
    }

    fn configure_range(&mut self, limits: ScaleLimits, step: f64) {
        let value = self.range.map_or(1.0, |r| r.value);
        self.range = Some(RangeState {
            min: limits.min(),
            max: limits.max(),
            step,
            value,
        });
    }

    fn set_range_value(&mut self, scale: f64) {
        if let Some(range) = self.range.as_mut() {
            range.value = scale;
        }
    }
}
