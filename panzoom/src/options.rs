// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use core::time::Duration;

use kurbo::Affine;
use panzoom_transform::{Contain, ParseError, ScaleLimits, parse_transform};

/// Eased transition the host should animate a transform change with.
///
/// Transitions are purely visual: the controller's matrix already holds the
/// target value when the host receives one, and the next operation simply
/// supersedes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Length of the transition.
    pub duration: Duration,
    /// Timing function, in the host's syntax (for example `ease-in-out`).
    pub easing: Cow<'static, str>,
}

/// Configuration of a [`PanZoom`](crate::PanZoom) controller.
///
/// Construct with [`Default`] and struct update syntax or the `with_*`
/// helpers. The controller stores the [`normalized`](Self::normalized) form.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Smallest allowed magnitude of the `a`/`d` scale components. Default `0.3`.
    pub min_scale: f64,
    /// Largest allowed magnitude of the `a`/`d` scale components. Default `6.0`.
    pub max_scale: f64,
    /// Scale step used by [`Zoom::In`](crate::Zoom::In) and
    /// [`Zoom::Out`](crate::Zoom::Out). Default `0.3`.
    pub increment: f64,
    /// Step a bound zoom range input should use. Default `0.05`.
    pub range_step: f64,
    /// Containment policy. Default [`Contain::None`].
    pub contain: Contain,
    /// Whether animated operations hand the host a [`Transition`]. Default `true`.
    pub transition: bool,
    /// Duration of animated operations. Default 200 ms.
    pub duration: Duration,
    /// Easing of animated operations. Default `ease-in-out`.
    pub easing: Cow<'static, str>,
    /// Matrix restored by [`reset`](crate::PanZoom::reset). `None` falls back
    /// to the host's initial transform, or identity.
    pub start_transform: Option<Affine>,
    /// Ignore gestures and [`pan_with`](crate::PanZoom::pan_with). Default `false`.
    pub disable_pan: bool,
    /// Ignore [`zoom`](crate::PanZoom::zoom) and pinch scaling. Default `false`.
    pub disable_zoom: bool,
    /// Keep the horizontal translation fixed while panning. Default `false`.
    pub disable_x_axis: bool,
    /// Keep the vertical translation fixed while panning. Default `false`.
    pub disable_y_axis: bool,
    /// Ignore single-pointer drags unless the element is zoomed in. Default `false`.
    pub pan_only_when_zoomed: bool,
    /// Cursor the host shows over a pannable element. Default `move`; empty
    /// means no cursor styling.
    pub cursor: Cow<'static, str>,
    /// Namespace a host may tag its input bindings with. Default `.panzoom`.
    pub event_namespace: Cow<'static, str>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_scale: 0.3,
            max_scale: 6.0,
            increment: 0.3,
            range_step: 0.05,
            contain: Contain::None,
            transition: true,
            duration: Duration::from_millis(200),
            easing: Cow::Borrowed("ease-in-out"),
            start_transform: None,
            disable_pan: false,
            disable_zoom: false,
            disable_x_axis: false,
            disable_y_axis: false,
            pan_only_when_zoomed: false,
            cursor: Cow::Borrowed("move"),
            event_namespace: Cow::Borrowed(".panzoom"),
        }
    }
}

impl Options {
    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the zoom step.
    #[must_use]
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    /// Sets the containment policy.
    #[must_use]
    pub fn with_contain(mut self, contain: Contain) -> Self {
        self.contain = contain;
        self
    }

    /// Enables or disables animated transitions.
    #[must_use]
    pub fn with_transition(mut self, transition: bool) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the matrix restored by reset.
    #[must_use]
    pub fn with_start_transform(mut self, matrix: Affine) -> Self {
        self.start_transform = Some(matrix);
        self
    }

    /// Sets the matrix restored by reset from its textual form.
    ///
    /// `none` is accepted and means identity.
    pub fn with_start_transform_str(mut self, text: &str) -> Result<Self, ParseError> {
        self.start_transform = Some(parse_transform(text)?);
        Ok(self)
    }

    /// Returns the configured scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.min_scale, self.max_scale)
    }

    /// Returns the transition for animated operations, or `None` when
    /// transitions are off.
    #[must_use]
    pub fn animation(&self) -> Option<Transition> {
        self.transition.then(|| Transition {
            duration: self.duration,
            easing: self.easing.clone(),
        })
    }

    /// Returns the cursor the host should show, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        (!self.disable_pan && !self.cursor.is_empty()).then_some(&*self.cursor)
    }

    /// Returns a copy with unusable values repaired.
    ///
    /// - Non-finite or non-positive scale limits fall back to their defaults,
    ///   and an inverted pair is swapped.
    /// - A non-finite or non-positive `increment` or `range_step` falls back
    ///   to its default.
    /// - A `start_transform` with non-finite components is dropped.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.min_scale) {
            self.min_scale = defaults.min_scale;
        }
        if !usable(self.max_scale) {
            self.max_scale = defaults.max_scale;
        }
        if self.min_scale > self.max_scale {
            core::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        if !usable(self.increment) {
            self.increment = defaults.increment;
        }
        if !usable(self.range_step) {
            self.range_step = defaults.range_step;
        }
        if self.start_transform.is_some_and(|m| !m.is_finite()) {
            log::debug!("dropping non-finite start transform");
            self.start_transform = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Affine;
    use panzoom_transform::{Contain, ParseError};

    use super::Options;

    #[test]
    fn defaults_match_documented_values() {
        let o = Options::default();
        assert_eq!((o.min_scale, o.max_scale), (0.3, 6.0));
        assert_eq!(o.increment, 0.3);
        assert_eq!(o.range_step, 0.05);
        assert_eq!(o.contain, Contain::None);
        assert!(o.transition);
        assert_eq!(o.duration, Duration::from_millis(200));
        assert_eq!(o.easing, "ease-in-out");
        assert_eq!(o.cursor(), Some("move"));
        assert_eq!(o.event_namespace, ".panzoom");
    }

    #[test]
    fn normalized_repairs_values() {
        let o = Options {
            min_scale: 8.0,
            max_scale: 2.0,
            increment: f64::NAN,
            range_step: -1.0,
            start_transform: Some(Affine::new([1.0, 0.0, 0.0, 1.0, f64::INFINITY, 0.0])),
            ..Options::default()
        }
        .normalized();
        assert_eq!((o.min_scale, o.max_scale), (2.0, 8.0));
        assert_eq!(o.increment, 0.3);
        assert_eq!(o.range_step, 0.05);
        assert_eq!(o.start_transform, None);

        let o = Options::default().with_scale_limits(0.0, f64::INFINITY).normalized();
        assert_eq!((o.min_scale, o.max_scale), (0.3, 6.0));
    }

    #[test]
    fn start_transform_from_text() {
        let o = Options::default()
            .with_start_transform_str("matrix(2, 0, 0, 2, 5, 5)")
            .unwrap();
        assert_eq!(
            o.start_transform,
            Some(Affine::new([2.0, 0.0, 0.0, 2.0, 5.0, 5.0]))
        );
        assert_eq!(
            Options::default().with_start_transform_str("2 0 0"),
            Err(ParseError::WrongCount { found: 3 })
        );
    }

    #[test]
    fn animation_follows_transition_flag() {
        let on = Options::default();
        let t = on.animation().unwrap();
        assert_eq!(t.duration, Duration::from_millis(200));
        assert_eq!(t.easing, "ease-in-out");
        assert!(on.with_transition(false).animation().is_none());
    }

    #[test]
    fn no_cursor_when_pan_disabled() {
        let o = Options {
            disable_pan: true,
            ..Options::default()
        };
        assert_eq!(o.cursor(), None);
        let o = Options {
            cursor: "".into(),
            ..Options::default()
        };
        assert_eq!(o.cursor(), None);
    }
}
