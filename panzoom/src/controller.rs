// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Affine, Point, Vec2};
use panzoom_gesture::{GestureDelta, GestureSession, GestureState};
use panzoom_transform::{
    Bounds, Contain, format_components, parse_transform, scale_of, to_css, with_scale, zoom_about,
};

use crate::event::{EventKinds, ListenerId, Listeners, PanZoomEvent};
use crate::host::Host;
use crate::options::Options;

/// Target of a zoom operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zoom {
    /// Set the scale to this value, subject to the scale limits.
    To(f64),
    /// Increase the scale by the configured increment.
    In,
    /// Decrease the scale by the configured increment.
    Out,
}

/// Per-call options for [`PanZoom::zoom_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomOptions {
    /// Point to keep fixed, in the element's untransformed frame.
    ///
    /// Ignored while panning is disabled.
    pub focal: Option<Point>,
    /// Independent value for the `d` component. Defaults to the new scale,
    /// with the sign of the current `d`.
    pub d_value: Option<f64>,
    /// Step for [`Zoom::In`]/[`Zoom::Out`] instead of the configured one.
    pub increment: Option<f64>,
    /// Whether to animate. Defaults to `true` for stepped zooms and `false`
    /// for [`Zoom::To`].
    pub animate: Option<bool>,
    /// Suppress the [`PanZoomEvent::Zoom`] notification.
    pub silent: bool,
    /// Zoom from this matrix instead of the current one.
    pub matrix: Option<Affine>,
    /// Leave a bound zoom range input alone.
    pub skip_range: bool,
}

/// Per-call options for [`PanZoom::pan_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanOptions {
    /// Treat the coordinates as a delta added to the current translation
    /// rather than the new translation.
    pub relative: bool,
    /// Suppress the [`PanZoomEvent::Pan`] notification.
    pub silent: bool,
    /// Whether to animate.
    pub animate: bool,
    /// Pan from this matrix instead of the current one.
    pub matrix: Option<Affine>,
}

/// Per-call options for [`PanZoom::set_matrix_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SetMatrixOptions {
    /// Whether to animate.
    pub animate: bool,
    /// Suppress the [`PanZoomEvent::Change`] notification.
    pub silent: bool,
    /// Containment to apply instead of the configured one.
    ///
    /// `Some(Contain::None)` bypasses containment for this call.
    pub contain: Option<Contain>,
    /// Move a bound zoom range input to the new scale.
    pub range: bool,
}

/// Per-call options for [`PanZoom::reset_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetOptions {
    /// Whether to animate. Default `true`.
    pub animate: bool,
    /// Suppress the [`PanZoomEvent::Reset`] notification.
    pub silent: bool,
}

impl Default for ResetOptions {
    fn default() -> Self {
        Self {
            animate: true,
            silent: false,
        }
    }
}

/// Pan/zoom controller for one element.
///
/// `PanZoom` owns the element's transform matrix and is the only thing that
/// changes it. Gestures, buttons, and range inputs are wired to it by the
/// caller; every change is pushed to the [`Host`] and announced to listeners
/// before the operation returns.
///
/// While a controller is [disabled](Self::disable), every mutating operation
/// is a no-op that returns the current matrix.
#[derive(Debug)]
pub struct PanZoom<H> {
    host: H,
    options: Options,
    matrix: Affine,
    fallback_origin: Affine,
    gesture: GestureState,
    listeners: Listeners,
    disabled: bool,
}

impl<H: Host> PanZoom<H> {
    /// Creates a controller for `host`.
    ///
    /// The initial matrix is the configured start transform, or the host's
    /// initial transform, or identity. It is applied to the host without
    /// animation and without a change notification.
    pub fn new(host: H, options: Options) -> Self {
        let fallback_origin = host
            .initial_transform()
            .filter(|m| m.is_finite())
            .unwrap_or(Affine::IDENTITY);
        let mut pz = Self {
            host,
            options: options.normalized(),
            matrix: fallback_origin,
            fallback_origin,
            gesture: GestureState::default(),
            listeners: Listeners::new(),
            disabled: false,
        };
        pz.refresh_host_style();
        let origin = pz.origin();
        pz.set_matrix_with(
            origin,
            SetMatrixOptions {
                silent: true,
                range: true,
                ..SetMatrixOptions::default()
            },
        );
        pz
    }

    /// The host this controller drives.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for example to update its geometry.
    ///
    /// Changes are picked up by the next operation.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The options are normalized first. Scale limits and containment are
    /// re-applied to the current matrix without notifications, and host
    /// styling is refreshed.
    pub fn set_options(&mut self, options: Options) {
        self.options = options.normalized();
        if self.options.disable_pan {
            self.end_move();
        }
        self.refresh_host_style();
        let current = self.matrix;
        self.set_matrix_with(
            current,
            SetMatrixOptions {
                silent: true,
                range: true,
                ..SetMatrixOptions::default()
            },
        );
    }

    /// Edits a copy of the options and applies it with
    /// [`set_options`](Self::set_options).
    pub fn update_options(&mut self, edit: impl FnOnce(&mut Options)) {
        let mut options = self.options.clone();
        edit(&mut options);
        self.set_options(options);
    }

    /// Registers `callback` for the notification kinds in `kinds`.
    pub fn on<F>(&mut self, kinds: EventKinds, callback: F) -> ListenerId
    where
        F: FnMut(&PanZoomEvent<'_>) + 'static,
    {
        self.listeners.add(kinds, callback)
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Registers `callback` for [`PanZoomEvent::Start`].
    pub fn on_start(&mut self, callback: impl FnMut(&PanZoomEvent<'_>) + 'static) -> ListenerId {
        self.on(EventKinds::START, callback)
    }

    /// Registers `callback` for [`PanZoomEvent::End`].
    pub fn on_end(&mut self, callback: impl FnMut(&PanZoomEvent<'_>) + 'static) -> ListenerId {
        self.on(EventKinds::END, callback)
    }

    /// Registers `callback` for [`PanZoomEvent::Change`].
    pub fn on_change(&mut self, callback: impl FnMut(&PanZoomEvent<'_>) + 'static) -> ListenerId {
        self.on(EventKinds::CHANGE, callback)
    }

    /// Registers `callback` for [`PanZoomEvent::Zoom`].
    pub fn on_zoom(&mut self, callback: impl FnMut(&PanZoomEvent<'_>) + 'static) -> ListenerId {
        self.on(EventKinds::ZOOM, callback)
    }

    /// Registers `callback` for [`PanZoomEvent::Pan`].
    pub fn on_pan(&mut self, callback: impl FnMut(&PanZoomEvent<'_>) + 'static) -> ListenerId {
        self.on(EventKinds::PAN, callback)
    }

    /// Registers `callback` for [`PanZoomEvent::Reset`].
    pub fn on_reset(&mut self, callback: impl FnMut(&PanZoomEvent<'_>) + 'static) -> ListenerId {
        self.on(EventKinds::RESET, callback)
    }

    /// Current matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Current `a` component.
    #[must_use]
    pub fn scale(&self) -> f64 {
        scale_of(self.matrix).0
    }

    /// Current matrix as formatted numbers, in `[a, b, c, d, e, f]` order.
    #[must_use]
    pub fn get_matrix(&self) -> [String; 6] {
        format_components(&self.matrix)
    }

    /// Current matrix as `matrix(a, b, c, d, e, f)`.
    #[must_use]
    pub fn transform_string(&self) -> String {
        to_css(&self.matrix)
    }

    /// Matrix restored by [`reset`](Self::reset).
    #[must_use]
    pub fn origin(&self) -> Affine {
        self.options.start_transform.unwrap_or(self.fallback_origin)
    }

    /// Replaces the matrix, with containment and a change notification.
    pub fn set_matrix(&mut self, matrix: Affine) -> Affine {
        self.set_matrix_with(matrix, SetMatrixOptions::default())
    }

    /// Replaces the matrix from its textual form.
    ///
    /// Text that does not parse is treated as identity.
    pub fn set_matrix_str(&mut self, text: &str) -> Affine {
        self.set_matrix_str_with(text, SetMatrixOptions::default())
    }

    /// [`set_matrix_str`](Self::set_matrix_str) with explicit options.
    pub fn set_matrix_str_with(&mut self, text: &str, opts: SetMatrixOptions) -> Affine {
        let matrix = parse_transform(text).unwrap_or_else(|err| {
            log::warn!("unparsable transform {text:?} ({err}), using identity");
            Affine::IDENTITY
        });
        self.set_matrix_with(matrix, opts)
    }

    /// Replaces the matrix.
    ///
    /// Scale limits always apply; containment applies unless overridden by
    /// `opts.contain`. Returns the matrix actually applied. Non-finite input
    /// is ignored.
    pub fn set_matrix_with(&mut self, matrix: Affine, opts: SetMatrixOptions) -> Affine {
        if self.disabled {
            return self.matrix;
        }
        if !matrix.is_finite() {
            log::debug!("ignoring non-finite matrix {matrix:?}");
            return self.matrix;
        }
        let contain = opts.contain.unwrap_or(self.options.contain);
        let matrix = self.constrain(matrix, contain);
        self.matrix = matrix;

        let transition = if opts.animate {
            self.options.animation()
        } else {
            None
        };
        self.host.apply_transform(&matrix, transition.as_ref());
        if opts.range {
            self.host.set_range_value(scale_of(matrix).0);
        }
        if !opts.silent {
            self.listeners.emit(&PanZoomEvent::Change { matrix });
        }
        matrix
    }

    /// Pans by `(dx, dy)`.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Affine {
        self.pan_with(
            dx,
            dy,
            PanOptions {
                relative: true,
                ..PanOptions::default()
            },
        )
    }

    /// Pans to the translation `(x, y)`.
    pub fn pan_to(&mut self, x: f64, y: f64) -> Affine {
        self.pan_with(x, y, PanOptions::default())
    }

    /// Sets the translation.
    ///
    /// `(x, y)` is the new translation, or a delta when `opts.relative` is
    /// set. Axes locked by `disable_x_axis`/`disable_y_axis` keep their
    /// current value. Emits [`PanZoomEvent::Change`] and, unless silent,
    /// [`PanZoomEvent::Pan`] with the resulting translation.
    pub fn pan_with(&mut self, x: f64, y: f64, opts: PanOptions) -> Affine {
        if self.disabled || self.options.disable_pan {
            return self.matrix;
        }
        if !(x.is_finite() && y.is_finite()) {
            log::debug!("ignoring non-finite pan ({x}, {y})");
            return self.matrix;
        }
        let base = opts.matrix.unwrap_or(self.matrix);
        let current = base.translation();
        let mut target = if opts.relative {
            current + Vec2::new(x, y)
        } else {
            Vec2::new(x, y)
        };
        if self.options.disable_x_axis {
            target.x = current.x;
        }
        if self.options.disable_y_axis {
            target.y = current.y;
        }

        let applied = self.set_matrix_with(
            base.with_translation(target),
            SetMatrixOptions {
                animate: opts.animate,
                ..SetMatrixOptions::default()
            },
        );
        if !opts.silent {
            let t = applied.translation();
            self.listeners.emit(&PanZoomEvent::Pan {
                matrix: applied,
                x: t.x,
                y: t.y,
            });
        }
        applied
    }

    /// Zooms with default options.
    pub fn zoom(&mut self, zoom: Zoom) -> Affine {
        self.zoom_with(zoom, ZoomOptions::default())
    }

    /// Zooms in by one increment, animated. Suited to a "zoom in" button.
    pub fn zoom_in(&mut self) -> Affine {
        self.zoom(Zoom::In)
    }

    /// Zooms out by one increment, animated. Suited to a "zoom out" button.
    pub fn zoom_out(&mut self) -> Affine {
        self.zoom(Zoom::Out)
    }

    /// Zooms keeping `point`, in parent coordinates, fixed on screen.
    ///
    /// Not animated. Suited to wheel input.
    pub fn zoom_at(&mut self, zoom: Zoom, point: Point) -> Affine {
        let focal = point - self.host.element_rect().origin().to_vec2();
        self.zoom_with(
            zoom,
            ZoomOptions {
                focal: Some(focal),
                animate: Some(false),
                ..ZoomOptions::default()
            },
        )
    }

    /// Applies a value from a bound zoom range input.
    pub fn zoom_from_range(&mut self, value: f64) -> Affine {
        self.zoom_with(
            Zoom::To(value),
            ZoomOptions {
                skip_range: true,
                ..ZoomOptions::default()
            },
        )
    }

    /// Sets the scale.
    ///
    /// The new `a` (and `d`) are clamped to the scale limits. With a focal
    /// point the translation is adjusted so that point stays fixed. Emits
    /// [`PanZoomEvent::Change`] and, unless silent, [`PanZoomEvent::Zoom`].
    pub fn zoom_with(&mut self, zoom: Zoom, opts: ZoomOptions) -> Affine {
        if self.disabled || self.options.disable_zoom {
            return self.matrix;
        }
        let base = opts.matrix.unwrap_or(self.matrix);
        let (start_a, start_d) = scale_of(base);
        let increment = opts
            .increment
            .filter(|i| i.is_finite() && *i > 0.0)
            .unwrap_or(self.options.increment);
        let (target, stepped) = match zoom {
            Zoom::To(scale) => (scale, false),
            Zoom::In => (step_scale(start_a, increment), true),
            Zoom::Out => (step_scale(start_a, -increment), true),
        };
        if !target.is_finite() || opts.d_value.is_some_and(|d| !d.is_finite()) {
            log::debug!("ignoring non-finite zoom target {target}");
            return self.matrix;
        }

        let limits = self.options.scale_limits();
        let a = limits.clamp(target);
        let d = limits.clamp(
            opts.d_value
                .unwrap_or(if start_d.is_sign_negative() { -a.abs() } else { a.abs() }),
        );
        let focal = opts
            .focal
            .filter(|p| p.is_finite() && !self.options.disable_pan);
        let zoomed = match focal {
            Some(focal) => zoom_about(base, a, d, focal),
            None => with_scale(base, a, d),
        };

        let applied = self.set_matrix_with(
            zoomed,
            SetMatrixOptions {
                animate: opts.animate.unwrap_or(stepped),
                range: !opts.skip_range,
                ..SetMatrixOptions::default()
            },
        );
        if !opts.silent {
            self.listeners.emit(&PanZoomEvent::Zoom {
                matrix: applied,
                scale: scale_of(applied).0,
            });
        }
        applied
    }

    /// Restores the start transform.
    pub fn reset(&mut self, animate: bool) -> Affine {
        self.reset_with(ResetOptions {
            animate,
            ..ResetOptions::default()
        })
    }

    /// Restores the start transform. Emits [`PanZoomEvent::Change`] and,
    /// unless silent, [`PanZoomEvent::Reset`].
    pub fn reset_with(&mut self, opts: ResetOptions) -> Affine {
        if self.disabled {
            return self.matrix;
        }
        let origin = self.origin();
        let applied = self.set_matrix_with(
            origin,
            SetMatrixOptions {
                animate: opts.animate,
                range: true,
                ..SetMatrixOptions::default()
            },
        );
        if !opts.silent {
            self.listeners
                .emit(&PanZoomEvent::Reset { matrix: applied });
        }
        applied
    }

    /// Restores only the scale of the start transform.
    pub fn reset_zoom(&mut self, animate: bool) -> Affine {
        let (a, d) = scale_of(self.origin());
        self.zoom_with(
            Zoom::To(a),
            ZoomOptions {
                d_value: Some(d),
                animate: Some(animate),
                ..ZoomOptions::default()
            },
        )
    }

    /// Restores only the translation of the start transform.
    pub fn reset_pan(&mut self, animate: bool) -> Affine {
        let t = self.origin().translation();
        self.pan_with(
            t.x,
            t.y,
            PanOptions {
                animate,
                ..PanOptions::default()
            },
        )
    }

    /// Starts a gesture session at `points`, in parent coordinates.
    ///
    /// One point starts a pan, two (or more; extra points are ignored) start
    /// a pinch. A live session is ended first. Returns `false` if the start
    /// was ignored: while disabled or with panning disabled, for empty or
    /// non-finite input, or for a single-pointer start under
    /// `pan_only_when_zoomed` while not zoomed in.
    pub fn start_move(&mut self, points: &[Point]) -> bool {
        if self.disabled || self.options.disable_pan {
            log::debug!("gesture start ignored: panning disabled");
            return false;
        }
        if points.is_empty() || points.iter().any(|p| !p.is_finite()) {
            return false;
        }
        if self.options.pan_only_when_zoomed && points.len() == 1 && self.scale().abs() <= 1.0 {
            log::debug!("gesture start ignored: not zoomed in");
            return false;
        }
        if self.gesture.is_active() {
            self.end_move();
        }

        let matrix = self.matrix;
        self.gesture.start(matrix, points);
        self.host.cancel_transition();
        log::debug!("gesture started with {} pointer(s)", points.len());
        self.listeners
            .emit(&PanZoomEvent::Start { matrix, points });
        true
    }

    /// Feeds the live session new pointer coordinates, in parent coordinates.
    ///
    /// One pointer pans by its offset from the start. Two pointers pan by
    /// the offset of their midpoint and zoom by the change in their spread,
    /// around the current midpoint. No-op while idle.
    pub fn move_to(&mut self, points: &[Point]) {
        if self.disabled || points.iter().any(|p| !p.is_finite()) {
            return;
        }
        let Some(delta) = self.gesture.update(points, self.matrix) else {
            return;
        };
        let Some(base) = self.gesture.session().map(GestureSession::base_matrix) else {
            return;
        };

        match delta {
            GestureDelta::Pan { offset } => {
                let t = base.translation() + offset;
                self.pan_to(t.x, t.y);
            }
            GestureDelta::Pinch {
                offset,
                ratio,
                focal,
            } => {
                let t = base.translation() + offset;
                self.pan_with(
                    t.x,
                    t.y,
                    PanOptions {
                        matrix: Some(base),
                        ..PanOptions::default()
                    },
                );
                if !self.options.disable_zoom {
                    let (a, d) = scale_of(base);
                    let focal = focal - self.host.element_rect().origin().to_vec2();
                    self.zoom_with(
                        Zoom::To(a * ratio),
                        ZoomOptions {
                            focal: Some(focal),
                            d_value: Some(d * ratio),
                            animate: Some(false),
                            ..ZoomOptions::default()
                        },
                    );
                }
            }
        }
    }

    /// Ends the live session. Returns `false` if there was none.
    pub fn end_move(&mut self) -> bool {
        let Some(session) = self.gesture.end() else {
            return false;
        };
        let matrix = self.matrix;
        let changed = session.origin_matrix() != matrix;
        log::debug!("gesture ended, changed: {changed}");
        self.listeners
            .emit(&PanZoomEvent::End { matrix, changed });
        true
    }

    /// Returns `true` while a gesture session is live.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.gesture.is_active()
    }

    /// The live gesture session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.gesture.session()
    }

    /// Returns `true` while the controller is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Re-enables the controller and restores host styling.
    ///
    /// Scale limits and containment are re-applied to the current matrix
    /// without notifications.
    pub fn enable(&mut self) {
        if !self.disabled {
            return;
        }
        self.disabled = false;
        self.refresh_host_style();
        // Options may have changed while disabled.
        let current = self.matrix;
        self.set_matrix_with(
            current,
            SetMatrixOptions {
                silent: true,
                range: true,
                ..SetMatrixOptions::default()
            },
        );
    }

    /// Disables the controller.
    ///
    /// A live session is ended, and the host's cursor and transition styling
    /// are reset to neutral.
    pub fn disable(&mut self) {
        if self.disabled {
            return;
        }
        self.end_move();
        self.disabled = true;
        self.host.set_cursor(None);
        self.host.cancel_transition();
    }

    /// Tears the controller down and returns its host.
    ///
    /// Listeners are dropped without being notified, any live session is
    /// discarded, and host styling is reset to neutral. The host keeps its
    /// last transform.
    pub fn destroy(mut self) -> H {
        self.listeners.clear();
        self.gesture.end();
        self.host.set_cursor(None);
        self.host.cancel_transition();
        self.host
    }

    fn constrain(&self, matrix: Affine, contain: Contain) -> Affine {
        let matrix = self.options.scale_limits().apply(matrix);
        if contain == Contain::None {
            return matrix;
        }
        let bounds = Bounds::new(self.host.element_rect(), self.host.parent_size());
        let clamped = bounds.clamp(contain, matrix);
        if clamped != matrix {
            log::trace!(
                "contained translation {:?} -> {:?}",
                matrix.translation(),
                clamped.translation()
            );
        }
        clamped
    }

    fn refresh_host_style(&mut self) {
        let cursor = if self.disabled {
            None
        } else {
            self.options.cursor()
        };
        self.host.set_cursor(cursor);
        self.host
            .configure_range(self.options.scale_limits(), self.options.range_step);
    }
}

/// Steps the magnitude of `scale` by `delta`, keeping a flipped axis flipped.
fn step_scale(scale: f64, delta: f64) -> f64 {
    let magnitude = (scale.abs() + delta).max(0.0);
    if scale.is_sign_negative() { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect, Size};

    use super::{PanZoom, Zoom, step_scale};
    use crate::{HeadlessHost, Options};

    fn controller() -> PanZoom<HeadlessHost> {
        let host = HeadlessHost::new(Rect::new(0.0, 0.0, 200.0, 100.0), Size::new(400.0, 300.0));
        PanZoom::new(host, Options::default())
    }

    #[test]
    fn step_keeps_sign_and_floors_at_zero() {
        assert_eq!(step_scale(1.0, 0.5), 1.5);
        assert_eq!(step_scale(-1.0, 0.5), -1.5);
        assert_eq!(step_scale(0.2, -0.5), 0.0);
        assert!(step_scale(-0.3, -0.3).is_sign_negative());
        assert!(step_scale(-0.2, -0.5).is_sign_negative());
    }

    #[test]
    fn new_applies_origin_to_host() {
        let pz = controller();
        assert_eq!(pz.matrix(), Affine::IDENTITY);
        assert_eq!(pz.host().transform, Affine::IDENTITY);
        assert_eq!(pz.host().applied, 1);
        assert_eq!(pz.host().cursor.as_deref(), Some("move"));
        let range = pz.host().range.unwrap();
        assert_eq!((range.min, range.max, range.step, range.value), (0.3, 6.0, 0.05, 1.0));
    }

    #[test]
    fn host_initial_transform_is_reset_target() {
        let initial = Affine::new([2.0, 0.0, 0.0, 2.0, 10.0, 10.0]);
        let host = HeadlessHost::new(Rect::new(0.0, 0.0, 10.0, 10.0), Size::new(100.0, 100.0))
            .with_initial_transform(initial);
        let mut pz = PanZoom::new(host, Options::default());
        assert_eq!(pz.matrix(), initial);

        pz.zoom(Zoom::To(4.0));
        pz.pan_by(5.0, 5.0);
        assert_eq!(pz.reset(false), initial);
    }

    #[test]
    fn animated_zoom_hands_host_a_transition() {
        let mut pz = controller();
        pz.zoom_in();
        assert!(pz.host().transition.is_some());
        pz.zoom(Zoom::To(2.0));
        assert!(pz.host().transition.is_none());
    }
}
