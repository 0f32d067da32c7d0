// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom: a headless pan/zoom controller for a single element.
//!
//! A [`PanZoom`] owns the 2D affine matrix of one element and is the only
//! thing that changes it. Input is fed in by the caller:
//!
//! - Button-style zoom with [`PanZoom::zoom_in`] and [`PanZoom::zoom_out`].
//! - Wheel zoom around a pointer with [`PanZoom::zoom_at`].
//! - A zoom range input with [`PanZoom::zoom_from_range`].
//! - Drags and two-finger pinches with [`PanZoom::start_move`],
//!   [`PanZoom::move_to`], and [`PanZoom::end_move`].
//!
//! Every new matrix passes through the scale limits and the containment
//! policy in [`Options`], is pushed to the element's [`Host`], and is
//! announced to listeners as a [`PanZoomEvent`].
//!
//! The arithmetic lives in [`panzoom_transform`] and the pointer tracking in
//! [`panzoom_gesture`]. Both are re-exported here.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use panzoom::{EventKinds, HeadlessHost, Options, PanZoom};
//!
//! let host = HeadlessHost::new(Rect::new(0.0, 0.0, 200.0, 100.0), Size::new(400.0, 300.0));
//! let mut pz = PanZoom::new(host, Options::default());
//! pz.on(EventKinds::ZOOM, |event| {
//!     assert!(event.matrix().as_coeffs()[0] > 1.0);
//! });
//!
//! pz.zoom_in();
//! pz.zoom_in();
//! assert_eq!(pz.get_matrix()[0], "1.6");
//!
//! // Drag the element 30 units to the right.
//! pz.start_move(&[Point::new(10.0, 10.0)]);
//! pz.move_to(&[Point::new(40.0, 10.0)]);
//! pz.end_move();
//! assert_eq!(pz.get_matrix()[4], "30");
//!
//! pz.reset(false);
//! assert_eq!(pz.transform_string(), "matrix(1, 0, 0, 1, 0, 0)");
//! assert_eq!(pz.host().transform, pz.matrix());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod controller;
mod event;
mod host;
mod options;

pub use panzoom_gesture;
pub use panzoom_transform;

pub use controller::{PanOptions, PanZoom, ResetOptions, SetMatrixOptions, Zoom, ZoomOptions};
pub use event::{EventKinds, ListenerId, Listeners, PanZoomEvent};
pub use host::{HeadlessHost, Host, RangeState};
pub use options::{Options, Transition};
pub use panzoom_transform::{Contain, ParseError, ScaleLimits};
