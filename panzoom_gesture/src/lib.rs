// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Gesture: state for pan and pinch gestures.
//!
//! This crate tracks what happens between a pointer (or touch) going down and
//! coming back up, and turns the coordinates delivered in between into
//! gesture deltas:
//!
//! - [`session`]: a [`GestureSession`] snapshot taken on start, and the
//!   [`GestureState`] that owns at most one live session.
//! - [`pinch`]: two-pointer geometry (distance and midpoint).
//!
//! It does not listen to input devices and does not own a transform. Callers
//! feed normalized coordinates in and apply the resulting [`GestureDelta`]s to
//! whatever they manage.
//!
//! ## Single-pointer drag
//!
//! ```rust
//! use kurbo::{Affine, Point, Vec2};
//! use panzoom_gesture::{GestureDelta, GestureState};
//!
//! let mut gesture = GestureState::default();
//! gesture.start(Affine::IDENTITY, &[Point::new(10.0, 10.0)]);
//! assert!(gesture.is_active());
//!
//! let delta = gesture.update(&[Point::new(25.0, 5.0)], Affine::IDENTITY);
//! assert_eq!(delta, Some(GestureDelta::Pan { offset: Vec2::new(15.0, -5.0) }));
//!
//! let session = gesture.end().unwrap();
//! assert_eq!(session.origin_matrix(), Affine::IDENTITY);
//! assert!(!gesture.is_active());
//! ```
//!
//! ## Two-pointer pinch
//!
//! ```rust
//! use kurbo::{Affine, Point};
//! use panzoom_gesture::{GestureDelta, GestureState};
//!
//! let mut gesture = GestureState::default();
//! gesture.start(Affine::IDENTITY, &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
//!
//! // Fingers spread to twice the distance around the same midpoint.
//! let delta = gesture
//!     .update(&[Point::new(-50.0, 0.0), Point::new(150.0, 0.0)], Affine::IDENTITY)
//!     .unwrap();
//! let GestureDelta::Pinch { ratio, focal, .. } = delta else { panic!() };
//! assert_eq!(ratio, 2.0);
//! assert_eq!(focal, Point::new(50.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pinch;
pub mod session;

pub use pinch::Pinch;
pub use session::{GestureDelta, GestureSession, GestureState};
