// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Transform: matrix math for pan/zoom surfaces.
//!
//! This crate holds the arithmetic behind a pan/zoom controller, kept apart
//! from any gesture handling or rendering host:
//! - Scale limits applied to the `a`/`d` components of a 2D affine matrix.
//! - Zooming around a focal point so that point stays visually fixed.
//! - Containment of a transformed element inside (or overlapping) its parent.
//! - A strict textual codec for `matrix(a, b, c, d, e, f)` style transforms.
//!
//! Matrices are [`kurbo::Affine`] values. Their coefficient order
//! `[a, b, c, d, e, f]` matches the textual form, so `e`/`f` are the
//! translation and `a`/`d` the horizontal/vertical scale.
//!
//! ## Focal zoom
//!
//! ```rust
//! use kurbo::{Affine, Point};
//! use panzoom_transform::zoom_about;
//!
//! let m = Affine::new([1.0, 0.0, 0.0, 1.0, 10.0, 20.0]);
//! let focal = Point::new(100.0, 100.0);
//! let zoomed = zoom_about(m, 2.0, 2.0, focal);
//!
//! // The focal point maps to the same place before and after.
//! let local = m.inverse() * focal;
//! let after = zoomed * local;
//! assert!((after.x - focal.x).abs() < 1e-9);
//! assert!((after.y - focal.y).abs() < 1e-9);
//! ```
//!
//! ## Containment
//!
//! ```rust
//! use kurbo::{Affine, Rect, Size, Vec2};
//! use panzoom_transform::{Bounds, Contain};
//!
//! // A 100x100 element at the top-left of a 400x300 parent.
//! let bounds = Bounds::new(Rect::new(0.0, 0.0, 100.0, 100.0), Size::new(400.0, 300.0));
//! let dragged = Affine::translate((1_000.0, -50.0));
//!
//! let clamped = bounds.clamp(Contain::Inside, dragged);
//! assert_eq!(clamped.translation(), Vec2::new(300.0, 0.0));
//! ```
//!
//! ## Textual transforms
//!
//! ```rust
//! use kurbo::Affine;
//! use panzoom_transform::{format_components, parse_transform};
//!
//! let m = parse_transform("matrix(1.5, 0, 0, 1.5, 10, -10)").unwrap();
//! assert_eq!(format_components(&m), ["1.5", "0", "0", "1.5", "10", "-10"]);
//! assert_eq!(parse_transform("none").unwrap(), Affine::IDENTITY);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod contain;
mod matrix;
mod text;

pub use contain::{Bounds, Contain};
pub use matrix::{ScaleLimits, rendered_extent, scale_of, with_scale, zoom_about};
pub use text::{ParseError, format_component, format_components, parse_transform, to_css};
