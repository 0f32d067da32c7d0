// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session state: turn pointer coordinates into pan/pinch deltas.
//!
//! ## Usage
//!
//! 1) Start a session with [`GestureState::start`], passing the matrix at the
//!    time of the start and the pointer coordinate(s).
//! 2) On each move, call [`GestureState::update`] to get a [`GestureDelta`]
//!    measured from the session's baseline.
//! 3) End the session with [`GestureState::end`], which hands back the
//!    finished [`GestureSession`].
//!
//! Deltas are totals from the baseline rather than increments from the last
//! move, so applying them to the baseline matrix never accumulates rounding
//! error.
//!
//! When the number of pointers changes mid-gesture (a second finger lands or
//! one lifts), the session is re-based on the current matrix and coordinates,
//! and that update yields no delta.

use kurbo::{Affine, Point, Vec2};
use smallvec::SmallVec;

use crate::pinch::Pinch;

type Points = SmallVec<[Point; 2]>;

/// Movement measured from a session's baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureDelta {
    /// Single pointer: total offset of the pointer since the baseline.
    Pan {
        /// Pointer position minus baseline position.
        offset: Vec2,
    },
    /// Two pointers: midpoint offset plus spread ratio.
    Pinch {
        /// Current midpoint minus baseline midpoint.
        offset: Vec2,
        /// Current pointer distance divided by the baseline distance.
        ///
        /// `1.0` when the baseline distance is degenerate.
        ratio: f64,
        /// Current midpoint, the point to zoom around.
        focal: Point,
    },
}

/// Snapshot taken when a gesture starts.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    origin_matrix: Affine,
    base_matrix: Affine,
    start_points: Points,
    last_points: Points,
    pinch: Option<Pinch>,
}

impl GestureSession {
    /// Creates a session from `matrix` and the initial pointer coordinates.
    ///
    /// Only the first two points are tracked. Returns `None` if `points` is
    /// empty.
    #[must_use]
    pub fn new(matrix: Affine, points: &[Point]) -> Option<Self> {
        let points = tracked(points)?;
        Some(Self {
            origin_matrix: matrix,
            base_matrix: matrix,
            pinch: Pinch::from_slice(&points),
            last_points: points.clone(),
            start_points: points,
        })
    }

    /// Matrix at the time the session started.
    #[must_use]
    pub fn origin_matrix(&self) -> Affine {
        self.origin_matrix
    }

    /// Matrix deltas are measured against.
    ///
    /// Equal to [`origin_matrix`](Self::origin_matrix) until the pointer
    /// count changes.
    #[must_use]
    pub fn base_matrix(&self) -> Affine {
        self.base_matrix
    }

    /// Baseline pointer coordinates.
    #[must_use]
    pub fn start_points(&self) -> &[Point] {
        &self.start_points
    }

    /// Most recent pointer coordinates.
    #[must_use]
    pub fn last_points(&self) -> &[Point] {
        &self.last_points
    }

    /// Number of tracked pointers, `1` or `2`.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.start_points.len()
    }

    /// Baseline pinch geometry for two-pointer sessions.
    #[must_use]
    pub fn pinch(&self) -> Option<Pinch> {
        self.pinch
    }

    /// Returns `true` for two-pointer sessions.
    #[must_use]
    pub fn is_pinch(&self) -> bool {
        self.pinch.is_some()
    }

    /// Measures `points` against the baseline.
    ///
    /// Returns `None` if `points` is empty or holds a different number of
    /// tracked pointers than the baseline.
    #[must_use]
    pub fn delta(&self, points: &[Point]) -> Option<GestureDelta> {
        match (self.pinch, points) {
            (None, [p]) => {
                let start = *self.start_points.first()?;
                Some(GestureDelta::Pan { offset: *p - start })
            }
            (Some(baseline), [a, b, ..]) => {
                let current = Pinch::from_points(*a, *b);
                Some(GestureDelta::Pinch {
                    offset: current.midpoint - baseline.midpoint,
                    ratio: current.ratio_to(&baseline),
                    focal: current.midpoint,
                })
            }
            _ => None,
        }
    }

    fn rebase(&mut self, matrix: Affine, points: Points) {
        self.base_matrix = matrix;
        self.pinch = Pinch::from_slice(&points);
        self.last_points = points.clone();
        self.start_points = points;
    }
}

/// Owns at most one live [`GestureSession`].
#[derive(Clone, Debug, Default)]
pub struct GestureState {
    session: Option<GestureSession>,
}

impl GestureState {
    /// Starts a new session, replacing any live one.
    ///
    /// Returns the replaced session, if there was one. Empty `points` leave
    /// the state untouched and return `None`.
    pub fn start(&mut self, matrix: Affine, points: &[Point]) -> Option<GestureSession> {
        let session = GestureSession::new(matrix, points)?;
        self.session.replace(session)
    }

    /// Updates the live session with new pointer coordinates.
    ///
    /// `current` is the matrix as it stands now; it becomes the new baseline
    /// if the pointer count changed. Returns `None` while idle, for empty
    /// `points`, and for the update that re-bases the session.
    pub fn update(&mut self, points: &[Point], current: Affine) -> Option<GestureDelta> {
        let session = self.session.as_mut()?;
        let tracked = tracked(points)?;
        if tracked.len() != session.pointer_count() {
            session.rebase(current, tracked);
            return None;
        }
        let delta = session.delta(&tracked);
        session.last_points = tracked;
        delta
    }

    /// Ends the live session and returns it.
    pub fn end(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Returns `true` while a session is live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }
}

/// First (up to) two points, or `None` if there are none.
fn tracked(points: &[Point]) -> Option<Points> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().take(2).copied().collect())
}
