// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by a [`PanZoom`](crate::PanZoom) controller.
//!
//! Listeners are registered for a set of [`EventKinds`] and are called
//! synchronously, in registration order, from inside the operation that
//! produced the event. The matrix carried by every event is the controller's
//! matrix after that operation.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point};

bitflags::bitflags! {
    /// Set of notification kinds a listener is interested in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// A gesture session started.
        const START  = 0b0000_0001;
        /// A gesture session ended.
        const END    = 0b0000_0010;
        /// The matrix was replaced.
        const CHANGE = 0b0000_0100;
        /// The scale was set.
        const ZOOM   = 0b0000_1000;
        /// The translation was set.
        const PAN    = 0b0001_0000;
        /// The matrix was reset to its start transform.
        const RESET  = 0b0010_0000;
    }
}

/// A notification from a [`PanZoom`](crate::PanZoom) controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanZoomEvent<'a> {
    /// A gesture session started with the given pointer coordinates.
    Start {
        /// Matrix at the start of the session.
        matrix: Affine,
        /// Pointer coordinates the session started with.
        points: &'a [Point],
    },
    /// A gesture session ended.
    End {
        /// Matrix at the end of the session.
        matrix: Affine,
        /// Whether the matrix differs from the one the session started with.
        changed: bool,
    },
    /// The matrix was replaced.
    Change {
        /// The new matrix.
        matrix: Affine,
    },
    /// The scale was set.
    Zoom {
        /// Matrix after zooming.
        matrix: Affine,
        /// Resulting `a` component.
        scale: f64,
    },
    /// The translation was set.
    Pan {
        /// Matrix after panning.
        matrix: Affine,
        /// Resulting `e` component.
        x: f64,
        /// Resulting `f` component.
        y: f64,
    },
    /// The matrix was reset to its start transform.
    Reset {
        /// The restored matrix.
        matrix: Affine,
    },
}

impl PanZoomEvent<'_> {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKinds {
        match self {
            Self::Start { .. } => EventKinds::START,
            Self::End { .. } => EventKinds::END,
            Self::Change { .. } => EventKinds::CHANGE,
            Self::Zoom { .. } => EventKinds::ZOOM,
            Self::Pan { .. } => EventKinds::PAN,
            Self::Reset { .. } => EventKinds::RESET,
        }
    }

    /// The controller's matrix after the operation that produced this event.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        match self {
            Self::Start { matrix, .. }
            | Self::End { matrix, .. }
            | Self::Change { matrix }
            | Self::Zoom { matrix, .. }
            | Self::Pan { matrix, .. }
            | Self::Reset { matrix } => *matrix,
        }
    }
}

/// Handle identifying a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&PanZoomEvent<'_>)>;

struct Entry {
    id: ListenerId,
    kinds: EventKinds,
    callback: Callback,
}

/// Ordered list of listeners.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|e| (e.id, e.kinds))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Listeners {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for events whose kind is in `kinds`.
    pub fn add<F>(&mut self, kinds: EventKinds, callback: F) -> ListenerId
    where
        F: FnMut(&PanZoomEvent<'_>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kinds,
            callback: Box::new(callback),
        });
        id
    }

    /// Unregisters a listener. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Unregisters every listener.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers `event` to every listener interested in its kind.
    pub fn emit(&mut self, event: &PanZoomEvent<'_>) {
        let kind = event.kind();
        for entry in &mut self.entries {
            if entry.kinds.intersects(kind) {
                (entry.callback)(event);
            }
        }
    }
}
