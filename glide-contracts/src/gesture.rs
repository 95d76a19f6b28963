//! Pointer-gesture input contract.
//!
//! Glide does not track pointers itself. The host's gesture primitive feeds
//! normalized events into the engine and receives one command back:
//! cancel any running inertia when the engine needs a clean settle.

use std::fmt::Debug;
use std::time::Instant;

/// A 2D gesture delta with its direction angle (radians, atan2 convention).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureVector {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl GestureVector {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            angle: y.atan2(x),
        }
    }
}

/// Where a gesture currently sits in its inertia lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertiaPhase {
    /// Post-release integration has begun.
    Started,
    /// Inertia ran to completion.
    Ended,
    /// Release velocity was too low for inertia to start.
    Failed,
    /// Inertia was cut short (new touch, explicit cancel).
    Cancelled,
}

/// Normalized gesture stream the host delivers to the engine.
///
/// `step` is the per-event delta since the previous event; `diff` is the
/// cumulative delta since `Start`. Both keep their values during inertia.
#[derive(Debug, Clone, Copy)]
pub enum GestureEvent {
    Start {
        now: Instant,
    },
    Move {
        now: Instant,
        step: GestureVector,
        diff: GestureVector,
    },
    End {
        now: Instant,
        diff: GestureVector,
    },
    Inertia {
        now: Instant,
        phase: InertiaPhase,
    },
}

impl GestureEvent {
    /// Timestamp carried by the event.
    pub fn timestamp(&self) -> Instant {
        match self {
            GestureEvent::Start { now }
            | GestureEvent::Move { now, .. }
            | GestureEvent::End { now, .. }
            | GestureEvent::Inertia { now, .. } => *now,
        }
    }
}

/// Commands the engine issues back to the gesture collaborator.
pub trait GestureControl: Debug {
    /// Abort post-release inertia immediately. Must be a no-op when no
    /// inertia is running.
    fn cancel_inertia(&mut self);

    /// Whether post-release inertia is currently integrating.
    fn inertia_active(&self) -> bool {
        false
    }
}

/// Gesture control stub for hosts without an inertia stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInertia;

impl GestureControl for NoInertia {
    fn cancel_inertia(&mut self) {}
}
