//! The host animation-frame clock.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// One tick of the host's frame loop.
///
/// `now` is the host's wall-clock timestamp for the frame; the engine never
/// samples the clock itself, which keeps gesture/debounce timing
/// deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct FrameTick {
    /// Timestamp of this frame.
    pub now: Instant,
    /// Time elapsed since the previous frame.
    pub delta: Duration,
}

impl FrameTick {
    pub fn new(now: Instant, delta: Duration) -> Self {
        Self { now, delta }
    }

    /// Frame delta in seconds, clamped to a 30 fps floor so a dropped frame
    /// cannot produce a velocity spike.
    pub fn delta_secs_clamped(&self) -> f32 {
        self.delta.as_secs_f32().min(0.033)
    }
}

/// Control surface of the host frame scheduler.
///
/// The engine calls [`FrameClock::play`] whenever input mutates the track
/// target (safe to call every wheel/swipe tick) and [`FrameClock::pause`]
/// once the track has settled and no gesture is in flight.
pub trait FrameClock: Debug {
    fn play(&mut self);
    fn pause(&mut self);
}

/// No-op clock for hosts that run their frame loop unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeRunningClock;

impl FrameClock for FreeRunningClock {
    fn play(&mut self) {}
    fn pause(&mut self) {}
}
