//! Time-based tween for programmatic transitions (`next`/`prev`/`stick`).

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Tween between two track values over a wall-clock duration.
///
/// Cancelable at any point: a user gesture arriving mid-flight calls
/// [`Transition::cancel`] and overwrites the track directly, which is what
/// makes gestures win over queued animations.
#[derive(Debug, Clone)]
pub struct Transition {
    active: bool,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            active: false,
            from: 0.0,
            to: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(350),
            easing: Easing::EaseOut,
        }
    }
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Destination value of the running tween, if any.
    pub fn destination(&self) -> Option<f32> {
        self.active.then_some(self.to)
    }

    pub fn start(
        &mut self,
        from: f32,
        to: f32,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) {
        self.active = true;
        self.from = from;
        self.to = to;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Advance to `now`. Returns the interpolated value while running and
    /// the exact destination on the finishing tick; `None` once inactive.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.to);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        Some(self.from + (self.to - self.from) * self.easing.apply(t))
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}
