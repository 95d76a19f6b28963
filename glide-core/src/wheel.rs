//! Wheel input adapter.
//!
//! Translates normalized wheel deltas into either continuous track movement
//! (follow mode) or discrete slide steps (paginated mode). The adapter is a
//! pure state machine: it reads a narrow context snapshot and returns the
//! action for the orchestrator to execute, which keeps it testable without
//! a snap instance.

use std::time::{Duration, Instant};

use glide_contracts::units::Axis;
use glide_contracts::wheel::{WheelDeltaMode, WheelInput};

use crate::config::{SnapConfig, WheelThrottle};

/// Pixels one wheel "line" is worth.
const LINE_PIXELS: f32 = 16.0;

/// Facts about the instance the adapter needs for one event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WheelCtx {
    /// A programmatic transition is currently in flight.
    pub transitioning: bool,
    /// Container span along the scroll axis (page-delta normalization).
    pub container: f32,
    /// A visible oversized slide still has internal travel left; paginated
    /// mode degrades to follow mode so its content stays reachable.
    pub oversized_scrollable: bool,
}

/// What the orchestrator should do with one wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum WheelAction {
    None,
    /// Cancel transitions, `iterate_target(delta)`, `clamp_target()`.
    Follow { delta: f32 },
    /// Trigger one `next()` (`+1`) or `prev()` (`-1`).
    Step { dir: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WheelResponse {
    /// This event opened a new wheel gesture (emit `WheelStart`).
    pub started: bool,
    pub action: WheelAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WheelState {
    Idle,
    /// Wheeling since the stored instant of the last event.
    Wheeling { last_event: Instant },
}

/// The wheel state machine: idle → wheeling → idle, with a trailing
/// debounce ending the gesture.
#[derive(Debug, Clone)]
pub(crate) struct WheelAdapter {
    state: WheelState,
    /// Paginated-mode delta accumulator.
    accumulated: f32,
    /// Wall-clock throttle anchor for paginated steps.
    last_step_at: Option<Instant>,
}

impl Default for WheelAdapter {
    fn default() -> Self {
        Self {
            state: WheelState::Idle,
            accumulated: 0.0,
            last_step_at: None,
        }
    }
}

impl WheelAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_wheeling(&self) -> bool {
        matches!(self.state, WheelState::Wheeling { .. })
    }

    /// Normalize a raw event to signed pixels along the effective axis.
    fn normalize(input: &WheelInput, cfg: &SnapConfig, container: f32) -> f32 {
        let unit = match input.mode {
            WheelDeltaMode::Pixel => 1.0,
            WheelDeltaMode::Line => LINE_PIXELS,
            WheelDeltaMode::Page => container.max(1.0),
        };
        let axis = cfg.wheel_axis.unwrap_or({
            // Auto: dominant component wins.
            if input.delta_x.abs() > input.delta_y.abs() {
                Axis::X
            } else {
                Axis::Y
            }
        });
        axis.of_xy(input.delta_x, input.delta_y) * unit
    }

    /// Whether a paginated step is currently blocked by the throttle.
    fn throttled(&self, cfg: &SnapConfig, ctx: &WheelCtx, now: Instant) -> bool {
        match cfg.wheel_throttle {
            WheelThrottle::Auto => ctx.transitioning,
            WheelThrottle::Ms(ms) => self.last_step_at.is_some_and(|at| {
                now.saturating_duration_since(at) < Duration::from_millis(ms)
            }),
        }
    }

    /// Process one wheel event.
    pub fn handle(
        &mut self,
        input: WheelInput,
        cfg: &SnapConfig,
        ctx: WheelCtx,
    ) -> WheelResponse {
        if !cfg.wheel {
            return WheelResponse {
                started: false,
                action: WheelAction::None,
            };
        }
        let started = !self.is_wheeling();
        self.state = WheelState::Wheeling {
            last_event: input.now,
        };

        let normalized = Self::normalize(&input, cfg, ctx.container);
        if normalized == 0.0 {
            return WheelResponse {
                started,
                action: WheelAction::None,
            };
        }

        // Continuous mode, or a partially scrolled oversized slide under the
        // pointer in paginated mode.
        if cfg.follow_wheel || ctx.oversized_scrollable {
            return WheelResponse {
                started,
                action: WheelAction::Follow {
                    delta: normalized * cfg.wheel_speed,
                },
            };
        }

        // Paginated mode: accumulate, then fire exactly one step per
        // threshold crossing.
        if self.throttled(cfg, &ctx, input.now) {
            return WheelResponse {
                started,
                action: WheelAction::None,
            };
        }
        self.accumulated += normalized * cfg.wheel_speed;
        if self.accumulated.abs() >= cfg.wheel_no_follow_threshold {
            // Direction = sign of the speed-scaled accumulated delta.
            let dir = if self.accumulated >= 0.0 { 1 } else { -1 };
            self.accumulated = 0.0;
            self.last_step_at = Some(input.now);
            return WheelResponse {
                started,
                action: WheelAction::Step { dir },
            };
        }
        WheelResponse {
            started,
            action: WheelAction::None,
        }
    }

    /// Advance the trailing debounce. Returns true exactly once per gesture
    /// when the silence window elapses (emit `WheelEnd`, maybe stick).
    pub fn on_frame(&mut self, now: Instant, cfg: &SnapConfig) -> bool {
        let WheelState::Wheeling { last_event } = self.state else {
            return false;
        };
        if now.saturating_duration_since(last_event)
            >= Duration::from_millis(cfg.wheel_debounce_ms)
        {
            self.state = WheelState::Idle;
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    /// Forget any in-progress accumulation (destroy path).
    pub fn reset(&mut self) {
        self.state = WheelState::Idle;
        self.accumulated = 0.0;
        self.last_step_at = None;
    }
}
