//! Swipe/drag input adapter.
//!
//! Wraps the host gesture stream and turns it into track actions. Like the
//! wheel adapter this is a pure state machine: every handler returns the
//! ordered list of actions the orchestrator must execute, so the end-of-
//! gesture branching (flicks, snap-backs, sticky freemode) is testable in
//! isolation.

use std::time::{Duration, Instant};

use glide_contracts::gesture::{GestureEvent, InertiaPhase};

use crate::config::{Freemode, SnapConfig};

/// Facts about the instance the adapter reads per event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SwipeCtx {
    /// Active slide index at the time of the event.
    pub active_index: Option<usize>,
    /// Signed progress of the active slide.
    pub active_progress: f32,
    /// The active slide is larger than the container and still has internal
    /// travel left in the gesture direction.
    pub active_oversized_scrollable: bool,
    /// Track target currently outside the non-loop bounds.
    pub out_of_bounds: bool,
}

/// Ordered instructions for the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SwipeAction {
    CancelTransition,
    /// Toggle pointer events on the interaction layer.
    PointerEvents(bool),
    /// `iterate_target(delta)`; clamp immediately when `clamp` is set
    /// (inertia coasting must not accumulate overshoot).
    Iterate { delta: f32, clamp: bool },
    CancelInertia,
    /// Settle on the nearest magnet.
    Stick,
    /// Step one slide from the gesture's start index.
    Step { dir: i32, base: Option<usize> },
    /// Return to the gesture's start slide.
    SnapBack { base: Option<usize> },
    EmitStart,
    EmitMove,
    EmitEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SwipeState {
    Idle,
    Dragging {
        started_at: Instant,
        start_index: Option<usize>,
        start_progress: f32,
    },
    /// Finger lifted, release inertia still integrating.
    Coasting,
}

#[derive(Debug, Clone)]
pub(crate) struct SwipeAdapter {
    state: SwipeState,
    inertia_active: bool,
}

impl Default for SwipeAdapter {
    fn default() -> Self {
        Self {
            state: SwipeState::Idle,
            inertia_active: false,
        }
    }
}

impl SwipeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SwipeState::Dragging { .. })
    }

    pub fn is_engaged(&self) -> bool {
        !matches!(self.state, SwipeState::Idle) || self.inertia_active
    }

    pub fn reset(&mut self) {
        self.state = SwipeState::Idle;
        self.inertia_active = false;
    }

    /// Process one gesture event into orchestrator actions.
    pub fn handle(
        &mut self,
        event: GestureEvent,
        cfg: &SnapConfig,
        ctx: SwipeCtx,
    ) -> Vec<SwipeAction> {
        if !cfg.swipe {
            return Vec::new();
        }
        match event {
            GestureEvent::Start { now } => self.on_start(now, ctx),
            GestureEvent::Move { step, .. } => self.on_move(step, cfg, ctx),
            GestureEvent::End { now, diff } => self.on_end(now, diff, cfg, ctx),
            GestureEvent::Inertia { phase, .. } => self.on_inertia(phase, cfg),
        }
    }

    fn on_start(
        &mut self,
        now: Instant,
        ctx: SwipeCtx,
    ) -> Vec<SwipeAction> {
        self.state = SwipeState::Dragging {
            started_at: now,
            start_index: ctx.active_index,
            start_progress: ctx.active_progress,
        };
        self.inertia_active = false;
        vec![
            SwipeAction::CancelTransition,
            SwipeAction::PointerEvents(false),
            SwipeAction::EmitStart,
        ]
    }

    fn on_move(
        &mut self,
        step: glide_contracts::gesture::GestureVector,
        cfg: &SnapConfig,
        ctx: SwipeCtx,
    ) -> Vec<SwipeAction> {
        let dragging = self.is_dragging();
        let coasting = matches!(self.state, SwipeState::Coasting);
        if !dragging && !coasting {
            return Vec::new();
        }
        let follows = cfg.follow_swipe || ctx.active_oversized_scrollable;
        if !follows {
            return vec![SwipeAction::EmitMove];
        }
        // Content follows the finger: a negative finger delta advances the
        // track.
        let axis_step = cfg.swipe_axis().of_xy(step.x, step.y);
        let mut delta = -axis_step * cfg.swipe_speed;
        if coasting {
            delta *= cfg.swipe_friction;
        }
        vec![
            SwipeAction::Iterate {
                delta,
                clamp: coasting,
            },
            SwipeAction::EmitMove,
        ]
    }

    fn on_end(
        &mut self,
        now: Instant,
        diff: glide_contracts::gesture::GestureVector,
        cfg: &SnapConfig,
        ctx: SwipeCtx,
    ) -> Vec<SwipeAction> {
        let SwipeState::Dragging {
            started_at,
            start_index,
            start_progress,
        } = self.state
        else {
            return Vec::new();
        };
        // Stay engaged until inertia reports back (or never started).
        self.state = SwipeState::Coasting;

        let mut actions = vec![SwipeAction::PointerEvents(true)];

        let axis_diff =
            cfg.swipe_axis().of_xy(diff.x, diff.y) * cfg.swipe_speed;
        let travel = axis_diff.abs();
        // Finger moving backward along the axis advances to the next slide.
        let dir = if axis_diff < 0.0 { 1 } else { -1 };
        let elapsed = now.saturating_duration_since(started_at);
        let short = elapsed
            < Duration::from_millis(cfg.short_swipes_duration_ms);

        match cfg.freemode {
            Freemode::Free | Freemode::Sticky => {
                if ctx.out_of_bounds {
                    // Inertia would fight the elastic settle back inside the
                    // bounds.
                    actions.push(SwipeAction::CancelInertia);
                    actions.push(SwipeAction::Stick);
                } else if cfg.freemode == Freemode::Sticky
                    && !self.inertia_active
                {
                    actions.push(SwipeAction::Stick);
                }
            }
            Freemode::Off => {
                if ctx.active_oversized_scrollable {
                    // Oversized content keeps its inertia; no snapping.
                } else if !cfg.follow_swipe {
                    if travel < cfg.short_swipes_threshold {
                        actions.push(SwipeAction::SnapBack { base: start_index });
                    } else {
                        actions.push(SwipeAction::Step {
                            dir,
                            base: start_index,
                        });
                    }
                } else if cfg.short_swipes && short {
                    let sign_flipped = ctx.active_progress != 0.0
                        && start_progress != 0.0
                        && ctx.active_progress.signum()
                            != start_progress.signum();
                    let crossed_half = ctx.active_index != start_index;
                    if sign_flipped || crossed_half {
                        // Already over the neighbor's half; settle there.
                        actions.push(SwipeAction::CancelInertia);
                        actions.push(SwipeAction::Stick);
                    } else if travel >= cfg.short_swipes_threshold {
                        actions.push(SwipeAction::CancelInertia);
                        actions.push(SwipeAction::Step {
                            dir,
                            base: start_index,
                        });
                    } else {
                        actions.push(SwipeAction::CancelInertia);
                        actions.push(SwipeAction::SnapBack { base: start_index });
                    }
                } else {
                    // Long follow gesture: settle wherever the track says.
                    actions.push(SwipeAction::Stick);
                }
            }
        }

        actions.push(SwipeAction::EmitEnd);
        actions
    }

    fn on_inertia(
        &mut self,
        phase: InertiaPhase,
        cfg: &SnapConfig,
    ) -> Vec<SwipeAction> {
        match phase {
            InertiaPhase::Started => {
                self.inertia_active = true;
                Vec::new()
            }
            InertiaPhase::Ended
            | InertiaPhase::Failed
            | InertiaPhase::Cancelled => {
                self.inertia_active = false;
                if matches!(self.state, SwipeState::Coasting) {
                    self.state = SwipeState::Idle;
                }
                if cfg.freemode == Freemode::Sticky
                    && phase == InertiaPhase::Ended
                {
                    vec![SwipeAction::Stick]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_contracts::gesture::GestureVector;

    fn ctx() -> SwipeCtx {
        SwipeCtx {
            active_index: Some(1),
            active_progress: 0.0,
            active_oversized_scrollable: false,
            out_of_bounds: false,
        }
    }

    fn start_at(adapter: &mut SwipeAdapter, cfg: &SnapConfig, t0: Instant) {
        let actions =
            adapter.handle(GestureEvent::Start { now: t0 }, cfg, ctx());
        assert_eq!(
            actions,
            vec![
                SwipeAction::CancelTransition,
                SwipeAction::PointerEvents(false),
                SwipeAction::EmitStart,
            ]
        );
    }

    fn end_after(
        adapter: &mut SwipeAdapter,
        cfg: &SnapConfig,
        t0: Instant,
        ms: u64,
        diff_x: f32,
        ctx: SwipeCtx,
    ) -> Vec<SwipeAction> {
        adapter.handle(
            GestureEvent::End {
                now: t0 + Duration::from_millis(ms),
                diff: GestureVector::new(diff_x, 0.0),
            },
            cfg,
            ctx,
        )
    }

    #[test]
    fn move_follows_finger_against_axis() {
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        let actions = s.handle(
            GestureEvent::Move {
                now: t0,
                step: GestureVector::new(-10.0, 0.0),
                diff: GestureVector::new(-10.0, 0.0),
            },
            &cfg,
            ctx(),
        );
        assert_eq!(
            actions,
            vec![
                SwipeAction::Iterate {
                    delta: 10.0,
                    clamp: false
                },
                SwipeAction::EmitMove,
            ]
        );
    }

    #[test]
    fn short_flick_over_threshold_steps_once() {
        // Scenario D: 150ms gesture, 40px travel, threshold 30 -> one step
        // in the swipe's direction.
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        let actions = end_after(&mut s, &cfg, t0, 150, -40.0, ctx());
        assert!(actions.contains(&SwipeAction::Step {
            dir: 1,
            base: Some(1)
        }));
        assert_eq!(
            actions
                .iter()
                .filter(|a| matches!(a, SwipeAction::Step { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn short_flick_under_threshold_snaps_back() {
        // Scenario D second half: 20px travel stays put.
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        let actions = end_after(&mut s, &cfg, t0, 150, -20.0, ctx());
        assert!(actions.contains(&SwipeAction::SnapBack { base: Some(1) }));
        assert!(!actions
            .iter()
            .any(|a| matches!(a, SwipeAction::Step { .. })));
    }

    #[test]
    fn flick_direction_follows_finger_sign() {
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        let actions = end_after(&mut s, &cfg, t0, 100, 40.0, ctx());
        assert!(actions.contains(&SwipeAction::Step {
            dir: -1,
            base: Some(1)
        }));
    }

    #[test]
    fn progress_sign_flip_settles_on_neighbor() {
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        let mut c = ctx();
        c.active_progress = 0.3;
        s.handle(GestureEvent::Start { now: t0 }, &cfg, c);
        let mut after = ctx();
        after.active_progress = -0.2;
        let actions = end_after(&mut s, &cfg, t0, 100, -40.0, after);
        assert!(actions.contains(&SwipeAction::Stick));
        assert!(!actions
            .iter()
            .any(|a| matches!(a, SwipeAction::Step { .. })));
    }

    #[test]
    fn long_follow_gesture_sticks() {
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        let actions = end_after(&mut s, &cfg, t0, 500, -120.0, ctx());
        assert!(actions.contains(&SwipeAction::Stick));
    }

    #[test]
    fn non_follow_long_swipe_steps_on_threshold() {
        let cfg = SnapConfig {
            follow_swipe: false,
            ..Default::default()
        };
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        s.handle(GestureEvent::Start { now: t0 }, &cfg, ctx());
        let actions = end_after(&mut s, &cfg, t0, 500, -45.0, ctx());
        assert!(actions.contains(&SwipeAction::Step {
            dir: 1,
            base: Some(1)
        }));
    }

    #[test]
    fn freemode_out_of_bounds_cancels_inertia_and_sticks() {
        let cfg = SnapConfig {
            freemode: Freemode::Free,
            ..Default::default()
        };
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        s.handle(GestureEvent::Start { now: t0 }, &cfg, ctx());
        let mut oob = ctx();
        oob.out_of_bounds = true;
        let actions = end_after(&mut s, &cfg, t0, 400, -200.0, oob);
        let ci = actions
            .iter()
            .position(|a| *a == SwipeAction::CancelInertia)
            .unwrap();
        let st = actions
            .iter()
            .position(|a| *a == SwipeAction::Stick)
            .unwrap();
        assert!(ci < st);
    }

    #[test]
    fn sticky_freemode_sticks_after_inertia_ends() {
        let cfg = SnapConfig {
            freemode: Freemode::Sticky,
            ..Default::default()
        };
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        s.handle(GestureEvent::Start { now: t0 }, &cfg, ctx());
        s.handle(
            GestureEvent::Inertia {
                now: t0,
                phase: InertiaPhase::Started,
            },
            &cfg,
            ctx(),
        );
        let end_actions = end_after(&mut s, &cfg, t0, 400, -200.0, ctx());
        assert!(!end_actions.contains(&SwipeAction::Stick));
        let actions = s.handle(
            GestureEvent::Inertia {
                now: t0 + Duration::from_millis(900),
                phase: InertiaPhase::Ended,
            },
            &cfg,
            ctx(),
        );
        assert_eq!(actions, vec![SwipeAction::Stick]);
    }

    #[test]
    fn oversized_active_slide_keeps_inertia() {
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        let mut over = ctx();
        over.active_oversized_scrollable = true;
        let actions = end_after(&mut s, &cfg, t0, 100, -60.0, over);
        assert_eq!(
            actions,
            vec![SwipeAction::PointerEvents(true), SwipeAction::EmitEnd]
        );
    }

    #[test]
    fn coasting_moves_clamp_and_apply_friction() {
        let cfg = SnapConfig::default();
        let mut s = SwipeAdapter::new();
        let t0 = Instant::now();
        start_at(&mut s, &cfg, t0);
        end_after(&mut s, &cfg, t0, 400, -120.0, ctx());
        s.handle(
            GestureEvent::Inertia {
                now: t0,
                phase: InertiaPhase::Started,
            },
            &cfg,
            ctx(),
        );
        let actions = s.handle(
            GestureEvent::Move {
                now: t0,
                step: GestureVector::new(-10.0, 0.0),
                diff: GestureVector::new(-130.0, 0.0),
            },
            &cfg,
            ctx(),
        );
        match actions.first() {
            Some(SwipeAction::Iterate { delta, clamp }) => {
                assert!(*clamp);
                assert!((delta - 10.0 * cfg.swipe_friction).abs() < 1e-5);
            }
            other => panic!("unexpected first action: {other:?}"),
        }
    }
}
