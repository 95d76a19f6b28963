//! Scalar scroll-position model.
//!
//! `current` is what renders, `target` is what input mutates; the per-frame
//! [`Track::lerp`] step converges one toward the other. Bounds are derived
//! from [`TrackMetrics`] on every read so a resize never leaves stale
//! geometry behind.

/// Distance under which the lerp snaps exactly onto the target.
const SNAP_EPS: f32 = 1e-4;

/// Distance under which convergence is boosted to avoid parking a fraction
/// of a pixel short of the target for many frames.
const BOOST_DISTANCE: f32 = 5.0;

/// Geometry inputs the track derives its bounds from. Updated by the
/// orchestrator whenever slides are attached, detached, or re-measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Container span along the scroll axis.
    pub container: f32,
    /// Trailing static coordinate of the last slide (content span including
    /// inter-slide gaps).
    pub trailing: f32,
    /// Size of the first slide (centered-alignment reference).
    pub first_size: f32,
    /// Size of the last slide.
    pub last_size: f32,
    /// Inter-slide gap in pixels.
    pub gap: f32,
    /// Centered alignment flag.
    pub centered: bool,
    /// Loop flag.
    pub looped: bool,
    /// Elastic edge strength in `[0, 1]`.
    pub edge_friction: f32,
}

/// The scalar position model. Exclusive writer of every slide's `coord`.
#[derive(Debug, Clone, Default)]
pub struct Track {
    current: f32,
    target: f32,
    metrics: TrackMetrics,
}

impl Track {
    pub fn new(metrics: TrackMetrics) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            metrics,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn metrics(&self) -> &TrackMetrics {
        &self.metrics
    }

    /// Replace the derived geometry. Does not move `current`/`target`; the
    /// orchestrator re-derives them from the active slide after a resize.
    pub fn set_metrics(&mut self, metrics: TrackMetrics) {
        self.metrics = metrics;
    }

    /// Lower scroll bound.
    ///
    /// `0` unless centered alignment faces an oversized first slide, in
    /// which case the bound extends by half the size difference so the
    /// slide's leading edge can reach the container's leading edge.
    pub fn min(&self) -> f32 {
        let m = &self.metrics;
        if m.looped {
            return 0.0;
        }
        if m.centered {
            ((m.container - m.first_size) / 2.0).min(0.0)
        } else {
            0.0
        }
    }

    /// Upper scroll bound.
    ///
    /// Non-loop: the last slide's trailing coordinate adjusted for the
    /// container (and, when centered, for the first/last slide sizes),
    /// floored at zero. Loop: one full cycle, the wrap point landing one
    /// gap past the last slide.
    pub fn max(&self) -> f32 {
        let m = &self.metrics;
        if m.trailing <= 0.0 {
            return 0.0;
        }
        if m.looped {
            return m.trailing + m.gap;
        }
        if m.centered {
            let last_start = m.trailing - m.last_size;
            let last_magnet = last_start + (m.last_size - m.first_size) / 2.0;
            let oversize = ((m.last_size - m.container) / 2.0).max(0.0);
            (last_magnet + oversize).max(self.min())
        } else {
            (m.trailing - m.container).max(0.0)
        }
    }

    /// One full loop cycle length. Zero when not looping.
    #[inline]
    pub fn cycle(&self) -> f32 {
        if self.metrics.looped {
            self.max() - self.min()
        } else {
            0.0
        }
    }

    /// Set `current` and `target` instantly, with no interpolation left
    /// over. Used for jumps and loop-wrap corrections.
    pub fn set(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Nudge the target by `delta`. Callers wake the frame clock afterwards.
    pub fn iterate_target(&mut self, delta: f32) {
        self.target += delta;
    }

    /// Overwrite the target directly.
    pub fn set_target(&mut self, value: f32) {
        self.target = value;
    }

    /// Overwrite `current` only (transition tweens drive this together with
    /// [`Track::set_target`]).
    pub fn set_current(&mut self, value: f32) {
        self.current = value;
    }

    /// Clamp the target into `[min, max]`. No-op when looping.
    pub fn clamp_target(&mut self) {
        if self.metrics.looped {
            return;
        }
        self.target = self.target.clamp(self.min(), self.max());
    }

    /// Whether the target sits outside the non-loop bounds.
    pub fn target_out_of_bounds(&self) -> bool {
        if self.metrics.looped {
            return false;
        }
        self.target < self.min() || self.target > self.max()
    }

    /// Edge-resistance-adjusted target: the overshoot beyond a bound is
    /// remapped onto at most one container of slack, compressed by
    /// `1 - edge_friction`, with diminishing response the further the user
    /// pulls. Identity inside the bounds or when looping.
    fn resisted_target(&self) -> f32 {
        let m = &self.metrics;
        if m.looped {
            return self.target;
        }
        let (min, max) = (self.min(), self.max());
        let container = m.container.max(0.0);
        let slack = container * (1.0 - m.edge_friction);
        if self.target > max {
            let over = self.target - max;
            let t = if container > 0.0 {
                (over / container).min(1.0)
            } else {
                0.0
            };
            max + t * slack
        } else if self.target < min {
            let over = min - self.target;
            let t = if container > 0.0 {
                (over / container).min(1.0)
            } else {
                0.0
            };
            min - t * slack
        } else {
            self.target
        }
    }

    /// Per-frame interpolation step: blend `current` toward the (possibly
    /// edge-resisted) target by `factor`, snapping exactly onto it inside
    /// [`SNAP_EPS`] and boosting convergence under [`BOOST_DISTANCE`].
    pub fn lerp(&mut self, factor: f32) {
        let factor = factor.clamp(1e-3, 1.0);
        let goal = self.resisted_target();
        let dist = (goal - self.current).abs();
        if dist <= SNAP_EPS {
            self.current = goal;
            return;
        }
        let factor = if dist < BOOST_DISTANCE {
            let closeness = 1.0 - dist / BOOST_DISTANCE;
            (factor + (1.0 - factor) / 3.0 * closeness).min(1.0)
        } else {
            factor
        };
        self.current += (goal - self.current) * factor;
        if (goal - self.current).abs() <= SNAP_EPS {
            self.current = goal;
        }
    }

    /// Whether `current` has settled exactly on the (resisted) target.
    pub fn is_settled(&self) -> bool {
        (self.resisted_target() - self.current).abs() <= SNAP_EPS
    }

    /// Wrap a coordinate into `[min, max)` with a floor-mod (never a
    /// negative remainder). Identity when not looping or degenerate.
    pub fn loop_coord(&self, coord: f32) -> f32 {
        if !self.metrics.looped {
            return coord;
        }
        let min = self.min();
        let cycle = self.cycle();
        if cycle <= 0.0 {
            return coord;
        }
        min + (coord - min).rem_euclid(cycle)
    }

    /// Track progress: `current / max`. Unbounded when looping (counts whole
    /// cycles traversed); effectively `[0, 1]` otherwise.
    pub fn progress(&self) -> f32 {
        let max = self.max();
        if max <= 0.0 {
            return 0.0;
        }
        self.current / max
    }

    /// Whether the target rests on the lower bound. Always false when
    /// looping.
    pub fn is_start(&self) -> bool {
        !self.metrics.looped && self.target.floor() <= self.min().floor()
    }

    /// Whether the target rests on the upper bound. Always false when
    /// looping.
    pub fn is_end(&self) -> bool {
        !self.metrics.looped && self.target.floor() >= self.max().floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(container: f32, trailing: f32) -> TrackMetrics {
        TrackMetrics {
            container,
            trailing,
            first_size: 100.0,
            last_size: 100.0,
            gap: 0.0,
            centered: false,
            looped: false,
            edge_friction: 0.85,
        }
    }

    #[test]
    fn set_round_trips_exactly() {
        let mut t = Track::new(metrics(300.0, 500.0));
        t.set(123.5);
        assert_eq!(t.current(), 123.5);
        assert_eq!(t.target(), 123.5);
        t.lerp(0.1);
        assert_eq!(t.current(), 123.5);
    }

    #[test]
    fn non_loop_bounds_scenario_a() {
        // 5 x 100px slides, container 300: max = 500 - 300 = 200.
        let t = Track::new(metrics(300.0, 500.0));
        assert_eq!(t.min(), 0.0);
        assert_eq!(t.max(), 200.0);
    }

    #[test]
    fn centered_oversized_first_slide_scenario_e() {
        let m = TrackMetrics {
            container: 300.0,
            trailing: 500.0,
            first_size: 500.0,
            last_size: 500.0,
            gap: 0.0,
            centered: true,
            looped: false,
            edge_friction: 0.85,
        };
        let t = Track::new(m);
        assert_eq!(t.min(), -100.0);
    }

    #[test]
    fn degenerate_geometry_yields_zero_max() {
        let t = Track::new(metrics(0.0, 0.0));
        assert_eq!(t.min(), 0.0);
        assert_eq!(t.max(), 0.0);
        assert_eq!(t.progress(), 0.0);
        assert!(t.is_start());
        assert!(t.is_end());
    }

    #[test]
    fn clamp_target_bounds_non_loop() {
        let mut t = Track::new(metrics(300.0, 500.0));
        t.iterate_target(900.0);
        t.clamp_target();
        assert_eq!(t.target(), 200.0);
        t.iterate_target(-900.0);
        t.clamp_target();
        assert_eq!(t.target(), 0.0);
    }

    #[test]
    fn clamp_target_noop_when_looping() {
        let mut m = metrics(300.0, 500.0);
        m.looped = true;
        let mut t = Track::new(m);
        t.iterate_target(900.0);
        t.clamp_target();
        assert_eq!(t.target(), 900.0);
    }

    #[test]
    fn loop_coord_wraps_into_cycle_and_is_idempotent() {
        let mut m = metrics(300.0, 500.0);
        m.looped = true;
        let t = Track::new(m);
        // cycle = 500
        assert_eq!(t.max(), 500.0);
        for x in [-750.0, -1.0, 0.0, 250.0, 499.9, 500.0, 1234.5] {
            let w = t.loop_coord(x);
            assert!((0.0..500.0).contains(&w), "wrapped {x} -> {w}");
            assert_eq!(t.loop_coord(w), w);
        }
    }

    #[test]
    fn lerp_converges_and_snaps_exact() {
        let mut t = Track::new(metrics(300.0, 500.0));
        t.set_target(150.0);
        for _ in 0..400 {
            t.lerp(0.1);
        }
        assert_eq!(t.current(), 150.0);
        assert!(t.is_settled());
    }

    #[test]
    fn edge_resistance_compresses_overshoot() {
        let mut t = Track::new(metrics(300.0, 500.0));
        // Pull one full container beyond max.
        t.set_target(500.0);
        for _ in 0..600 {
            t.lerp(0.2);
        }
        // Slack = container * (1 - 0.85) = 45px.
        assert!(t.current() > 200.0);
        assert!(t.current() <= 245.0 + 1e-3);
        // Clamping the target lets it converge back inside the bounds.
        t.clamp_target();
        for _ in 0..600 {
            t.lerp(0.2);
        }
        assert_eq!(t.current(), 200.0);
    }

    #[test]
    fn is_start_end_flags() {
        let mut t = Track::new(metrics(300.0, 500.0));
        assert!(t.is_start());
        assert!(!t.is_end());
        t.set(200.0);
        assert!(t.is_end());
        let mut m = metrics(300.0, 500.0);
        m.looped = true;
        let mut tl = Track::new(m);
        tl.set(0.0);
        assert!(!tl.is_start());
        assert!(!tl.is_end());
    }
}
