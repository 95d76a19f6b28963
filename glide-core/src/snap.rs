//! The snap orchestrator: owns the slide collection, wires the input
//! adapters to the track, and runs the per-frame reconciliation loop.
//!
//! Frame order is fixed and load-bearing: track interpolation, then slide
//! coordinate/progress recomputation, then active-index derivation, then
//! virtual mounting, then parallax, then the `Update` event. Later steps
//! read earlier steps' outputs synchronously.

use std::time::{Duration, Instant};

use glide_contracts::element::{ElementLike, Size};
use glide_contracts::frame::{FrameClock, FrameTick, FreeRunningClock};
use glide_contracts::gesture::{GestureControl, GestureEvent};
use glide_contracts::units::{LengthResolver, PxResolver};
use glide_contracts::wheel::WheelInput;

use crate::config::{Freemode, Gap, SnapConfig};
use crate::error::Result;
use crate::events::{
    CallbackId, Callbacks, EventKind, SlideFrame, SnapEvent, UpdateSnapshot,
};
use crate::keyboard::KeyboardGuard;
use crate::parallax::ParallaxBinding;
use crate::slide::{Slide, SlideIdGen};
use crate::swipe::{SwipeAction, SwipeAdapter, SwipeCtx};
use crate::timeline::Transition;
use crate::track::{Track, TrackMetrics};
use crate::wheel::{WheelAction, WheelAdapter, WheelCtx};

/// A carousel/slider instance.
pub struct Snap {
    cfg: SnapConfig,
    container: Box<dyn ElementLike>,
    resolver: Box<dyn LengthResolver>,
    clock: Box<dyn FrameClock>,
    gesture: Option<Box<dyn GestureControl>>,
    id_gen: SlideIdGen,
    slides: Vec<Slide>,
    track: Track,
    wheel: WheelAdapter,
    swipe: SwipeAdapter,
    keyboard: KeyboardGuard,
    transition: Transition,
    callbacks: Callbacks,
    active_index: Option<usize>,
    container_size: Size,
    gap_px: f32,
    destroyed: bool,
}

impl std::fmt::Debug for Snap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snap")
            .field("slides", &self.slides.len())
            .field("active_index", &self.active_index)
            .field("current", &self.track.current())
            .field("target", &self.track.target())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl Snap {
    /// Build an instance around a container element. The configuration is
    /// validated (and smoothing knobs normalized) up front.
    pub fn new(
        container: Box<dyn ElementLike>,
        cfg: SnapConfig,
    ) -> Result<Self> {
        let cfg = cfg.validate()?;
        let container_size = container.measure();
        let mut snap = Self {
            cfg,
            container,
            resolver: Box::new(PxResolver),
            clock: Box::new(FreeRunningClock),
            gesture: None,
            id_gen: SlideIdGen::new(),
            slides: Vec::new(),
            track: Track::default(),
            wheel: WheelAdapter::new(),
            swipe: SwipeAdapter::new(),
            keyboard: KeyboardGuard::new(true),
            transition: Transition::new(),
            callbacks: Callbacks::new(),
            active_index: None,
            container_size,
            gap_px: 0.0,
            destroyed: false,
        };
        snap.reflow();
        Ok(snap)
    }

    /// Swap in the host CSS-length resolver.
    pub fn with_resolver(
        mut self,
        resolver: Box<dyn LengthResolver>,
    ) -> Self {
        self.resolver = resolver;
        self
    }

    /// Swap in the host frame clock.
    pub fn with_clock(mut self, clock: Box<dyn FrameClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Wire the gesture collaborator's control surface (inertia cancel).
    pub fn with_gesture_control(
        mut self,
        gesture: Box<dyn GestureControl>,
    ) -> Self {
        self.gesture = Some(gesture);
        self
    }

    // ---- accessors -------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &SnapConfig {
        &self.cfg
    }

    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.active_index.and_then(|i| self.slides.get(i))
    }

    /// Container size as last measured.
    #[inline]
    pub fn dom_size(&self) -> Size {
        self.container_size
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    /// Indices of slides larger than the container (internally scrollable).
    pub fn scrollable_slides(&self) -> Vec<usize> {
        let span = self.main_span();
        self.slides
            .iter()
            .filter(|s| s.size() > span)
            .map(Slide::index)
            .collect()
    }

    /// Id generator for constructing slides bound to this instance.
    #[inline]
    pub fn id_gen(&self) -> SlideIdGen {
        self.id_gen.clone()
    }

    // ---- events ----------------------------------------------------------

    /// Subscribe to one event kind. The `Update` kind is the render hook.
    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> CallbackId
    where
        F: FnMut(&SnapEvent) + 'static,
    {
        self.callbacks.on(kind, handler)
    }

    /// Subscribe to every event.
    pub fn on_any<F>(&mut self, handler: F) -> CallbackId
    where
        F: FnMut(&SnapEvent) + 'static,
    {
        self.callbacks.on_any(handler)
    }

    pub fn off(&mut self, id: CallbackId) {
        self.callbacks.off(id);
    }

    // ---- slide management ------------------------------------------------

    /// Attach a slide at the end of the sequence; returns its id.
    pub fn attach(&mut self, mut slide: Slide) -> String {
        let targets = slide
            .element_mut()
            .map(|el| el.parallax_targets())
            .unwrap_or_default();
        for target in targets {
            if let Some(binding) = ParallaxBinding::bind(target) {
                slide.parallax.push(binding);
            }
        }
        let id = slide.id().to_string();
        self.slides.push(slide);
        self.reflow();
        if self.active_index.is_none() {
            self.active_index = Some(0);
        }
        log::debug!("attached slide {id} ({} total)", self.slides.len());
        id
    }

    /// Detach a slide by id, tearing down its host hooks.
    pub fn detach(&mut self, id: &str) -> Option<Slide> {
        let pos = self.slides.iter().position(|s| s.id() == id)?;
        let mut slide = self.slides.remove(pos);
        slide.teardown();
        self.reflow();
        if self.slides.is_empty() {
            self.active_index = None;
        } else if let Some(active) = self.active_index {
            let capped = active.min(self.slides.len() - 1);
            self.active_index =
                Some(if active > pos { active - 1 } else { capped });
        }
        Some(slide)
    }

    // ---- geometry --------------------------------------------------------

    #[inline]
    fn main_span(&self) -> f32 {
        self.cfg.direction.axis().of(self.container_size)
    }

    /// Rendering offset that makes track coordinate 0 the first magnet.
    fn align_offset(&self) -> f32 {
        if self.cfg.centered {
            (self.main_span() - self.first_size()) / 2.0
        } else {
            0.0
        }
    }

    fn first_size(&self) -> f32 {
        self.slides.first().map_or(0.0, Slide::size)
    }

    /// Re-measure everything and rebuild static coordinates and track
    /// metrics. Does not move the track.
    fn reflow(&mut self) {
        self.container_size = self.container.measure();
        let axis = self.cfg.direction.axis();
        self.gap_px = match &self.cfg.gap {
            Gap::None => 0.0,
            Gap::Px(px) => *px,
            Gap::Css(css) => {
                self.resolver.to_pixels(css, self.container_size, axis)
            }
        };
        let mut cursor = 0.0;
        let count = self.slides.len();
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.index = i;
            slide.resolve_size(
                self.container_size,
                axis,
                self.resolver.as_ref(),
            );
            slide.static_coord = cursor;
            cursor += slide.size();
            if i + 1 < count {
                cursor += self.gap_px;
            }
        }
        let trailing = cursor;
        self.track.set_metrics(TrackMetrics {
            container: axis.of(self.container_size),
            trailing,
            first_size: self.slides.first().map_or(0.0, Slide::size),
            last_size: self.slides.last().map_or(0.0, Slide::size),
            gap: self.gap_px,
            centered: self.cfg.centered,
            looped: self.cfg.r#loop,
            edge_friction: self.cfg.edge_friction,
        });
    }

    /// Magnet coordinate of slide `i` before bound clamping.
    fn magnet_raw(&self, i: usize) -> f32 {
        let Some(slide) = self.slides.get(i) else {
            return 0.0;
        };
        if self.cfg.centered {
            slide.static_coord() + (slide.size() - self.first_size()) / 2.0
        } else {
            slide.static_coord()
        }
    }

    /// Settle coordinate of slide `i` under the current alignment mode.
    fn magnet(&self, i: usize) -> f32 {
        let raw = self.magnet_raw(i);
        if self.cfg.r#loop {
            raw
        } else {
            raw.clamp(self.track.min(), self.track.max())
        }
    }

    /// Signed distance from `from` to `to`, loop-wrapped into half a cycle
    /// each way when looping.
    fn signed_distance(&self, from: f32, to: f32) -> f32 {
        let d = to - from;
        let cycle = self.track.cycle();
        if cycle > 0.0 {
            (d + cycle / 2.0).rem_euclid(cycle) - cycle / 2.0
        } else {
            d
        }
    }

    /// Index whose magnet is nearest to a track value; ties go to the lower
    /// index. Zero-size slides are skipped.
    fn nearest_magnet_index(&self, value: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for slide in &self.slides {
            if slide.size() <= 0.0 {
                continue;
            }
            let dist = self
                .signed_distance(value, self.magnet(slide.index()))
                .abs();
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((slide.index(), dist));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Internal scroll range of an oversized slide, in track coordinates.
    fn oversized_range(&self, i: usize) -> Option<(f32, f32)> {
        let slide = self.slides.get(i)?;
        let span = self.main_span();
        if slide.size() <= span {
            return None;
        }
        let extra = slide.size() - span;
        let (start, end) = if self.cfg.centered {
            let m = self.magnet_raw(i);
            (m - extra / 2.0, m + extra / 2.0)
        } else {
            let s = slide.static_coord();
            (s, s + extra)
        };
        Some((start, end))
    }

    /// Whether an oversized slide still has internal travel left toward
    /// `dir` (`0` checks for any position strictly inside the range).
    fn oversized_scrollable(&self, i: usize, dir: f32) -> bool {
        let Some((start, end)) = self.oversized_range(i) else {
            return false;
        };
        let t = self.track.target();
        const EPS: f32 = 0.5;
        if dir > 0.0 {
            t < end - EPS && t >= start - EPS
        } else if dir < 0.0 {
            t > start + EPS && t <= end + EPS
        } else {
            t > start + EPS && t < end - EPS
        }
    }

    fn any_oversized_scrollable(&self, dir: f32) -> bool {
        self.slides
            .iter()
            .filter(|s| s.is_visible())
            .any(|s| self.oversized_scrollable(s.index(), dir))
    }

    // ---- navigation ------------------------------------------------------

    /// Advance one slide. Returns whether the step was accepted.
    pub fn next(&mut self) -> bool {
        self.next_at(Instant::now())
    }

    /// Go back one slide. Returns whether the step was accepted.
    pub fn prev(&mut self) -> bool {
        self.prev_at(Instant::now())
    }

    /// Settle on the nearest magnet.
    pub fn stick(&mut self) {
        self.stick_at(Instant::now());
    }

    /// [`Snap::next`] with an explicit timestamp (deterministic tests,
    /// host-driven loops).
    pub fn next_at(&mut self, now: Instant) -> bool {
        self.step_from(self.nav_base(), 1, now)
    }

    /// [`Snap::prev`] with an explicit timestamp.
    pub fn prev_at(&mut self, now: Instant) -> bool {
        self.step_from(self.nav_base(), -1, now)
    }

    /// [`Snap::stick`] with an explicit timestamp.
    pub fn stick_at(&mut self, now: Instant) {
        let Some(i) = self.nearest_magnet_index(self.track.target()) else {
            return;
        };
        let goal = self.magnet(i);
        let delta = self.signed_distance(self.track.target(), goal);
        let final_value = self.track.target() + delta;
        self.animate_to(final_value, now);
    }

    /// Navigation base: the slide whose magnet is nearest the *target*, so
    /// queued steps compound instead of re-deriving from a mid-flight
    /// `current`.
    fn nav_base(&self) -> Option<usize> {
        self.nearest_magnet_index(self.track.target())
    }

    fn step_from(
        &mut self,
        base: Option<usize>,
        dir: i32,
        now: Instant,
    ) -> bool {
        if self.destroyed || self.slides.is_empty() || dir == 0 {
            return false;
        }
        let Some(base) = base else {
            return false;
        };
        let count = self.slides.len();
        if self.cfg.r#loop {
            let next =
                (base as i64 + dir as i64).rem_euclid(count as i64) as usize;
            let magnet = self.magnet(next);
            let cycle = self.track.cycle();
            // Always travel in the requested direction, never the short way
            // around.
            let raw = magnet - self.track.target();
            let delta = if cycle > 0.0 {
                if dir > 0 {
                    let d = raw.rem_euclid(cycle);
                    if d == 0.0 { cycle } else { d }
                } else {
                    let d = (-raw).rem_euclid(cycle);
                    if d == 0.0 { -cycle } else { -d }
                }
            } else {
                raw
            };
            self.animate_to(self.track.target() + delta, now);
            return true;
        }
        if dir > 0 && self.track.is_end() {
            return false;
        }
        if dir < 0 && self.track.is_start() {
            return false;
        }
        let next = base as i64 + dir as i64;
        if next < 0 || next >= count as i64 {
            return false;
        }
        self.animate_to(self.magnet(next as usize), now);
        true
    }

    /// Drive the track toward `value`: a timed tween when a duration is
    /// configured, otherwise a target write smoothed by the per-frame lerp.
    fn animate_to(&mut self, value: f32, now: Instant) {
        self.transition.cancel();
        let value = if self.cfg.r#loop {
            value
        } else {
            value.clamp(self.track.min(), self.track.max())
        };
        if self.cfg.duration_ms > 0 {
            self.transition.start(
                self.track.current(),
                value,
                now,
                Duration::from_millis(self.cfg.duration_ms),
                self.cfg.easing,
            );
        }
        self.track.set_target(value);
        self.clock.play();
    }

    /// Abort any in-flight programmatic transition, leaving the track where
    /// it is. New gestures call this so they always win over animations.
    pub fn cancel_transition(&mut self) {
        if self.transition.is_active() {
            self.transition.cancel();
            // Target stays wherever the transition was headed; the next
            // input overwrites it anyway.
        }
    }

    // ---- resize ----------------------------------------------------------

    /// Re-measure the container and auto-sized slides and rebuild the
    /// geometry. The previously active slide is preserved: `current` and
    /// `target` are re-derived from its new magnet, never kept as a raw
    /// pixel offset.
    pub fn resize(&mut self, manual: bool) {
        if self.destroyed {
            return;
        }
        let previously_active = self.active_index;
        self.reflow();
        log::debug!(
            "resize (manual: {manual}), container {:?}",
            self.container_size
        );
        if let Some(i) = previously_active {
            if i < self.slides.len() {
                self.transition.cancel();
                self.track.set(self.magnet(i));
            }
        } else {
            self.track.clamp_target();
        }
        self.clock.play();
    }

    // ---- input entry points ----------------------------------------------

    /// Feed one wheel event from the host.
    pub fn handle_wheel(&mut self, input: WheelInput) {
        if self.destroyed || !self.cfg.wheel {
            return;
        }
        // Direction hint for the oversized-slide degrade check.
        let axis = self.cfg.wheel_axis.unwrap_or({
            if input.delta_x.abs() > input.delta_y.abs() {
                glide_contracts::units::Axis::X
            } else {
                glide_contracts::units::Axis::Y
            }
        });
        let hint = axis.of_xy(input.delta_x, input.delta_y)
            * self.cfg.wheel_speed;
        let ctx = WheelCtx {
            transitioning: self.transition.is_active(),
            container: self.main_span(),
            oversized_scrollable: self.any_oversized_scrollable(hint),
        };
        let response = self.wheel.handle(input, &self.cfg, ctx);
        if response.started {
            self.callbacks.emit(&SnapEvent::WheelStart);
        }
        match response.action {
            WheelAction::None => {}
            WheelAction::Follow { delta } => {
                self.cancel_transition();
                self.track.iterate_target(delta);
                self.track.clamp_target();
                self.clock.play();
            }
            WheelAction::Step { dir } => {
                self.step_from(self.nav_base(), dir, input.now);
            }
        }
        self.callbacks.emit(&SnapEvent::Wheel);
    }

    /// Feed one gesture event from the host swipe primitive.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        if self.destroyed || !self.cfg.swipe {
            return;
        }
        let now = event.timestamp();
        let active = self.active_index;
        let ctx = SwipeCtx {
            active_index: active,
            active_progress: self
                .active_slide()
                .map_or(0.0, Slide::progress),
            active_oversized_scrollable: active
                .is_some_and(|i| self.oversized_scrollable(i, 0.0)),
            out_of_bounds: self.track.target_out_of_bounds(),
        };
        let actions = self.swipe.handle(event, &self.cfg, ctx);
        for action in actions {
            match action {
                SwipeAction::CancelTransition => self.cancel_transition(),
                SwipeAction::PointerEvents(enabled) => {
                    self.container.set_pointer_events(enabled);
                }
                SwipeAction::Iterate { delta, clamp } => {
                    self.track.iterate_target(delta);
                    if clamp {
                        self.track.clamp_target();
                    }
                    self.clock.play();
                }
                SwipeAction::CancelInertia => {
                    if let Some(g) = self.gesture.as_mut() {
                        g.cancel_inertia();
                    }
                }
                SwipeAction::Stick => self.stick_at(now),
                SwipeAction::Step { dir, base } => {
                    let base = base.or_else(|| self.nav_base());
                    self.step_from(base, dir, now);
                }
                SwipeAction::SnapBack { base } => {
                    if let Some(i) = base {
                        let goal = self.magnet(i.min(
                            self.slides.len().saturating_sub(1),
                        ));
                        let delta = self
                            .signed_distance(self.track.target(), goal);
                        self.animate_to(self.track.target() + delta, now);
                    } else {
                        self.stick_at(now);
                    }
                }
                SwipeAction::EmitStart => {
                    self.callbacks.emit(&SnapEvent::SwipeStart);
                }
                SwipeAction::EmitMove => {
                    self.callbacks.emit(&SnapEvent::Swipe);
                }
                SwipeAction::EmitEnd => {
                    self.callbacks.emit(&SnapEvent::SwipeEnd);
                }
            }
        }
    }

    /// Velocity-modifier hook for the gesture collaborator: clamp release
    /// velocity so inertia cannot overshoot past the structurally valid
    /// range for the current slide in non-free mode.
    pub fn clamp_gesture_velocity(&self, velocity: f32) -> f32 {
        if self.cfg.freemode.is_free() || self.cfg.r#loop {
            return velocity;
        }
        let span = self
            .active_slide()
            .map_or(self.main_span(), |s| s.size() + self.gap_px);
        if span <= 0.0 {
            return 0.0;
        }
        velocity.clamp(-span, span)
    }

    /// Focus entered the container subtree; undo any native scroll the host
    /// applied.
    pub fn handle_focus_in(&mut self) {
        self.keyboard.on_focus_in(self.container.as_mut());
    }

    // ---- frame loop ------------------------------------------------------

    /// Advance one animation frame. See the module docs for the step order.
    pub fn tick(&mut self, frame: FrameTick) {
        if self.destroyed {
            return;
        }
        // Trailing wheel debounce.
        if self.wheel.on_frame(frame.now, &self.cfg) {
            self.callbacks.emit(&SnapEvent::WheelEnd);
            if self.cfg.stick_on_wheel_end
                && self.cfg.freemode != Freemode::Free
            {
                self.stick_at(frame.now);
            }
        }
        // A coasting swipe with no inertia behind it is over.
        if self.swipe.is_engaged()
            && !self.swipe.is_dragging()
            && !self.inertia_active()
        {
            self.swipe.reset();
        }

        // 1. Track interpolation.
        if let Some(value) = self.transition.tick(frame.now) {
            self.track.set_current(value);
        } else if !self.transition.is_active() {
            self.track.lerp(self.frame_lerp(frame));
        }
        self.wrap_loop();

        // 2-3. Slide coordinates, progress, active index.
        self.reconcile();

        // 4. Virtual mounting.
        self.sync_virtual_mounts();

        // 5. Parallax.
        for slide in &mut self.slides {
            if !slide.progress.is_finite() {
                continue;
            }
            let progress = slide.progress;
            for binding in &mut slide.parallax {
                binding.apply(progress);
            }
        }

        // 6. Render callback.
        let snapshot = self.snapshot();
        self.callbacks.emit(&SnapEvent::Update(snapshot));

        if self.track.is_settled()
            && !self.transition.is_active()
            && !self.wheel.is_wheeling()
            && !self.swipe.is_engaged()
        {
            self.clock.pause();
        }
    }

    /// Frame-rate-independent lerp factor: the configured factor is defined
    /// at 60 fps and rescaled exponentially for the measured delta.
    fn frame_lerp(&self, frame: FrameTick) -> f32 {
        let frames = frame.delta_secs_clamped() * 60.0;
        1.0 - (1.0 - self.cfg.lerp).powf(frames.max(0.1))
    }

    fn inertia_active(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.inertia_active())
    }

    /// Loop correction: when `current`/`target` leave `[min, max)`, shift
    /// both by the same wrap amount so in-flight distance is preserved.
    fn wrap_loop(&mut self) {
        if !self.cfg.r#loop {
            return;
        }
        let current = self.track.current();
        let wrapped = self.track.loop_coord(current);
        let shift = wrapped - current;
        if shift != 0.0 {
            self.track.set_current(current + shift);
            self.track.set_target(self.track.target() + shift);
        }
    }

    /// Recompute every slide's rendered coordinate, progress, and
    /// visibility from the interpolated track value, then the active index.
    fn reconcile(&mut self) {
        let current = self.track.current();
        let cycle = self.track.cycle();
        let align = self.align_offset();
        let span = self.main_span();
        let gap = self.gap_px;
        let magnets: Vec<f32> = (0..self.slides.len())
            .map(|i| self.magnet_raw(i))
            .collect();
        for (slide, magnet) in self.slides.iter_mut().zip(&magnets) {
            let mut coord = slide.static_coord() - current + align;
            if cycle > 0.0 {
                coord = coord.rem_euclid(cycle);
                if coord > cycle - slide.size() - gap {
                    coord -= cycle;
                }
            }
            slide.coord = coord;
            let denom = slide.size() + gap;
            slide.progress = if denom > 0.0 {
                let mut num = current - magnet;
                if cycle > 0.0 {
                    num = (num + cycle / 2.0).rem_euclid(cycle)
                        - cycle / 2.0;
                }
                num / denom
            } else {
                f32::INFINITY
            };
            slide.visible = slide.size() > 0.0
                && coord + slide.size() > 0.0
                && coord < span;
        }
        self.active_index = self.compute_active();
    }

    /// The visible slide with minimal `|progress|`; ties resolve to the
    /// lower index. Falls back to all sized slides when nothing is visible
    /// (degenerate container), and `None` when the instance is empty.
    fn compute_active(&self) -> Option<usize> {
        let pick = |visible_only: bool| -> Option<usize> {
            let mut best: Option<(usize, f32)> = None;
            for slide in &self.slides {
                if slide.size() <= 0.0 || !slide.progress.is_finite() {
                    continue;
                }
                if visible_only && !slide.visible {
                    continue;
                }
                let p = slide.progress.abs();
                if best.is_none_or(|(_, bp)| p < bp) {
                    best = Some((slide.index(), p));
                }
            }
            best.map(|(i, _)| i)
        };
        pick(true).or_else(|| pick(false))
    }

    /// Mount/unmount virtual slides with one slide-span of margin around
    /// the viewport.
    fn sync_virtual_mounts(&mut self) {
        let span = self.main_span();
        for slide in &mut self.slides {
            if !slide.is_virtual() {
                continue;
            }
            let margin = slide.size();
            let coord = slide.coord;
            let should_mount = coord + slide.size() > -margin
                && coord < span + margin;
            if slide.sync_mount(should_mount) {
                log::trace!(
                    "virtual slide {} {}",
                    slide.id(),
                    if should_mount { "mounted" } else { "unmounted" }
                );
            }
        }
    }

    fn snapshot(&self) -> UpdateSnapshot {
        UpdateSnapshot {
            container: self.container_size,
            current: self.track.current(),
            target: self.track.target(),
            track_progress: self.track.progress(),
            active_index: self.active_index,
            slides: self
                .slides
                .iter()
                .map(|s| SlideFrame {
                    id: s.id().to_string(),
                    index: s.index(),
                    coord: s.coord(),
                    progress: s.progress(),
                    size: s.size(),
                    visible: s.is_visible(),
                })
                .collect(),
        }
    }

    // ---- teardown --------------------------------------------------------

    /// Tear the instance down. Idempotent; safe on a never-ticked instance.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.transition.cancel();
        self.wheel.reset();
        self.swipe.reset();
        for slide in &mut self.slides {
            slide.teardown();
        }
        self.container.set_pointer_events(true);
        self.callbacks.emit(&SnapEvent::Destroy);
        self.callbacks.clear();
        self.clock.pause();
    }
}

impl Drop for Snap {
    fn drop(&mut self) {
        self.destroy();
    }
}
