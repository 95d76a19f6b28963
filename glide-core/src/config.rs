//! Snap instance configuration.
//!
//! One flat struct in the spirit of a controller config: every knob is a
//! plain field with a documented default, so call sites can use struct
//! update syntax against [`SnapConfig::default`].

use glide_contracts::units::Axis;

use crate::easing::Easing;
use crate::error::{GlideError, Result};

/// Scroll axis of the whole instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// The gesture/measurement axis this direction maps to.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis::X,
            Direction::Vertical => Axis::Y,
        }
    }
}

/// Free-scrolling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Freemode {
    /// Track always settles on a magnet.
    #[default]
    Off,
    /// Track rests wherever input leaves it.
    Free,
    /// Free scrolling, but input end still sticks to the nearest magnet.
    Sticky,
}

impl Freemode {
    #[inline]
    pub fn is_free(self) -> bool {
        !matches!(self, Freemode::Off)
    }
}

/// Throttling policy for paginated wheel steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelThrottle {
    /// Block new steps while a transition animation is in flight.
    #[default]
    Auto,
    /// Block new steps for a wall-clock window after each step.
    Ms(u64),
}

/// The inter-slide gap, either resolved pixels or a CSS length handed to the
/// host resolver.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gap {
    #[default]
    None,
    Px(f32),
    Css(String),
}

/// Full configuration of a snap instance. Immutable after construction;
/// rebuild the instance to change behavior.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapConfig {
    /// Scroll axis.
    pub direction: Direction,
    /// Wrap-around cycling instead of clamped ends.
    pub r#loop: bool,
    /// Align the active slide on the container center instead of its start.
    pub centered: bool,
    /// Inter-slide gap.
    pub gap: Gap,
    /// Elastic edge strength in `[0, 1]`; `1` is a hard stop, `0` lets the
    /// overshoot reach a full container of slack.
    pub edge_friction: f32,
    /// Free-scrolling mode.
    pub freemode: Freemode,

    /// Interpolation factor per frame for the track lerp, `(0, 1]`.
    pub lerp: f32,
    /// Programmatic transition length in milliseconds. `0` skips the tween
    /// and lets the track lerp carry the movement.
    pub duration_ms: u64,
    /// Programmatic transition easing.
    pub easing: Easing,

    /// Enable the wheel adapter.
    pub wheel: bool,
    /// Fixed wheel axis; `None` picks the dominant component per event.
    pub wheel_axis: Option<Axis>,
    /// Multiplier applied to normalized wheel pixels. Sign flips direction.
    pub wheel_speed: f32,
    /// Continuous (`true`) vs. paginated (`false`) wheel handling.
    pub follow_wheel: bool,
    /// Throttle policy for paginated wheel steps.
    pub wheel_throttle: WheelThrottle,
    /// Accumulated pixels needed to trigger one paginated step.
    pub wheel_no_follow_threshold: f32,
    /// Trailing silence that ends a wheel gesture, in milliseconds.
    pub wheel_debounce_ms: u64,
    /// Snap to the nearest magnet when a wheel gesture ends (non-free mode).
    pub stick_on_wheel_end: bool,

    /// Enable the swipe adapter.
    pub swipe: bool,
    /// Fixed swipe axis; `None` follows [`SnapConfig::direction`].
    pub swipe_axis: Option<Axis>,
    /// Multiplier applied to gesture deltas. Sign flips direction.
    pub swipe_speed: f32,
    /// Move the track live with the finger.
    pub follow_swipe: bool,
    /// Classify quick gestures as flicks that step one slide.
    pub short_swipes: bool,
    /// Maximum duration for the flick classification, in milliseconds.
    pub short_swipes_duration_ms: u64,
    /// Minimum travel for a flick (or non-follow step) to count, in pixels.
    pub short_swipes_threshold: f32,
    /// Damping applied to gesture deltas while release inertia is coasting.
    pub swipe_friction: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            r#loop: false,
            centered: false,
            gap: Gap::None,
            edge_friction: 0.85,
            freemode: Freemode::Off,
            lerp: 0.1,
            duration_ms: 350,
            easing: Easing::EaseOut,
            wheel: true,
            wheel_axis: None,
            wheel_speed: 1.0,
            follow_wheel: true,
            wheel_throttle: WheelThrottle::Auto,
            wheel_no_follow_threshold: 50.0,
            wheel_debounce_ms: 100,
            stick_on_wheel_end: true,
            swipe: true,
            swipe_axis: None,
            swipe_speed: 1.0,
            follow_swipe: true,
            short_swipes: true,
            short_swipes_duration_ms: 300,
            short_swipes_threshold: 30.0,
            swipe_friction: 0.95,
        }
    }
}

impl SnapConfig {
    /// Check and normalize the configuration.
    ///
    /// Out-of-range smoothing factors are clamped (UX knobs, not
    /// correctness); a negative pixel gap is rejected because it breaks the
    /// coordinate prefix sums.
    pub fn validate(mut self) -> Result<Self> {
        if let Gap::Px(px) = self.gap {
            if px < 0.0 || !px.is_finite() {
                return Err(GlideError::InvalidGap(px));
            }
        }
        self.edge_friction = self.edge_friction.clamp(0.0, 1.0);
        self.lerp = self.lerp.clamp(1e-3, 1.0);
        self.short_swipes_threshold = self.short_swipes_threshold.max(0.0);
        self.wheel_no_follow_threshold = self.wheel_no_follow_threshold.max(1.0);
        Ok(self)
    }

    /// Effective swipe axis.
    #[inline]
    pub fn swipe_axis(&self) -> Axis {
        self.swipe_axis.unwrap_or_else(|| self.direction.axis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_clamps_smoothing_knobs() {
        let cfg = SnapConfig {
            edge_friction: 3.0,
            lerp: 0.0,
            short_swipes_threshold: -5.0,
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(cfg.edge_friction, 1.0);
        assert!(cfg.lerp > 0.0);
        assert_eq!(cfg.short_swipes_threshold, 0.0);
    }

    #[test]
    fn validate_rejects_negative_gap() {
        let cfg = SnapConfig {
            gap: Gap::Px(-4.0),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(GlideError::InvalidGap(_))));
    }
}
