//! Wheel input contract.

use std::time::Instant;

/// Unit the host's wheel event reports its deltas in.
///
/// Browsers disagree on wheel units; the engine normalizes everything to
/// pixels before applying speed factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// One raw wheel event as delivered by the host.
#[derive(Debug, Clone, Copy)]
pub struct WheelInput {
    pub now: Instant,
    pub delta_x: f32,
    pub delta_y: f32,
    pub mode: WheelDeltaMode,
}

impl WheelInput {
    pub fn pixels(now: Instant, delta_x: f32, delta_y: f32) -> Self {
        Self {
            now,
            delta_x,
            delta_y,
            mode: WheelDeltaMode::Pixel,
        }
    }
}
