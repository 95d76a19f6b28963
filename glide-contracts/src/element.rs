//! Element handles: the engine's window onto host-owned nodes.

use std::fmt::Debug;

/// A measured width/height pair in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Handle to one host element (a slide root, the container, or a parallax
/// target inside a slide).
///
/// The engine issues style writes and mount toggles through this trait and
/// reads measurements and `data-*` attributes back. Implementations are free
/// to batch or coalesce writes; the engine already composes one value per
/// CSS property per frame.
pub trait ElementLike: Debug {
    /// Current border-box size. Detached elements report their last known
    /// size (or zero if never measured).
    fn measure(&self) -> Size;

    /// Insert the element into the live tree. Idempotent.
    fn mount(&mut self);

    /// Remove the element from the live tree, keeping it reusable. Idempotent.
    fn unmount(&mut self);

    /// Whether the element is currently in the live tree.
    fn is_mounted(&self) -> bool;

    /// Write one CSS property (`"transform"`, `"opacity"`, ...).
    fn set_style(&mut self, property: &str, value: &str);

    /// Read an attribute by full name (`"data-snap-parallax-scale"`).
    fn attribute(&self, name: &str) -> Option<String>;

    /// Descendants (and possibly the element itself) that carry parallax
    /// attributes. Called once per slide at attach time.
    fn parallax_targets(&mut self) -> Vec<Box<dyn ElementLike>> {
        Vec::new()
    }

    /// Toggle pointer-event delivery for the subtree. The swipe adapter
    /// disables it mid-drag so underlying controls don't see spurious
    /// hover/click.
    fn set_pointer_events(&mut self, _enabled: bool) {}

    /// Zero out any native scroll offset the host applied to this element
    /// (focus-driven scroll-into-view). Used by the keyboard guard.
    fn reset_scroll(&mut self) {}
}

/// Teardown handle for a host-side subscription (resize observation).
///
/// Dropping the handle without calling [`Unsubscribe::unsubscribe`] must
/// also tear the subscription down; the explicit call exists so `destroy()`
/// can be eager and idempotent.
pub trait Unsubscribe: Debug {
    fn unsubscribe(&mut self);
}
