//! Focus guard.
//!
//! Browsers scroll a focused child into view by mutating the container's
//! native scroll offset, which would silently desynchronize the track. The
//! guard zeroes that offset on every focus-in so the track stays the single
//! source of truth.

use glide_contracts::element::ElementLike;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KeyboardGuard {
    enabled: bool,
}

impl KeyboardGuard {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Handle a focus-in inside the container.
    pub fn on_focus_in(&self, container: &mut dyn ElementLike) {
        if self.enabled {
            container.reset_scroll();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_contracts::element::Size;

    #[derive(Debug, Default)]
    struct Recorder {
        resets: usize,
    }

    impl ElementLike for Recorder {
        fn measure(&self) -> Size {
            Size::ZERO
        }
        fn mount(&mut self) {}
        fn unmount(&mut self) {}
        fn is_mounted(&self) -> bool {
            true
        }
        fn set_style(&mut self, _: &str, _: &str) {}
        fn attribute(&self, _: &str) -> Option<String> {
            None
        }
        fn reset_scroll(&mut self) {
            self.resets += 1;
        }
    }

    #[test]
    fn resets_only_when_enabled() {
        let mut el = Recorder::default();
        KeyboardGuard::new(true).on_focus_in(&mut el);
        assert_eq!(el.resets, 1);
        KeyboardGuard::new(false).on_focus_in(&mut el);
        assert_eq!(el.resets, 1);
    }
}
