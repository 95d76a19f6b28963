//! Event callbacks and the per-frame snapshot payload.

use std::fmt;

use glide_contracts::element::Size;

/// Discriminant used to subscribe to one event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Update,
    WheelStart,
    Wheel,
    WheelEnd,
    SwipeStart,
    Swipe,
    SwipeEnd,
    Destroy,
}

/// Per-slide data published with every [`SnapEvent::Update`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideFrame {
    pub id: String,
    pub index: usize,
    pub coord: f32,
    pub progress: f32,
    pub size: f32,
    pub visible: bool,
}

/// Frame snapshot handed to the caller's render callback.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateSnapshot {
    pub container: Size,
    pub current: f32,
    pub target: f32,
    pub track_progress: f32,
    pub active_index: Option<usize>,
    pub slides: Vec<SlideFrame>,
}

/// Events a snap instance emits.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapEvent {
    /// Per-frame reconciliation result; this is the render hook.
    Update(UpdateSnapshot),
    WheelStart,
    Wheel,
    WheelEnd,
    SwipeStart,
    Swipe,
    SwipeEnd,
    Destroy,
}

impl SnapEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SnapEvent::Update(_) => EventKind::Update,
            SnapEvent::WheelStart => EventKind::WheelStart,
            SnapEvent::Wheel => EventKind::Wheel,
            SnapEvent::WheelEnd => EventKind::WheelEnd,
            SnapEvent::SwipeStart => EventKind::SwipeStart,
            SnapEvent::Swipe => EventKind::Swipe,
            SnapEvent::SwipeEnd => EventKind::SwipeEnd,
            SnapEvent::Destroy => EventKind::Destroy,
        }
    }
}

/// Handle returned by [`Callbacks::on`]; pass to [`Callbacks::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackId(u64);

type Handler = Box<dyn FnMut(&SnapEvent)>;

/// Simple synchronous callback registry.
///
/// Handlers run in registration order on the same event-loop turn as the
/// emit; there is no queuing or reentrancy protection beyond the borrow
/// rules (a handler cannot reach back into the instance that is emitting).
#[derive(Default)]
pub struct Callbacks {
    next_id: u64,
    handlers: Vec<(CallbackId, Option<EventKind>, Handler)>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one event kind.
    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> CallbackId
    where
        F: FnMut(&SnapEvent) + 'static,
    {
        self.register(Some(kind), Box::new(handler))
    }

    /// Subscribe to every event.
    pub fn on_any<F>(&mut self, handler: F) -> CallbackId
    where
        F: FnMut(&SnapEvent) + 'static,
    {
        self.register(None, Box::new(handler))
    }

    fn register(
        &mut self,
        kind: Option<EventKind>,
        handler: Handler,
    ) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, handler));
        id
    }

    /// Remove one handler. Unknown ids are ignored.
    pub fn off(&mut self, id: CallbackId) {
        self.handlers.retain(|(hid, _, _)| *hid != id);
    }

    /// Invoke every handler subscribed to the event's kind.
    pub fn emit(&mut self, event: &SnapEvent) {
        let kind = event.kind();
        for (_, filter, handler) in &mut self.handlers {
            if filter.is_none() || *filter == Some(kind) {
                handler(event);
            }
        }
    }

    /// Drop all handlers (destroy path).
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_respects_kind_filter_and_off() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut cb = Callbacks::new();

        let h1 = hits.clone();
        let id = cb.on(EventKind::WheelStart, move |_| {
            h1.borrow_mut().push("wheel");
        });
        let h2 = hits.clone();
        cb.on_any(move |e| {
            h2.borrow_mut().push(match e.kind() {
                EventKind::WheelStart => "any-wheel",
                _ => "any-other",
            });
        });

        cb.emit(&SnapEvent::WheelStart);
        cb.emit(&SnapEvent::Destroy);
        assert_eq!(
            hits.borrow().as_slice(),
            ["wheel", "any-wheel", "any-other"]
        );

        cb.off(id);
        cb.emit(&SnapEvent::WheelStart);
        assert_eq!(hits.borrow().len(), 4);
    }
}
