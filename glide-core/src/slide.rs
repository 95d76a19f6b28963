//! Slide: one logical carousel item and its size resolution.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use glide_contracts::element::{ElementLike, Size, Unsubscribe};
use glide_contracts::units::{Axis, LengthResolver};

use crate::error::{GlideError, Result};
use crate::parallax::ParallaxBinding;

/// Monotonic id source owned by each snap instance.
///
/// An injected generator instead of a file-level global, so isolated
/// instances and parallel tests never share a counter.
#[derive(Debug, Clone, Default)]
pub struct SlideIdGen {
    next: Arc<AtomicU64>,
}

impl SlideIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next stable id (`"slide-7"`).
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("slide-{n}")
    }
}

/// How a slide's main-axis span is determined.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideSize {
    /// Measure the element (or fall back to the container span).
    #[default]
    Auto,
    /// Fixed pixel span.
    Fixed(f32),
    /// CSS length resolved through the host resolver.
    Css(String),
}

/// One logical carousel item.
///
/// The element is optional: purely virtual/data-only slides carry geometry
/// without any host node. `coord` and `progress` are owned by the
/// reconciliation step; nothing else writes them.
pub struct Slide {
    id: String,
    element: Option<Box<dyn ElementLike>>,
    size: SlideSize,
    /// Resolved pixel span, updated on attach/resize.
    resolved_size: f32,
    /// Position within the ordered sequence; reassigned on attach/reflow.
    pub(crate) index: usize,
    /// Rendered offset along the scroll axis for the current frame.
    pub(crate) coord: f32,
    /// Coordinate assuming zero net input offset; reference frame for loop
    /// wrap and magnet computation.
    pub(crate) static_coord: f32,
    /// Signed distance from the active position in slide-span units. Not
    /// bounded to `[-1, 1]`.
    pub(crate) progress: f32,
    /// Whether the slide mounts/unmounts itself based on visibility.
    virtual_: bool,
    pub(crate) visible: bool,
    pub(crate) parallax: Vec<ParallaxBinding>,
    resize_sub: Option<Box<dyn Unsubscribe>>,
}

impl fmt::Debug for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slide")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("size", &self.size)
            .field("resolved_size", &self.resolved_size)
            .field("coord", &self.coord)
            .field("static_coord", &self.static_coord)
            .field("progress", &self.progress)
            .field("virtual", &self.virtual_)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl Slide {
    /// Regular slide backed by a host element.
    pub fn new(
        id_gen: &SlideIdGen,
        element: Box<dyn ElementLike>,
        size: SlideSize,
    ) -> Self {
        Self {
            id: id_gen.next_id(),
            element: Some(element),
            size,
            resolved_size: 0.0,
            index: 0,
            coord: 0.0,
            static_coord: 0.0,
            progress: 0.0,
            virtual_: false,
            visible: false,
            parallax: Vec::new(),
            resize_sub: None,
        }
    }

    /// Data-only slide with no element.
    pub fn detached(id_gen: &SlideIdGen, size: SlideSize) -> Self {
        Self {
            id: id_gen.next_id(),
            element: None,
            size,
            resolved_size: 0.0,
            index: 0,
            coord: 0.0,
            static_coord: 0.0,
            progress: 0.0,
            virtual_: false,
            visible: false,
            parallax: Vec::new(),
            resize_sub: None,
        }
    }

    /// Virtual slide: mounts/unmounts its element based on visibility.
    ///
    /// Requires an explicit pixel size, since mounting decisions need the span
    /// before the element exists in the tree, so `Auto`/CSS sizes are a
    /// construction-time error.
    pub fn virtual_slide(
        id_gen: &SlideIdGen,
        element: Box<dyn ElementLike>,
        size: SlideSize,
    ) -> Result<Self> {
        let SlideSize::Fixed(px) = size else {
            return Err(GlideError::VirtualSlideSize);
        };
        if !(px > 0.0) {
            return Err(GlideError::VirtualSlideSize);
        }
        let mut slide = Self::new(id_gen, element, SlideSize::Fixed(px));
        slide.virtual_ = true;
        Ok(slide)
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn coord(&self) -> f32 {
        self.coord
    }

    #[inline]
    pub fn static_coord(&self) -> f32 {
        self.static_coord
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.resolved_size
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.virtual_
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn element(&self) -> Option<&dyn ElementLike> {
        self.element.as_deref()
    }

    pub(crate) fn element_mut(&mut self) -> Option<&mut Box<dyn ElementLike>> {
        self.element.as_mut()
    }

    /// Store the host resize subscription so detach can tear it down.
    pub(crate) fn set_resize_sub(&mut self, sub: Box<dyn Unsubscribe>) {
        self.resize_sub = Some(sub);
    }

    /// Resolve the declared size to pixels for the given container/axis.
    pub(crate) fn resolve_size(
        &mut self,
        container: Size,
        axis: Axis,
        resolver: &dyn LengthResolver,
    ) {
        self.resolved_size = match &self.size {
            SlideSize::Fixed(px) => *px,
            SlideSize::Css(css) => resolver.to_pixels(css, container, axis),
            SlideSize::Auto => match &self.element {
                Some(el) => {
                    let measured = axis.of(el.measure());
                    if measured > 0.0 {
                        measured
                    } else {
                        axis.of(container)
                    }
                }
                None => axis.of(container),
            },
        };
    }

    /// Mount or unmount a virtual slide's element to match visibility.
    /// Returns true when the mounted state changed.
    pub(crate) fn sync_mount(&mut self, should_mount: bool) -> bool {
        if !self.virtual_ {
            return false;
        }
        let Some(el) = self.element.as_mut() else {
            return false;
        };
        if should_mount && !el.is_mounted() {
            el.mount();
            true
        } else if !should_mount && el.is_mounted() {
            el.unmount();
            true
        } else {
            false
        }
    }

    /// Drop host-side hooks. Idempotent; called on detach and destroy.
    pub(crate) fn teardown(&mut self) {
        if let Some(mut sub) = self.resize_sub.take() {
            sub.unsubscribe();
        }
        self.parallax.clear();
    }
}

impl Drop for Slide {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct StubElement {
        size: Size,
        mounted: bool,
    }

    impl ElementLike for StubElement {
        fn measure(&self) -> Size {
            self.size
        }
        fn mount(&mut self) {
            self.mounted = true;
        }
        fn unmount(&mut self) {
            self.mounted = false;
        }
        fn is_mounted(&self) -> bool {
            self.mounted
        }
        fn set_style(&mut self, _: &str, _: &str) {}
        fn attribute(&self, _: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn id_generator_is_monotonic() {
        let id_gen = SlideIdGen::new();
        assert_eq!(id_gen.next_id(), "slide-0");
        assert_eq!(id_gen.next_id(), "slide-1");
        let other = SlideIdGen::new();
        assert_eq!(other.next_id(), "slide-0");
    }

    #[test]
    fn virtual_slide_requires_fixed_size() {
        let id_gen = SlideIdGen::new();
        let err = Slide::virtual_slide(
            &id_gen,
            Box::new(StubElement::default()),
            SlideSize::Auto,
        );
        assert!(matches!(err, Err(GlideError::VirtualSlideSize)));
        let err = Slide::virtual_slide(
            &id_gen,
            Box::new(StubElement::default()),
            SlideSize::Fixed(0.0),
        );
        assert!(matches!(err, Err(GlideError::VirtualSlideSize)));
        assert!(Slide::virtual_slide(
            &id_gen,
            Box::new(StubElement::default()),
            SlideSize::Fixed(120.0),
        )
        .is_ok());
    }

    #[test]
    fn auto_size_measures_element_then_container() {
        use glide_contracts::units::PxResolver;
        let id_gen = SlideIdGen::new();
        let mut with_el = Slide::new(
            &id_gen,
            Box::new(StubElement {
                size: Size::new(140.0, 90.0),
                mounted: true,
            }),
            SlideSize::Auto,
        );
        let container = Size::new(320.0, 200.0);
        with_el.resolve_size(container, Axis::X, &PxResolver);
        assert_eq!(with_el.size(), 140.0);

        let mut without = Slide::detached(&id_gen, SlideSize::Auto);
        without.resolve_size(container, Axis::X, &PxResolver);
        assert_eq!(without.size(), 320.0);
    }

    #[test]
    fn css_size_goes_through_resolver() {
        use glide_contracts::units::PxResolver;
        let id_gen = SlideIdGen::new();
        let mut s =
            Slide::detached(&id_gen, SlideSize::Css("25%".to_string()));
        s.resolve_size(Size::new(400.0, 300.0), Axis::X, &PxResolver);
        assert_eq!(s.size(), 100.0);
    }

    #[test]
    fn sync_mount_only_touches_virtual_slides() {
        let id_gen = SlideIdGen::new();
        let mut plain = Slide::new(
            &id_gen,
            Box::new(StubElement::default()),
            SlideSize::Fixed(100.0),
        );
        assert!(!plain.sync_mount(true));

        let mut v = Slide::virtual_slide(
            &id_gen,
            Box::new(StubElement::default()),
            SlideSize::Fixed(100.0),
        )
        .unwrap();
        assert!(v.sync_mount(true));
        assert!(!v.sync_mount(true));
        assert!(v.sync_mount(false));
    }
}
