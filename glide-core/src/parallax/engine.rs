//! Per-frame parallax evaluation and style composition.

use std::fmt;
use std::fmt::Write as _;

use glide_contracts::element::ElementLike;

use super::descriptor::{
    parse_element, ParallaxChannel, ParallaxDescriptor, PropertyGroup,
};

/// One parallax-enabled element and its parsed channels.
///
/// Bound once when the slide attaches; every frame [`ParallaxBinding::apply`]
/// writes at most one `transform` and one `opacity` value, never one write
/// per channel.
pub struct ParallaxBinding {
    element: Box<dyn ElementLike>,
    descriptors: Vec<ParallaxDescriptor>,
    last_transform: Option<String>,
    last_opacity: Option<String>,
}

impl fmt::Debug for ParallaxBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallaxBinding")
            .field("descriptors", &self.descriptors)
            .finish_non_exhaustive()
    }
}

impl ParallaxBinding {
    /// Parse the element's attributes; `None` when nothing is configured.
    pub fn bind(element: Box<dyn ElementLike>) -> Option<Self> {
        let descriptors = parse_element(element.as_ref());
        if descriptors.is_empty() {
            return None;
        }
        Some(Self {
            element,
            descriptors,
            last_transform: None,
            last_opacity: None,
        })
    }

    /// Build a binding from pre-parsed descriptors (tests, programmatic
    /// configuration).
    pub fn from_descriptors(
        element: Box<dyn ElementLike>,
        descriptors: Vec<ParallaxDescriptor>,
    ) -> Self {
        Self {
            element,
            descriptors,
            last_transform: None,
            last_opacity: None,
        }
    }

    pub fn descriptors(&self) -> &[ParallaxDescriptor] {
        &self.descriptors
    }

    /// Evaluate every channel against the slide progress and flush the
    /// composed values. Unchanged values are skipped.
    pub fn apply(&mut self, progress: f32) {
        let mut transform = String::new();
        let mut opacity: Option<f32> = None;

        for d in &self.descriptors {
            let value = d.channel.neutral() + d.delta(progress);
            match d.channel.group() {
                PropertyGroup::Transform => {
                    if !transform.is_empty() {
                        transform.push(' ');
                    }
                    let _ = write!(
                        transform,
                        "{}({}{})",
                        d.channel.css_function(),
                        value,
                        d.channel.unit()
                    );
                }
                PropertyGroup::Opacity => {
                    // Multiple opacity descriptors multiply down.
                    let clamped = value.clamp(0.0, 1.0);
                    opacity =
                        Some(opacity.map_or(clamped, |o| o * clamped));
                }
            }
        }

        if !transform.is_empty()
            && self.last_transform.as_deref() != Some(transform.as_str())
        {
            self.element.set_style("transform", &transform);
            self.last_transform = Some(transform);
        }
        if let Some(o) = opacity {
            let css = format!("{o}");
            if self.last_opacity.as_deref() != Some(css.as_str()) {
                self.element.set_style("opacity", &css);
                self.last_opacity = Some(css);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_contracts::element::Size;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    type Writes = Rc<RefCell<Vec<(String, String)>>>;

    #[derive(Debug, Default)]
    struct StyleRecorder {
        attrs: HashMap<String, String>,
        writes: Writes,
    }

    impl ElementLike for StyleRecorder {
        fn measure(&self) -> Size {
            Size::ZERO
        }
        fn mount(&mut self) {}
        fn unmount(&mut self) {}
        fn is_mounted(&self) -> bool {
            true
        }
        fn set_style(&mut self, property: &str, value: &str) {
            self.writes
                .borrow_mut()
                .push((property.to_string(), value.to_string()));
        }
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }
    }

    fn descriptor(
        channel: ParallaxChannel,
        target: f32,
    ) -> ParallaxDescriptor {
        ParallaxDescriptor {
            channel,
            target,
            min: None,
            max: None,
            scope: None,
            influence: None,
            directional: true,
            abs: false,
        }
    }

    #[test]
    fn transform_channels_compose_into_one_write() {
        let writes: Writes = Rc::default();
        let el = StyleRecorder {
            attrs: HashMap::new(),
            writes: writes.clone(),
        };
        let mut binding = ParallaxBinding::from_descriptors(
            Box::new(el),
            vec![
                descriptor(ParallaxChannel::TranslateX, 100.0),
                descriptor(ParallaxChannel::Scale, -0.5),
            ],
        );
        binding.apply(0.5);
        let recorded = writes.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "transform");
        assert_eq!(recorded[0].1, "translateX(50px) scale(0.75)");
    }

    #[test]
    fn opacity_goes_out_separately_and_clamped() {
        let writes: Writes = Rc::default();
        let el = StyleRecorder {
            attrs: HashMap::new(),
            writes: writes.clone(),
        };
        let mut binding = ParallaxBinding::from_descriptors(
            Box::new(el),
            vec![descriptor(ParallaxChannel::Opacity, -2.0)],
        );
        binding.apply(1.0);
        let recorded = writes.borrow();
        assert_eq!(recorded.as_slice(), [(
            "opacity".to_string(),
            "0".to_string()
        )]);
    }

    #[test]
    fn unchanged_values_are_not_rewritten() {
        let writes: Writes = Rc::default();
        let el = StyleRecorder {
            attrs: HashMap::new(),
            writes: writes.clone(),
        };
        let mut binding = ParallaxBinding::from_descriptors(
            Box::new(el),
            vec![descriptor(ParallaxChannel::TranslateX, 100.0)],
        );
        binding.apply(0.5);
        binding.apply(0.5);
        assert_eq!(writes.borrow().len(), 1);
        binding.apply(0.6);
        assert_eq!(writes.borrow().len(), 2);
    }

    #[test]
    fn bind_skips_elements_without_attributes() {
        let el = StyleRecorder::default();
        assert!(ParallaxBinding::bind(Box::new(el)).is_none());
    }
}
