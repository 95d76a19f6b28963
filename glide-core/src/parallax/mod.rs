//! Declarative per-slide parallax.
//!
//! Elements inside a slide opt in through `data-snap-parallax-*`
//! attributes. The attribute strings are parsed once at attach time into
//! typed descriptors; per frame the engine evaluates every descriptor
//! against the slide's progress and composes one style write per CSS
//! property group.

mod descriptor;
mod engine;

pub use descriptor::{
    parse_element, ParallaxChannel, ParallaxDescriptor, PropertyGroup,
    ATTR_PREFIX,
};
pub use engine::ParallaxBinding;
