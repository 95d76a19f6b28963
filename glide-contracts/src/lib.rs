//! Trait surfaces that describe how the Glide engine talks to its host.
//!
//! The engine never touches a real DOM. Everything platform-facing (element
//! measurement and mounting, CSS length resolution, the animation-frame
//! clock, pointer gestures) arrives through the traits and value types in
//! this crate, so the engine stays testable with plain structs.

pub mod element;
pub mod frame;
pub mod gesture;
pub mod units;
pub mod wheel;

/// Frequently used types for engine and host crates.
pub mod prelude {
    pub use super::element::{ElementLike, Size, Unsubscribe};
    pub use super::frame::{FrameClock, FrameTick};
    pub use super::gesture::{
        GestureControl, GestureEvent, GestureVector, InertiaPhase,
    };
    pub use super::units::{Axis, LengthResolver};
    pub use super::wheel::{WheelDeltaMode, WheelInput};
}
