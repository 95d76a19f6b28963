//! Scroll-snap engine: a host-agnostic carousel/slider core.
//!
//! The crate models a carousel as a scalar [`track::Track`] position plus an
//! ordered set of [`slide::Slide`]s. Input adapters (wheel, swipe) translate
//! host events into track mutations, a per-frame reconciliation step derives
//! every slide's coordinate and progress from the track, and the result is
//! published through a synchronous [`events::SnapEvent::Update`] callback.
//! Nothing in here touches a real DOM or event loop; hosts implement the
//! trait surfaces in [`glide_contracts`] and drive [`snap::Snap::tick`].
//!
//! ```no_run
//! use glide_core::prelude::*;
//! # fn host_container() -> Box<dyn ElementLike> { unimplemented!() }
//!
//! # fn main() -> glide_core::error::Result<()> {
//! let mut snap = Snap::new(host_container(), SnapConfig::default())?;
//! let id_gen = snap.id_gen();
//! # let els: Vec<Box<dyn ElementLike>> = vec![];
//! for el in els {
//!     snap.attach(Slide::new(&id_gen, el, SlideSize::Auto));
//! }
//! snap.on(EventKind::Update, |event| {
//!     if let SnapEvent::Update(frame) = event {
//!         // write frame.slides[..].coord to the host styles
//!     }
//! });
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod easing;
pub mod error;
pub mod events;
mod keyboard;
pub mod parallax;
pub mod slide;
pub mod snap;
mod swipe;
mod timeline;
pub mod track;
mod wheel;

pub use glide_contracts as contracts;

/// The commonly used surface in one import.
pub mod prelude {
    pub use crate::config::{
        Direction, Freemode, Gap, SnapConfig, WheelThrottle,
    };
    pub use crate::easing::Easing;
    pub use crate::error::{GlideError, Result};
    pub use crate::events::{
        CallbackId, EventKind, SlideFrame, SnapEvent, UpdateSnapshot,
    };
    pub use crate::slide::{Slide, SlideIdGen, SlideSize};
    pub use crate::snap::Snap;
    pub use glide_contracts::prelude::*;
}
