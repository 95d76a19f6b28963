//! Engine error taxonomy.
//!
//! Glide has no I/O, so every error here is a configuration or invariant
//! violation caught at construction/attach time. Geometric degeneracy (zero
//! container, zero slides) is deliberately *not* an error; it degrades to a
//! non-scrollable track.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlideError {
    /// Virtual slides mount/unmount from their computed coordinate, which
    /// cannot exist without a known size.
    #[error("virtual slide requires an explicit pixel size")]
    VirtualSlideSize,

    /// Negative gaps break the prefix-sum coordinate model.
    #[error("invalid gap value: {0} (must be non-negative)")]
    InvalidGap(f32),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GlideError>;
