//! Axis selection and CSS length resolution.

use crate::element::Size;

/// The scroll axis a snap instance operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left-to-right track; gestures read their `x` component.
    #[default]
    X,
    /// Top-to-bottom track; gestures read their `y` component.
    Y,
}

impl Axis {
    /// Pick this axis' component out of a width/height pair.
    #[inline]
    pub fn of(self, size: Size) -> f32 {
        match self {
            Axis::X => size.width,
            Axis::Y => size.height,
        }
    }

    /// Pick this axis' component out of an `(x, y)` pair.
    #[inline]
    pub fn of_xy(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
        }
    }

    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Pure CSS-length → pixel mapping supplied by the host.
///
/// The engine hands over the raw length string (`"10rem"`, `"5vw"`, ...)
/// together with the container size and axis the value applies to. Plain
/// pixel numbers never reach this trait; the engine parses those itself.
pub trait LengthResolver {
    /// Resolve `css` to pixels. Unresolvable input should map to `0.0`
    /// rather than failing; a zero length degrades gracefully downstream.
    fn to_pixels(&self, css: &str, container: Size, axis: Axis) -> f32;
}

/// Resolver that only understands bare pixel values and `<n>%` of the
/// container. Useful as a default and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PxResolver;

impl LengthResolver for PxResolver {
    fn to_pixels(&self, css: &str, container: Size, axis: Axis) -> f32 {
        let s = css.trim();
        if let Some(pct) = s.strip_suffix('%') {
            return pct.trim().parse::<f32>().unwrap_or(0.0) / 100.0
                * axis.of(container);
        }
        let digits = s.strip_suffix("px").unwrap_or(s);
        digits.trim().parse::<f32>().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_resolver_handles_px_and_percent() {
        let container = Size::new(400.0, 200.0);
        let r = PxResolver;
        assert_eq!(r.to_pixels("24", container, Axis::X), 24.0);
        assert_eq!(r.to_pixels("24px", container, Axis::X), 24.0);
        assert_eq!(r.to_pixels("50%", container, Axis::X), 200.0);
        assert_eq!(r.to_pixels("50%", container, Axis::Y), 100.0);
        assert_eq!(r.to_pixels("bogus", container, Axis::X), 0.0);
    }
}
