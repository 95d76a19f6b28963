//! Typed parallax channel descriptors and their attribute parsing.

use glide_contracts::element::ElementLike;

/// Attribute namespace the loader understands.
pub const ATTR_PREFIX: &str = "data-snap-parallax";

/// CSS property a channel contributes to. All channels of one group are
/// composed into a single style write per element per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyGroup {
    Transform,
    Opacity,
}

/// One animatable channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParallaxChannel {
    TranslateX,
    TranslateY,
    TranslateZ,
    Scale,
    ScaleX,
    ScaleY,
    Skew,
    SkewX,
    SkewY,
    Rotate,
    RotateX,
    RotateY,
    RotateZ,
    Opacity,
}

impl ParallaxChannel {
    pub const ALL: [ParallaxChannel; 14] = [
        ParallaxChannel::TranslateX,
        ParallaxChannel::TranslateY,
        ParallaxChannel::TranslateZ,
        ParallaxChannel::Scale,
        ParallaxChannel::ScaleX,
        ParallaxChannel::ScaleY,
        ParallaxChannel::Skew,
        ParallaxChannel::SkewX,
        ParallaxChannel::SkewY,
        ParallaxChannel::Rotate,
        ParallaxChannel::RotateX,
        ParallaxChannel::RotateY,
        ParallaxChannel::RotateZ,
        ParallaxChannel::Opacity,
    ];

    /// Kebab-case attribute suffix (`data-snap-parallax-translate-x`).
    pub fn attr_suffix(self) -> &'static str {
        match self {
            ParallaxChannel::TranslateX => "translate-x",
            ParallaxChannel::TranslateY => "translate-y",
            ParallaxChannel::TranslateZ => "translate-z",
            ParallaxChannel::Scale => "scale",
            ParallaxChannel::ScaleX => "scale-x",
            ParallaxChannel::ScaleY => "scale-y",
            ParallaxChannel::Skew => "skew",
            ParallaxChannel::SkewX => "skew-x",
            ParallaxChannel::SkewY => "skew-y",
            ParallaxChannel::Rotate => "rotate",
            ParallaxChannel::RotateX => "rotate-x",
            ParallaxChannel::RotateY => "rotate-y",
            ParallaxChannel::RotateZ => "rotate-z",
            ParallaxChannel::Opacity => "opacity",
        }
    }

    /// CSS transform function name, for transform-group channels.
    pub fn css_function(self) -> &'static str {
        match self {
            ParallaxChannel::TranslateX => "translateX",
            ParallaxChannel::TranslateY => "translateY",
            ParallaxChannel::TranslateZ => "translateZ",
            ParallaxChannel::Scale => "scale",
            ParallaxChannel::ScaleX => "scaleX",
            ParallaxChannel::ScaleY => "scaleY",
            ParallaxChannel::Skew => "skew",
            ParallaxChannel::SkewX => "skewX",
            ParallaxChannel::SkewY => "skewY",
            ParallaxChannel::Rotate => "rotate",
            ParallaxChannel::RotateX => "rotateX",
            ParallaxChannel::RotateY => "rotateY",
            ParallaxChannel::RotateZ => "rotateZ",
            ParallaxChannel::Opacity => "",
        }
    }

    pub fn group(self) -> PropertyGroup {
        match self {
            ParallaxChannel::Opacity => PropertyGroup::Opacity,
            _ => PropertyGroup::Transform,
        }
    }

    /// Unit suffix for the composed CSS value.
    pub fn unit(self) -> &'static str {
        match self {
            ParallaxChannel::TranslateX
            | ParallaxChannel::TranslateY
            | ParallaxChannel::TranslateZ => "px",
            ParallaxChannel::Skew
            | ParallaxChannel::SkewX
            | ParallaxChannel::SkewY
            | ParallaxChannel::Rotate
            | ParallaxChannel::RotateX
            | ParallaxChannel::RotateY
            | ParallaxChannel::RotateZ => "deg",
            _ => "",
        }
    }

    /// Channel value at zero progress.
    pub fn neutral(self) -> f32 {
        match self {
            ParallaxChannel::Scale
            | ParallaxChannel::ScaleX
            | ParallaxChannel::ScaleY
            | ParallaxChannel::Opacity => 1.0,
            _ => 0.0,
        }
    }
}

/// Parsed configuration of one channel on one element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallaxDescriptor {
    pub channel: ParallaxChannel,
    /// Delta from the neutral value at full progress.
    pub target: f32,
    /// Clamp on the computed delta.
    pub min: Option<f32>,
    pub max: Option<f32>,
    /// Remap: which `[from, to]` span of the slide's progress drives the
    /// channel. `None` uses the raw progress.
    pub scope: Option<(f32, f32)>,
    /// Distance-decay exponent; `None` disables decay.
    pub influence: Option<f32>,
    /// Sign of the effect follows the sign of progress.
    pub directional: bool,
    /// Absolute value of the computed delta.
    pub abs: bool,
}

impl ParallaxDescriptor {
    /// Evaluate the channel delta for a slide progress value.
    pub fn delta(&self, progress: f32) -> f32 {
        let driver = match self.scope {
            Some((from, to)) if (to - from).abs() > f32::EPSILON => {
                ((progress - from) / (to - from)).clamp(0.0, 1.0)
            }
            Some(_) => 0.0,
            None => progress,
        };
        let shaped = if self.directional {
            driver
        } else {
            driver.abs()
        };
        let mut value = self.target * shaped;
        if let Some(exp) = self.influence {
            // Full strength at zero progress, fading out by one slide away.
            let decay = (1.0 - progress.abs().min(1.0)).powf(exp.max(0.0));
            value *= decay;
        }
        if self.abs {
            value = value.abs();
        }
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }
}

fn parse_bool(raw: &str) -> bool {
    !matches!(raw.trim(), "false" | "0" | "off")
}

fn parse_f32(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Parse a `from,to` scope pair.
fn parse_scope(raw: &str) -> Option<(f32, f32)> {
    let (a, b) = raw.split_once(',')?;
    Some((parse_f32(a)?, parse_f32(b)?))
}

/// Read every configured channel off one element. Called once at attach;
/// the frame loop only ever sees the typed descriptors.
pub fn parse_element(el: &dyn ElementLike) -> Vec<ParallaxDescriptor> {
    let mut out = Vec::new();
    for channel in ParallaxChannel::ALL {
        let base = format!("{ATTR_PREFIX}-{}", channel.attr_suffix());
        let Some(raw) = el.attribute(&base) else {
            continue;
        };
        let Some(target) = parse_f32(&raw) else {
            log::debug!("ignoring unparsable parallax target {base}={raw:?}");
            continue;
        };
        let sub = |suffix: &str| el.attribute(&format!("{base}-{suffix}"));
        out.push(ParallaxDescriptor {
            channel,
            target,
            min: sub("min").as_deref().and_then(parse_f32),
            max: sub("max").as_deref().and_then(parse_f32),
            scope: sub("scope").as_deref().and_then(parse_scope),
            influence: sub("influence").map(|raw| {
                parse_f32(&raw).unwrap_or(1.0)
            }),
            directional: sub("directional")
                .map(|raw| parse_bool(&raw))
                .unwrap_or(false),
            abs: sub("abs").map(|raw| parse_bool(&raw)).unwrap_or(false),
        });
    }
    out
}
