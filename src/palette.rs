//! Mapping of song descriptors to a pair of gradient endpoint colors.

use crate::{color::Hsv, features::AudioFeatures};

/// Hue increment per unit of spread between the two endpoints.
const HUE_STEP: f64 = 0.2;

/// The two endpoint colors of a gradient plus the tempo-derived spread that
/// separated them. `c1` is always the low end of the gradient, `c2` the
/// high end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientPalette {
    pub c1: Hsv,
    pub c2: Hsv,
    pub spread: i64,
}

impl GradientPalette {
    /// Derive endpoint colors from song descriptors. Pure and permissive:
    /// out-of-range descriptors are not rejected, they flow through the
    /// arithmetic.
    ///
    /// - valence picks the starting hue (low valence lands on blue) and
    ///   lifts value;
    /// - energy adds saturation, acousticness subtracts it;
    /// - tempo sets the spread: one hue step per 20 bpm over 90, never less
    ///   than one step.
    ///
    /// `c2`'s hue is deliberately left unwrapped; a fast song can wind the
    /// gradient several times around the wheel, and color conversion
    /// normalizes the winding at pixel-write time.
    pub fn from_features(features: &AudioFeatures) -> Self {
        let mut hue = 0.5 + features.valence;
        if hue > 1.0 {
            hue -= 1.0;
        }

        let saturation = 0.35 + features.energy * 0.65 - features.acousticness * 0.35;
        let value = 0.6 + features.valence * 0.4;

        // Mathematical floor, not truncation: for tempo below 90 the raw
        // quotient is negative and floors away from zero before the clamp.
        let spread = (((features.tempo - 90.0) / 20.0).floor() as i64).max(1);

        let c1 = Hsv::new(hue, saturation, value);
        let c2 = Hsv::new(hue + HUE_STEP * spread as f64, saturation, value);
        Self { c1, c2, spread }
    }
}
