//! Pastel color generation for new pills.

use crate::constants::{PASTEL_LIGHTNESS, PASTEL_SATURATION};
use crate::types::PillColor;
use rand::Rng;

/// A random pastel: any hue, fixed saturation and lightness.
pub fn random_pastel<R: Rng>(rng: &mut R) -> PillColor {
    PillColor::hsl(rng.gen_range(0.0..360.0), PASTEL_SATURATION, PASTEL_LIGHTNESS)
}
