//! Harmony palettes derived from a single base color.
//!
//! Each strategy is a fixed, small channel-arithmetic recipe.  The recipes
//! are deliberately literal RGB math (channel rotations and shifts), not
//! HSL hue rotation; changing them changes every palette users have already
//! generated.

use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, to_hex};

/// Palette derivation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    Monochromatic,
    Shades,
}

impl Harmony {
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::Monochromatic,
        Harmony::Shades,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Harmony::Complementary => "Complementary",
            Harmony::Analogous => "Analogous",
            Harmony::Triadic => "Triadic",
            Harmony::Tetradic => "Tetradic",
            Harmony::Monochromatic => "Monochromatic",
            Harmony::Shades => "Shades",
        }
    }

    /// How many colors the strategy emits.
    pub fn color_count(&self) -> usize {
        match self {
            Harmony::Complementary => 2,
            Harmony::Analogous | Harmony::Triadic => 3,
            Harmony::Tetradic => 4,
            Harmony::Monochromatic => 5,
            Harmony::Shades => 6,
        }
    }

    /// Apply the recipe to `base`.
    pub fn derive(&self, base: RGB8) -> Vec<RGB8> {
        let (r, g, b) = (base.r, base.g, base.b);
        match self {
            Harmony::Complementary => {
                vec![base, RGB8 { r: 255 - r, g: 255 - g, b: 255 - b }]
            }
            // Red channel shifted by ±30, wrapping mod 255
            Harmony::Analogous => {
                let up = ((r as i32 + 30) % 255) as u8;
                let down = ((r as i32 - 30 + 255) % 255) as u8;
                vec![base, RGB8 { r: up, g, b }, RGB8 { r: down, g, b }]
            }
            Harmony::Triadic => {
                vec![base, RGB8 { r: g, g: b, b: r }, RGB8 { r: b, g: r, b: g }]
            }
            Harmony::Tetradic => vec![
                base,
                RGB8 { r: g, g: r, b },
                RGB8 { r: b, g, b: r },
                RGB8 { r, g: b, b: g },
            ],
            Harmony::Monochromatic => {
                (0..5).map(|i| scale(base, 0.8 - i as f64 * 0.15)).collect()
            }
            Harmony::Shades => (0..6).map(|i| scale(base, 1.0 - i as f64 * 0.15)).collect(),
        }
    }
}

fn scale(c: RGB8, factor: f64) -> RGB8 {
    let channel = |v: u8| (v as f64 * factor).round().clamp(0., 255.) as u8;
    RGB8 { r: channel(c.r), g: channel(c.g), b: channel(c.b) }
}

/// A derived palette, with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Hex colors, in strategy order.  Order is significant: it maps to
    /// swatch columns and to gradient stop order when reused.
    pub colors: Vec<String>,
    pub harmony: Harmony,
    pub base: String,
}

impl Palette {
    /// Derive a palette from a 6-digit hex base color.  `None` when the
    /// base does not parse — the caller renders its idle state.
    pub fn generate(input: &str, harmony: Harmony) -> Option<Palette> {
        let base = hex_to_rgb(input.trim())?;
        let colors = harmony.derive(base).into_iter().map(to_hex).collect();
        Some(Palette { colors, harmony, base: to_hex(base) })
    }
}

/// The colors of [`Palette::generate`], or an empty list when the base
/// color does not parse.
pub fn derive_palette(input: &str, harmony: Harmony) -> Vec<String> {
    Palette::generate(input, harmony).map(|p| p.colors).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb;

    #[test]
    fn complementary_of_black_and_white() {
        assert_eq!(
            derive_palette("#000000", Harmony::Complementary),
            vec!["#000000", "#ffffff"]
        );
        assert_eq!(
            derive_palette("#FFFFFF", Harmony::Complementary),
            vec!["#ffffff", "#000000"]
        );
    }

    #[test]
    fn analogous_wraps_mod_255() {
        // r = 225: 225 + 30 wraps to 0, 225 - 30 stays 195
        let colors = derive_palette("#e10a0a", Harmony::Analogous);
        assert_eq!(colors, vec!["#e10a0a", "#000a0a", "#c30a0a"]);
        // r = 20: 20 - 30 + 255 = 245
        let colors = derive_palette("#140a0a", Harmony::Analogous);
        assert_eq!(colors, vec!["#140a0a", "#320a0a", "#f50a0a"]);
    }

    #[test]
    fn triadic_and_tetradic_rotate_channels() {
        assert_eq!(
            derive_palette("#102030", Harmony::Triadic),
            vec!["#102030", "#203010", "#301020"]
        );
        assert_eq!(
            derive_palette("#102030", Harmony::Tetradic),
            vec!["#102030", "#201030", "#302010", "#103020"]
        );
    }

    #[test]
    fn monochromatic_and_shades_factors() {
        let mono = derive_palette("#ffffff", Harmony::Monochromatic);
        // factors 0.8, 0.65, 0.5, 0.35, 0.2 of 255, rounded
        assert_eq!(mono, vec!["#cccccc", "#a6a6a6", "#808080", "#595959", "#333333"]);
        let shades = derive_palette("#ffffff", Harmony::Shades);
        assert_eq!(shades[0], "#ffffff");
        assert_eq!(shades.len(), 6);
    }

    #[test]
    fn palette_length_follows_strategy() {
        for harmony in Harmony::ALL {
            let palette = Palette::generate("#3b82f6", harmony).unwrap();
            assert_eq!(palette.colors.len(), harmony.color_count(), "{harmony:?}");
        }
    }

    #[test]
    fn all_emitted_colors_decode_in_range() {
        for base in ["#000000", "#ffffff", "#3b82f6", "#e1fa05", "#808080"] {
            for harmony in Harmony::ALL {
                for hex in derive_palette(base, harmony) {
                    assert!(hex_to_rgb(&hex).is_some(), "{harmony:?} emitted {hex}");
                }
            }
        }
    }

    #[test]
    fn invalid_base_yields_empty_palette() {
        assert!(derive_palette("notacolor", Harmony::Triadic).is_empty());
        assert!(Palette::generate("#12", Harmony::Shades).is_none());
    }
}
