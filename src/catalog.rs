//! Product option catalogs for the LuminX configurator.
//!
//! This module provides the compiled-in catalogs of user-selectable options
//! (frame finishes, lens tints, smart features) and the [`Rgb`] color value
//! type used throughout the crate. The catalogs are static configuration
//! data: loaded once, read-only at runtime, never user-editable.

use palette::{Hsl, IntoColor, Srgb};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ============================================================================
// Rgb
// ============================================================================

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color literal {literal:?}, expected #RRGGBB")]
pub struct ParseColorError {
    /// The rejected input.
    pub literal: String,
}

/// An sRGB color value.
///
/// Serializes as a `#RRGGBB` hex string, the format the frontend and the
/// catalog data use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex literal. The leading `#` is optional.
    pub fn from_hex(literal: &str) -> Result<Self, ParseColorError> {
        let hex = literal.strip_prefix('#').unwrap_or(literal);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError {
                literal: literal.to_string(),
            });
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError {
                literal: literal.to_string(),
            })
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color as an uppercase `#RRGGBB` literal.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns true if the color reads as light (HSL lightness above 0.7).
    ///
    /// Used to pick a contrasting selection ring for pale swatches like
    /// Glossy White.
    pub fn is_light(self) -> bool {
        let srgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsl: Hsl = srgb.into_color();
        hsl.lightness > 0.7
    }

    /// Returns a swatch border color that contrasts with this color.
    pub fn swatch_border(self) -> Rgb {
        if self.is_light() {
            Rgb::new(0x17, 0x17, 0x17)
        } else {
            Rgb::new(0xFF, 0xFF, 0xFF)
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Rgb::from_hex(&literal).map_err(D::Error::custom)
    }
}

// ============================================================================
// Catalog Entries
// ============================================================================

/// A frame finish option: the color/material selection for the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameFinish {
    /// Stable identifier used by the controller and the profile format.
    pub id: &'static str,
    /// Display name shown in the UI.
    pub name: &'static str,
    /// The frame color value.
    pub color: Rgb,
}

/// A lens tint preset: named color, opacity-at-rest, and optional metalness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensTint {
    /// Stable identifier used by the controller and the profile format.
    pub id: &'static str,
    /// Display name shown in the UI.
    pub name: &'static str,
    /// The lens base color.
    pub color: Rgb,
    /// Display opacity at rest, as a 0.0-1.0 fraction.
    pub opacity: f32,
    /// Declared metalness, if any. Treated as 0 when absent.
    pub metalness: Option<f32>,
}

impl LensTint {
    /// Returns the declared metalness, defaulting to 0.
    pub fn metalness_or_default(&self) -> f32 {
        self.metalness.unwrap_or(0.0)
    }

    /// Opacity used when drawing the tint's swatch in the palette strip.
    ///
    /// Faint tints get boosted so every swatch stays visible.
    pub fn swatch_opacity(&self) -> f32 {
        self.opacity * 2.0 + 0.2
    }
}

/// A smart-feature toggle. Features are independent; none exclude another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Stable identifier used by the controller and the profile format.
    pub id: &'static str,
    /// Display name shown in the UI.
    pub name: &'static str,
    /// Whether a fresh configuration starts with this feature enabled.
    pub default_on: bool,
}

// ============================================================================
// Catalogs
// ============================================================================

/// The frame finish palette. Exactly one entry is selected at all times.
pub const FRAME_FINISHES: &[FrameFinish] = &[
    FrameFinish {
        id: "electric-blue",
        name: "Electric Blue",
        color: Rgb::new(0x0E, 0xA5, 0xE9),
    },
    FrameFinish {
        id: "neon-purple",
        name: "Neon Purple",
        color: Rgb::new(0x9B, 0x87, 0xF5),
    },
    FrameFinish {
        id: "matte-black",
        name: "Matte Black",
        color: Rgb::new(0x17, 0x17, 0x17),
    },
    FrameFinish {
        id: "glossy-white",
        name: "Glossy White",
        color: Rgb::new(0xFF, 0xFF, 0xFF),
    },
    FrameFinish {
        id: "rose-gold",
        name: "Rose Gold",
        color: Rgb::new(0xFF, 0xC0, 0xCB),
    },
];

/// The lens tint palette. Exactly one entry is selected at all times.
pub const LENS_TINTS: &[LensTint] = &[
    LensTint {
        id: "clear",
        name: "Clear",
        color: Rgb::new(0xCC, 0xCC, 0xCC),
        opacity: 0.2,
        metalness: None,
    },
    LensTint {
        id: "blue-tint",
        name: "Blue Tint",
        color: Rgb::new(0x0E, 0xA5, 0xE9),
        opacity: 0.3,
        metalness: None,
    },
    LensTint {
        id: "purple-tint",
        name: "Purple Tint",
        color: Rgb::new(0x9B, 0x87, 0xF5),
        opacity: 0.3,
        metalness: None,
    },
    LensTint {
        id: "amber-tint",
        name: "Amber Tint",
        color: Rgb::new(0xFF, 0xA5, 0x00),
        opacity: 0.3,
        metalness: None,
    },
    LensTint {
        id: "night-mode",
        name: "Night Mode",
        color: Rgb::new(0xFF, 0x55, 0x00),
        opacity: 0.5,
        metalness: None,
    },
];

/// The smart-feature catalog.
pub const FEATURES: &[Feature] = &[
    Feature {
        id: "voice-assistant",
        name: "Voice Assistant",
        default_on: true,
    },
    Feature {
        id: "navigation",
        name: "AR Navigation",
        default_on: true,
    },
    Feature {
        id: "camera",
        name: "Built-in Camera",
        default_on: true,
    },
    Feature {
        id: "spatial-audio",
        name: "Spatial Audio",
        default_on: true,
    },
    Feature {
        id: "eye-tracking",
        name: "Eye Tracking",
        default_on: false,
    },
    Feature {
        id: "face-mapping",
        name: "Face Mapping",
        default_on: false,
    },
];

/// Looks up a frame finish by id.
pub fn frame_finish(id: &str) -> Option<&'static FrameFinish> {
    FRAME_FINISHES.iter().find(|f| f.id == id)
}

/// Looks up a lens tint by id.
pub fn lens_tint(id: &str) -> Option<&'static LensTint> {
    LENS_TINTS.iter().find(|t| t.id == id)
}

/// Looks up a feature by id.
pub fn feature(id: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.id == id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let color = Rgb::from_hex("#0EA5E9").unwrap();
        assert_eq!(color, Rgb::new(0x0E, 0xA5, 0xE9));
        assert_eq!(color.to_hex(), "#0EA5E9");

        // Leading '#' is optional
        assert_eq!(Rgb::from_hex("171717").unwrap(), Rgb::new(0x17, 0x17, 0x17));
    }

    #[test]
    fn hex_rejects_malformed_literals() {
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0xFF, 0xC0, 0xCB)).unwrap();
        assert_eq!(json, "\"#FFC0CB\"");

        let back: Rgb = serde_json::from_str("\"#9B87F5\"").unwrap();
        assert_eq!(back, Rgb::new(0x9B, 0x87, 0xF5));
    }

    #[test]
    fn light_colors_get_dark_swatch_borders() {
        let white = frame_finish("glossy-white").unwrap().color;
        assert!(white.is_light());
        assert_eq!(white.swatch_border(), Rgb::new(0x17, 0x17, 0x17));

        let black = frame_finish("matte-black").unwrap().color;
        assert!(!black.is_light());
        assert_eq!(black.swatch_border(), Rgb::new(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn catalogs_have_expected_entries() {
        assert_eq!(FRAME_FINISHES.len(), 5);
        assert_eq!(LENS_TINTS.len(), 5);
        assert_eq!(FEATURES.len(), 6);

        // Ids are unique within each catalog
        for catalog_ids in [
            FRAME_FINISHES.iter().map(|f| f.id).collect::<Vec<_>>(),
            LENS_TINTS.iter().map(|t| t.id).collect(),
            FEATURES.iter().map(|f| f.id).collect(),
        ] {
            let mut deduped = catalog_ids.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), catalog_ids.len());
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(frame_finish("electric-blue").unwrap().name, "Electric Blue");
        assert_eq!(lens_tint("night-mode").unwrap().opacity, 0.5);
        assert!(feature("eye-tracking").is_some());

        assert!(frame_finish("chrome").is_none());
        assert!(lens_tint("mirror").is_none());
        assert!(feature("teleport").is_none());
    }

    #[test]
    fn tint_metalness_defaults_to_zero() {
        for tint in LENS_TINTS {
            assert_eq!(tint.metalness_or_default(), tint.metalness.unwrap_or(0.0));
        }
        assert_eq!(lens_tint("clear").unwrap().metalness_or_default(), 0.0);
    }

    #[test]
    fn swatch_opacity_boosts_faint_tints() {
        let clear = lens_tint("clear").unwrap();
        assert!((clear.swatch_opacity() - 0.6).abs() < f32::EPSILON);

        let night = lens_tint("night-mode").unwrap();
        assert!(night.swatch_opacity() > clear.swatch_opacity());
    }

    #[test]
    fn four_features_ship_enabled() {
        let on_by_default = FEATURES.iter().filter(|f| f.default_on).count();
        assert_eq!(on_by_default, 4);
    }
}
