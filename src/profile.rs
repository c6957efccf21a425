//! Serializable customization profile for frontend/backend transfer.
//!
//! A [`CustomizationProfile`] captures the controller's selections in a
//! JSON-friendly format: catalog ids rather than resolved catalog entries,
//! so the payload stays small and the engine re-validates on import.
//!
//! # Example
//!
//! ```
//! use luminx_customizer::CustomizationProfile;
//!
//! let profile = CustomizationProfile::new()
//!     .with_frame_finish("matte-black")
//!     .with_lens_tint("night-mode")
//!     .with_lens_darkness(80.0)
//!     .with_feature("eye-tracking");
//!
//! let json = profile.to_json().unwrap();
//! let restored = CustomizationProfile::from_json(&json).unwrap();
//! assert_eq!(restored.lens_tint, "night-mode");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog;

/// A serializable snapshot of the customizer's selections.
///
/// # JSON Format
///
/// ```json
/// {
///   "frameFinish": "matte-black",
///   "lensTint": "night-mode",
///   "lensDarkness": 80.0,
///   "features": ["voice-assistant", "navigation"]
/// }
/// ```
///
/// `lensDarkness` is present only when the slider has overridden the tint's
/// default opacity; absent means "use the tint's opacity-at-rest".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CustomizationProfile {
    /// Frame finish catalog id.
    pub frame_finish: String,

    /// Lens tint catalog id.
    pub lens_tint: String,

    /// Slider override for lens darkness (0-100). `None` means the tint's
    /// default applies.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lens_darkness: Option<f32>,

    /// Ids of the enabled features.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Default for CustomizationProfile {
    /// The profile of a fresh configuration: first catalog entries, the
    /// catalog's default features, no darkness override.
    fn default() -> Self {
        Self {
            frame_finish: catalog::FRAME_FINISHES[0].id.to_string(),
            lens_tint: catalog::LENS_TINTS[0].id.to_string(),
            lens_darkness: None,
            features: catalog::FEATURES
                .iter()
                .filter(|f| f.default_on)
                .map(|f| f.id.to_string())
                .collect(),
        }
    }
}

impl CustomizationProfile {
    /// Creates the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frame finish id.
    pub fn with_frame_finish(mut self, id: impl Into<String>) -> Self {
        self.frame_finish = id.into();
        self
    }

    /// Sets the lens tint id.
    pub fn with_lens_tint(mut self, id: impl Into<String>) -> Self {
        self.lens_tint = id.into();
        self
    }

    /// Sets a lens darkness override.
    pub fn with_lens_darkness(mut self, percent: f32) -> Self {
        self.lens_darkness = Some(percent);
        self
    }

    /// Adds a feature id to the enabled set if not already present.
    pub fn with_feature(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.features.contains(&id) {
            self.features.push(id);
        }
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    ///
    /// Parsing does not validate ids against the catalogs; that happens on
    /// [`Configurable::apply_profile`](crate::Configurable::apply_profile).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
