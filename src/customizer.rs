//! Customizer state controller for the LuminX glasses configuration.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{self, Feature, FrameFinish, LensTint, Rgb};
use crate::profile::CustomizationProfile;

/// The fixed pre-order price, in US cents.
///
/// The price is displayed next to the configuration but is not derived from
/// it. Keeping it an explicit constant makes that visible at the call site.
pub const PRICE_USD_CENTS: u32 = 49_999;

/// Formats [`PRICE_USD_CENTS`] the way the order summary shows it.
pub fn display_price() -> String {
    format!("${}.{:02}", PRICE_USD_CENTS / 100, PRICE_USD_CENTS % 100)
}

// ============================================================================
// InvalidSelection
// ============================================================================

/// Error returned when an operation names an option outside the catalogs.
///
/// The palette/checkbox UI can only produce catalog ids, so this is
/// unreachable through it; callers feeding arbitrary input (profile import,
/// the wasm bridge) get a real error instead of silent acceptance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("unknown frame finish {0:?}")]
    FrameFinish(String),

    #[error("unknown lens tint {0:?}")]
    LensTint(String),

    #[error("unknown feature {0:?}")]
    Feature(String),
}

// ============================================================================
// ProductConfiguration
// ============================================================================

/// The current product configuration: one frame finish, one lens tint, a
/// lens darkness override, and the enabled feature set.
///
/// There is no "none selected" state; a fresh configuration starts on the
/// first catalog entries with the catalog's default features enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductConfiguration {
    frame_finish: &'static FrameFinish,
    lens_tint: &'static LensTint,
    /// Display darkness on a 0-100 scale. Set from the tint's
    /// opacity-at-rest on every tint selection, then owned by the slider
    /// until the next selection (last writer wins).
    lens_darkness: f32,
    features: BTreeSet<&'static str>,
}

impl Default for ProductConfiguration {
    fn default() -> Self {
        let lens_tint = &catalog::LENS_TINTS[0];
        Self {
            frame_finish: &catalog::FRAME_FINISHES[0],
            lens_tint,
            lens_darkness: lens_tint.opacity * 100.0,
            features: catalog::FEATURES
                .iter()
                .filter(|f| f.default_on)
                .map(|f| f.id)
                .collect(),
        }
    }
}

impl ProductConfiguration {
    /// The selected frame finish.
    pub fn frame_finish(&self) -> &'static FrameFinish {
        self.frame_finish
    }

    /// The selected lens tint.
    pub fn lens_tint(&self) -> &'static LensTint {
        self.lens_tint
    }

    /// The current lens darkness on a 0-100 scale.
    pub fn lens_darkness(&self) -> f32 {
        self.lens_darkness
    }

    /// Returns true if the feature with the given id is enabled.
    pub fn has_feature(&self, id: &str) -> bool {
        self.features.contains(id)
    }

    /// Iterates over the enabled features in catalog order.
    pub fn enabled_features(&self) -> impl Iterator<Item = &'static Feature> + '_ {
        catalog::FEATURES
            .iter()
            .filter(|f| self.features.contains(f.id))
    }
}

// ============================================================================
// RenderState
// ============================================================================

/// Immutable snapshot consumed by the preview renderer.
///
/// A pure derivation of [`ProductConfiguration`]; recomputed on every call
/// so the renderer always reflects the latest selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RenderState {
    /// Frame material color.
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub frame_color: Rgb,
    /// Lens material color.
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub lens_color: Rgb,
    /// Lens opacity as a 0.0-1.0 fraction.
    pub lens_opacity: f32,
    /// Lens metalness as a 0.0-1.0 fraction.
    pub lens_metalness: f32,
}

// ============================================================================
// GlassesCustomizer
// ============================================================================

/// The customizer state controller.
///
/// Owns the [`ProductConfiguration`] and exposes the discrete operations the
/// customization dialog drives. The controller has no rendering or network
/// side effects; the preview renderer consumes [`render_state`](Self::render_state)
/// snapshots and the order flow consumes the buyer's form fields separately.
///
/// # Change tracking
///
/// Every operation that actually changes state bumps [`version`](Self::version).
/// A renderer binding compares versions to issue exactly one redraw per
/// change instead of redrawing unconditionally.
///
/// # Example
///
/// ```
/// use luminx_customizer::GlassesCustomizer;
///
/// let mut customizer = GlassesCustomizer::new();
/// customizer.select_frame_finish("matte-black")?;
/// customizer.select_lens_tint("night-mode")?;
/// customizer.set_lens_darkness(80.0);
///
/// let state = customizer.render_state();
/// assert_eq!(state.lens_opacity, 0.8);
/// # Ok::<(), luminx_customizer::InvalidSelection>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlassesCustomizer {
    config: ProductConfiguration,
    version: u64,
}

impl GlassesCustomizer {
    /// Creates a controller with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current configuration.
    pub fn configuration(&self) -> &ProductConfiguration {
        &self.config
    }

    /// Monotonic change counter. Bumped only when an operation changes
    /// state, so equal versions mean an identical configuration.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Selects a frame finish by catalog id.
    ///
    /// Unknown ids fail with [`InvalidSelection::FrameFinish`].
    pub fn select_frame_finish(&mut self, id: &str) -> Result<(), InvalidSelection> {
        let finish =
            catalog::frame_finish(id).ok_or_else(|| InvalidSelection::FrameFinish(id.into()))?;
        if self.config.frame_finish.id != finish.id {
            self.config.frame_finish = finish;
            self.bump();
            debug!(finish = finish.id, "frame finish selected");
        }
        Ok(())
    }

    /// Selects a lens tint by catalog id.
    ///
    /// Selecting a tint resets the lens darkness to the tint's
    /// opacity-at-rest (on the 0-100 scale); metalness follows the tint's
    /// declared value. Re-selecting the current tint still resets a slider
    /// override.
    pub fn select_lens_tint(&mut self, id: &str) -> Result<(), InvalidSelection> {
        let tint = catalog::lens_tint(id).ok_or_else(|| InvalidSelection::LensTint(id.into()))?;
        let darkness = tint.opacity * 100.0;
        if self.config.lens_tint.id != tint.id || self.config.lens_darkness != darkness {
            self.config.lens_tint = tint;
            self.config.lens_darkness = darkness;
            self.bump();
            debug!(tint = tint.id, "lens tint selected");
        }
        Ok(())
    }

    /// Sets the lens darkness on a 0-100 scale.
    ///
    /// Out-of-range input is clamped, not rejected; the slider can't produce
    /// it but a misbehaving host shouldn't panic the controller. Non-finite
    /// input is ignored. Once set, darkness overrides the tint-derived
    /// opacity until the next tint selection.
    pub fn set_lens_darkness(&mut self, percent: f32) {
        if !percent.is_finite() {
            return;
        }
        let clamped = percent.clamp(0.0, 100.0);
        if self.config.lens_darkness != clamped {
            self.config.lens_darkness = clamped;
            self.bump();
        }
    }

    /// Flips membership of a feature by catalog id, returning the new state.
    ///
    /// Unknown ids fail with [`InvalidSelection::Feature`]. Toggling twice
    /// restores the original membership.
    pub fn toggle_feature(&mut self, id: &str) -> Result<bool, InvalidSelection> {
        let feature = catalog::feature(id).ok_or_else(|| InvalidSelection::Feature(id.into()))?;
        let enabled = if self.config.features.remove(feature.id) {
            false
        } else {
            self.config.features.insert(feature.id);
            true
        };
        self.bump();
        debug!(feature = feature.id, enabled, "feature toggled");
        Ok(enabled)
    }

    /// Computes the render snapshot from the current configuration.
    ///
    /// Pure and recomputed on every call; there is deliberately no cache to
    /// go stale between a selection and the next redraw.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            frame_color: self.config.frame_finish.color,
            lens_color: self.config.lens_tint.color,
            lens_opacity: self.config.lens_darkness / 100.0,
            lens_metalness: self.config.lens_tint.metalness_or_default(),
        }
    }
}

// ============================================================================
// Configurable
// ============================================================================

/// Trait for types that can be configured from a [`CustomizationProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    ///
    /// Fails without partial application if the profile names options
    /// outside the catalogs.
    fn apply_profile(&mut self, profile: &CustomizationProfile) -> Result<(), InvalidSelection>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> CustomizationProfile;
}

impl Configurable for GlassesCustomizer {
    fn apply_profile(&mut self, profile: &CustomizationProfile) -> Result<(), InvalidSelection> {
        // Validate everything before touching state so a bad profile leaves
        // the configuration untouched.
        let finish = catalog::frame_finish(&profile.frame_finish)
            .ok_or_else(|| InvalidSelection::FrameFinish(profile.frame_finish.clone()))?;
        let tint = catalog::lens_tint(&profile.lens_tint)
            .ok_or_else(|| InvalidSelection::LensTint(profile.lens_tint.clone()))?;
        let mut features = BTreeSet::new();
        for id in &profile.features {
            let feature =
                catalog::feature(id).ok_or_else(|| InvalidSelection::Feature(id.clone()))?;
            features.insert(feature.id);
        }

        let darkness = match profile.lens_darkness {
            Some(percent) if percent.is_finite() => percent.clamp(0.0, 100.0),
            _ => tint.opacity * 100.0,
        };

        let next = ProductConfiguration {
            frame_finish: finish,
            lens_tint: tint,
            lens_darkness: darkness,
            features,
        };
        if next != self.config {
            self.config = next;
            self.bump();
        }
        Ok(())
    }

    fn export_profile(&self) -> CustomizationProfile {
        let tint_default = self.config.lens_tint.opacity * 100.0;
        let lens_darkness = if self.config.lens_darkness == tint_default {
            None
        } else {
            Some(self.config.lens_darkness)
        };

        CustomizationProfile {
            frame_finish: self.config.frame_finish.id.to_string(),
            lens_tint: self.config.lens_tint.id.to_string(),
            lens_darkness,
            features: self
                .config
                .enabled_features()
                .map(|f| f.id.to_string())
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FEATURES, FRAME_FINISHES, LENS_TINTS};
    use proptest::prelude::*;

    #[test]
    fn fresh_configuration_defaults() {
        let customizer = GlassesCustomizer::new();
        let config = customizer.configuration();

        assert_eq!(config.frame_finish().id, "electric-blue");
        assert_eq!(config.lens_tint().id, "clear");
        assert_eq!(config.lens_darkness(), 20.0);
        assert_eq!(config.enabled_features().count(), 4);
        assert!(config.has_feature("voice-assistant"));
        assert!(!config.has_feature("eye-tracking"));
        assert_eq!(customizer.version(), 0);
    }

    #[test]
    fn every_frame_finish_reaches_render_state() {
        for finish in FRAME_FINISHES {
            let mut customizer = GlassesCustomizer::new();
            customizer.select_frame_finish(finish.id).unwrap();
            assert_eq!(customizer.render_state().frame_color, finish.color);
        }
    }

    #[test]
    fn every_lens_tint_reaches_render_state() {
        for tint in LENS_TINTS {
            let mut customizer = GlassesCustomizer::new();
            customizer.select_lens_tint(tint.id).unwrap();

            let state = customizer.render_state();
            assert_eq!(state.lens_color, tint.color);
            assert!((state.lens_opacity - tint.opacity).abs() < 1e-6);
            assert_eq!(state.lens_metalness, tint.metalness_or_default());
        }
    }

    #[test]
    fn darkness_overrides_tint_opacity_until_next_selection() {
        let mut customizer = GlassesCustomizer::new();
        customizer.select_lens_tint("blue-tint").unwrap();
        customizer.set_lens_darkness(90.0);
        assert_eq!(customizer.render_state().lens_opacity, 0.9);

        // A new tint selection resets to that tint's default.
        customizer.select_lens_tint("amber-tint").unwrap();
        assert!((customizer.render_state().lens_opacity - 0.3).abs() < 1e-6);
    }

    #[test]
    fn reselecting_current_tint_resets_slider_override() {
        let mut customizer = GlassesCustomizer::new();
        customizer.select_lens_tint("night-mode").unwrap();
        customizer.set_lens_darkness(10.0);

        customizer.select_lens_tint("night-mode").unwrap();
        assert_eq!(customizer.render_state().lens_opacity, 0.5);
    }

    #[test]
    fn darkness_clamps_out_of_range_input() {
        let mut customizer = GlassesCustomizer::new();

        customizer.set_lens_darkness(250.0);
        assert_eq!(customizer.render_state().lens_opacity, 1.0);

        customizer.set_lens_darkness(-30.0);
        assert_eq!(customizer.render_state().lens_opacity, 0.0);

        // Non-finite input is ignored rather than poisoning the state.
        customizer.set_lens_darkness(f32::NAN);
        assert_eq!(customizer.render_state().lens_opacity, 0.0);
    }

    #[test]
    fn toggle_feature_is_an_involution() {
        for feature in FEATURES {
            let mut customizer = GlassesCustomizer::new();
            let before = customizer.configuration().has_feature(feature.id);

            let flipped = customizer.toggle_feature(feature.id).unwrap();
            assert_eq!(flipped, !before);

            customizer.toggle_feature(feature.id).unwrap();
            assert_eq!(customizer.configuration().has_feature(feature.id), before);
        }
    }

    #[test]
    fn unknown_selections_are_rejected() {
        let mut customizer = GlassesCustomizer::new();

        assert_eq!(
            customizer.select_frame_finish("chrome"),
            Err(InvalidSelection::FrameFinish("chrome".into()))
        );
        assert_eq!(
            customizer.select_lens_tint("mirror"),
            Err(InvalidSelection::LensTint("mirror".into()))
        );
        assert_eq!(
            customizer.toggle_feature("teleport"),
            Err(InvalidSelection::Feature("teleport".into()))
        );

        // Failed operations leave state and version untouched.
        assert_eq!(customizer.version(), 0);
        assert_eq!(*customizer.configuration(), ProductConfiguration::default());
    }

    #[test]
    fn version_bumps_only_on_real_change() {
        let mut customizer = GlassesCustomizer::new();
        assert_eq!(customizer.version(), 0);

        customizer.select_frame_finish("matte-black").unwrap();
        assert_eq!(customizer.version(), 1);

        // Same finish again: no change, no bump.
        customizer.select_frame_finish("matte-black").unwrap();
        assert_eq!(customizer.version(), 1);

        // Same darkness value: no bump.
        customizer.set_lens_darkness(20.0);
        assert_eq!(customizer.version(), 1);

        customizer.set_lens_darkness(55.0);
        assert_eq!(customizer.version(), 2);

        // Re-selecting the current tint resets the override, which is a change.
        customizer.select_lens_tint("clear").unwrap();
        assert_eq!(customizer.version(), 3);
    }

    #[test]
    fn price_is_a_constant() {
        assert_eq!(PRICE_USD_CENTS, 49_999);
        assert_eq!(display_price(), "$499.99");
    }

    #[test]
    fn profile_roundtrip_preserves_configuration() {
        let mut customizer = GlassesCustomizer::new();
        customizer.select_frame_finish("rose-gold").unwrap();
        customizer.select_lens_tint("purple-tint").unwrap();
        customizer.set_lens_darkness(72.0);
        customizer.toggle_feature("eye-tracking").unwrap();
        customizer.toggle_feature("camera").unwrap();

        let profile = customizer.export_profile();
        let mut restored = GlassesCustomizer::new();
        restored.apply_profile(&profile).unwrap();

        assert_eq!(restored.configuration(), customizer.configuration());
        assert_eq!(restored.render_state(), customizer.render_state());
    }

    #[test]
    fn bad_profile_leaves_state_untouched() {
        let mut customizer = GlassesCustomizer::new();
        customizer.select_frame_finish("matte-black").unwrap();
        let before = customizer.configuration().clone();

        let profile = CustomizationProfile {
            frame_finish: "rose-gold".into(),
            lens_tint: "night-mode".into(),
            lens_darkness: None,
            features: vec!["navigation".into(), "hologram".into()],
        };
        assert_eq!(
            customizer.apply_profile(&profile),
            Err(InvalidSelection::Feature("hologram".into()))
        );
        assert_eq!(*customizer.configuration(), before);
    }

    proptest! {
        #[test]
        fn darkness_maps_to_opacity(percent in 0.0f32..=100.0) {
            let mut customizer = GlassesCustomizer::new();
            customizer.set_lens_darkness(percent);
            let state = customizer.render_state();
            prop_assert!((state.lens_opacity - percent / 100.0).abs() < 1e-6);
        }

        #[test]
        fn arbitrary_darkness_stays_in_unit_range(percent in -1e6f32..=1e6) {
            let mut customizer = GlassesCustomizer::new();
            customizer.set_lens_darkness(percent);
            let opacity = customizer.render_state().lens_opacity;
            prop_assert!((0.0..=1.0).contains(&opacity));
        }
    }
}
