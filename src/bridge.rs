//! WASM bridge for the frontend customizer dialog.
//!
//! This module is only available with the `wasm` feature enabled:
//!
//! ```toml
//! [dependencies]
//! luminx-customizer = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! The bridge wraps a [`GlassesCustomizer`] behind id-based setters and
//! snapshot getters. The frontend's scene-graph renderer pulls
//! [`renderState`](CustomizerBridge::render_state) (or the full
//! [`sceneDescription`](CustomizerBridge::scene_description)) after each
//! change and redraws from it; no pixels cross the boundary.
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { CustomizerBridge } from 'luminx-customizer';
//!
//! await init();
//!
//! const bridge = new CustomizerBridge();
//! bridge.selectFrameFinish('matte-black');
//! bridge.setLensDarkness(80);
//!
//! if (bridge.version() !== lastDrawn) {
//!   redraw(bridge.renderState());
//!   lastDrawn = bridge.version();
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::customizer::{Configurable, GlassesCustomizer, display_price};
use crate::profile::CustomizationProfile;
use crate::scene::{OrbitSettings, SceneDescription};

/// A [`GlassesCustomizer`] exposed to JavaScript via wasm-bindgen.
#[wasm_bindgen]
#[derive(Default)]
pub struct CustomizerBridge {
    customizer: GlassesCustomizer,
}

#[wasm_bindgen]
impl CustomizerBridge {
    /// Creates a bridge with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CustomizerBridge {
        Self::default()
    }

    // ---- Selections ----

    /// Selects a frame finish by catalog id.
    #[wasm_bindgen(js_name = "selectFrameFinish")]
    pub fn select_frame_finish(&mut self, id: &str) -> Result<(), JsError> {
        self.customizer.select_frame_finish(id)?;
        Ok(())
    }

    /// Selects a lens tint by catalog id, resetting the darkness slider to
    /// the tint's default.
    #[wasm_bindgen(js_name = "selectLensTint")]
    pub fn select_lens_tint(&mut self, id: &str) -> Result<(), JsError> {
        self.customizer.select_lens_tint(id)?;
        Ok(())
    }

    /// Sets the lens darkness on a 0-100 scale; out-of-range values clamp.
    #[wasm_bindgen(js_name = "setLensDarkness")]
    pub fn set_lens_darkness(&mut self, percent: f32) {
        self.customizer.set_lens_darkness(percent);
    }

    /// Toggles a feature by catalog id; returns the new enabled state.
    #[wasm_bindgen(js_name = "toggleFeature")]
    pub fn toggle_feature(&mut self, id: &str) -> Result<bool, JsError> {
        Ok(self.customizer.toggle_feature(id)?)
    }

    // ---- Snapshots ----

    /// Monotonic change counter; compare to skip redundant redraws.
    pub fn version(&self) -> f64 {
        self.customizer.version() as f64
    }

    /// The current render snapshot as a plain JS object.
    #[wasm_bindgen(js_name = "renderState")]
    pub fn render_state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.customizer.render_state())?)
    }

    /// The full scene description for the customizer dialog viewport.
    #[wasm_bindgen(js_name = "sceneDescription")]
    pub fn scene_description(&self) -> Result<JsValue, JsError> {
        let scene = SceneDescription::new(&self.customizer.render_state(), OrbitSettings::dialog());
        Ok(serde_wasm_bindgen::to_value(&scene)?)
    }

    /// The displayed price string for the order summary.
    #[wasm_bindgen(js_name = "displayPrice")]
    pub fn display_price(&self) -> String {
        display_price()
    }

    // ---- Profile Import/Export ----

    /// Exports the current selections as a JSON string.
    #[wasm_bindgen(js_name = "exportProfileJson")]
    pub fn export_profile_json(&self) -> Result<String, JsError> {
        Ok(self.customizer.export_profile().to_json()?)
    }

    /// Imports selections from a JSON string, validating ids against the
    /// catalogs.
    #[wasm_bindgen(js_name = "importProfileJson")]
    pub fn import_profile_json(&mut self, json: &str) -> Result<(), JsError> {
        let profile = CustomizationProfile::from_json(json)?;
        self.customizer.apply_profile(&profile)?;
        Ok(())
    }

    /// Returns to the default configuration.
    pub fn reset(&mut self) {
        self.customizer = GlassesCustomizer::new();
    }
}
