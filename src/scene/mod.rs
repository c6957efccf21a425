//! Preview renderer contract and scene description.
//!
//! The engine never draws anything itself. It hands the frontend's
//! scene-graph renderer two things:
//!
//! - a [`RenderState`] snapshot (colors/opacity/metalness), consumed through
//!   the [`PreviewRenderer`] trait, and
//! - optionally a full declarative [`SceneDescription`] (primitives,
//!   materials, camera, lights) built by [`model`] for renderers that want
//!   the parametric glasses model rather than composing their own.
//!
//! [`PreviewBinding`] is the explicit observer between controller and
//! renderer: a configuration change triggers exactly one recomputation of
//! the render state and one redraw call, never an implicit re-render.

pub mod model;
pub mod motion;

pub use model::{glasses_model, SceneDescription, SceneNode};

use serde::Serialize;

use crate::catalog::Rgb;
use crate::customizer::{GlassesCustomizer, RenderState};

// ============================================================================
// Scene Value Types
// ============================================================================

/// A position in the preview scene's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Identifies a part of the glasses model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneNodeName {
    FrameBar,
    LensMountLeft,
    LensMountRight,
    LensLeft,
    LensRight,
    TempleLeft,
    TempleRight,
    HudPanel,
    StatusDot,
}

/// A geometric primitive the renderer knows how to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    /// An axis-aligned box.
    Cuboid { width: f32, height: f32, depth: f32 },
    /// A torus ring.
    #[serde(rename_all = "camelCase")]
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// A flat filled circle.
    Disc { radius: f32, segments: u32 },
    /// A flat rectangle.
    Panel { width: f32, height: f32 },
}

/// An emissive component of a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emissive {
    pub color: Rgb,
    pub intensity: f32,
}

/// A physically-based material description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSpec {
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    /// Opacity as a 0.0-1.0 fraction; `None` means fully opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissive: Option<Emissive>,
}

impl MaterialSpec {
    /// An opaque material.
    pub fn solid(color: Rgb, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            roughness,
            metalness,
            opacity: None,
            emissive: None,
        }
    }

    /// A transparent material.
    pub fn translucent(color: Rgb, roughness: f32, metalness: f32, opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::solid(color, roughness, metalness)
        }
    }

    /// Adds a self-illuminating component.
    pub fn with_emissive(mut self, color: Rgb, intensity: f32) -> Self {
        self.emissive = Some(Emissive { color, intensity });
        self
    }
}

// ============================================================================
// Camera, Lights, Controls
// ============================================================================

/// Perspective camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSpec {
    pub position: Vec3,
    pub fov_degrees: f32,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            fov_degrees: 50.0,
        }
    }
}

/// The single spot light used by the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotLightSpec {
    pub position: Vec3,
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
}

impl Default for SpotLightSpec {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            angle: 0.15,
            penumbra: 1.0,
            intensity: 1.0,
        }
    }
}

/// The soft shadow plane under the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactShadowSpec {
    pub opacity: f32,
    pub scale: f32,
    pub blur: f32,
    pub far: f32,
    pub resolution: u32,
}

impl Default for ContactShadowSpec {
    fn default() -> Self {
        Self {
            opacity: 0.5,
            scale: 10.0,
            blur: 1.0,
            far: 10.0,
            resolution: 256,
        }
    }
}

/// Orbit-control behavior for the preview viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSettings {
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    pub auto_rotate: bool,
    /// Revolutions per minute when auto-rotating.
    pub auto_rotate_speed: f32,
}

impl OrbitSettings {
    /// The customizer dialog viewport: user-rotatable, zoomable, spinning.
    pub fn dialog() -> Self {
        Self {
            enable_zoom: true,
            enable_pan: false,
            enable_rotate: true,
            auto_rotate: true,
            auto_rotate_speed: 2.0,
        }
    }

    /// The hero viewport: slow idle spin, manual rotation only on hover.
    pub fn hero(hovered: bool) -> Self {
        Self {
            enable_zoom: false,
            enable_pan: false,
            enable_rotate: hovered,
            auto_rotate: !hovered,
            auto_rotate_speed: 0.5,
        }
    }
}

// ============================================================================
// PreviewRenderer / PreviewBinding
// ============================================================================

/// The black-box renderer the frontend supplies.
///
/// Implementations receive a [`RenderState`] snapshot and redraw however
/// they like; the engine makes no assumption beyond "redraw reflects the
/// snapshot it was given".
pub trait PreviewRenderer {
    fn redraw(&mut self, state: &RenderState);
}

/// Change-driven binding between a [`GlassesCustomizer`] and a renderer.
///
/// The host calls [`refresh`](Self::refresh) after dispatching UI events.
/// The binding compares the controller's version with the last one it drew,
/// so each configuration change produces exactly one `redraw` call and
/// untouched configurations produce none.
///
/// # Example
///
/// ```
/// use luminx_customizer::{GlassesCustomizer, PreviewBinding, PreviewRenderer, RenderState};
///
/// struct Recorder(Vec<RenderState>);
/// impl PreviewRenderer for Recorder {
///     fn redraw(&mut self, state: &RenderState) {
///         self.0.push(*state);
///     }
/// }
///
/// let mut customizer = GlassesCustomizer::new();
/// let mut binding = PreviewBinding::new(Recorder(Vec::new()));
///
/// binding.refresh(&customizer); // initial draw
/// customizer.select_frame_finish("rose-gold")?;
/// binding.refresh(&customizer); // one redraw for the change
/// binding.refresh(&customizer); // no change, no redraw
///
/// assert_eq!(binding.renderer().0.len(), 2);
/// # Ok::<(), luminx_customizer::InvalidSelection>(())
/// ```
pub struct PreviewBinding<R: PreviewRenderer> {
    renderer: R,
    last_drawn: Option<u64>,
}

impl<R: PreviewRenderer> PreviewBinding<R> {
    /// Wraps a renderer. The first refresh always draws.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            last_drawn: None,
        }
    }

    /// Redraws if the configuration changed since the last refresh.
    ///
    /// Returns true if a redraw happened.
    pub fn refresh(&mut self, customizer: &GlassesCustomizer) -> bool {
        let version = customizer.version();
        if self.last_drawn == Some(version) {
            return false;
        }
        let state = customizer.render_state();
        self.renderer.redraw(&state);
        self.last_drawn = Some(version);
        true
    }

    /// Read access to the wrapped renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Releases the wrapped renderer.
    pub fn into_inner(self) -> R {
        self.renderer
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingRenderer {
        redraws: Vec<RenderState>,
    }

    impl PreviewRenderer for CountingRenderer {
        fn redraw(&mut self, state: &RenderState) {
            self.redraws.push(*state);
        }
    }

    #[test]
    fn binding_draws_once_per_change() {
        let mut customizer = GlassesCustomizer::new();
        let mut binding = PreviewBinding::new(CountingRenderer::default());

        // Initial draw
        assert!(binding.refresh(&customizer));
        // No change since: no redraw
        assert!(!binding.refresh(&customizer));

        customizer.select_frame_finish("neon-purple").unwrap();
        assert!(binding.refresh(&customizer));
        assert!(!binding.refresh(&customizer));

        assert_eq!(binding.renderer().redraws.len(), 2);
    }

    #[test]
    fn binding_always_passes_fresh_state() {
        let mut customizer = GlassesCustomizer::new();
        let mut binding = PreviewBinding::new(CountingRenderer::default());

        customizer.select_lens_tint("night-mode").unwrap();
        customizer.set_lens_darkness(77.0);
        binding.refresh(&customizer);

        let drawn = binding.renderer().redraws.last().unwrap();
        assert_eq!(*drawn, customizer.render_state());
        assert_eq!(drawn.lens_opacity, 0.77);
    }

    #[test]
    fn no_op_operations_cause_no_redraw() {
        let mut customizer = GlassesCustomizer::new();
        let mut binding = PreviewBinding::new(CountingRenderer::default());
        binding.refresh(&customizer);

        // Selecting the already-selected finish changes nothing.
        customizer.select_frame_finish("electric-blue").unwrap();
        assert!(!binding.refresh(&customizer));
        assert_eq!(binding.renderer().redraws.len(), 1);
    }

    #[test]
    fn orbit_presets_match_viewports() {
        let dialog = OrbitSettings::dialog();
        assert!(dialog.enable_zoom && dialog.auto_rotate);
        assert_eq!(dialog.auto_rotate_speed, 2.0);

        let idle = OrbitSettings::hero(false);
        assert!(idle.auto_rotate && !idle.enable_rotate);

        let hovered = OrbitSettings::hero(true);
        assert!(!hovered.auto_rotate && hovered.enable_rotate);
    }

    #[test]
    fn material_serializes_compactly() {
        let solid = MaterialSpec::solid(Rgb::new(0x17, 0x17, 0x17), 0.3, 0.8);
        let json = serde_json::to_string(&solid).unwrap();
        assert!(!json.contains("opacity"));
        assert!(!json.contains("emissive"));

        let hud = MaterialSpec::translucent(Rgb::new(0x0E, 0xA5, 0xE9), 0.1, 0.0, 0.7)
            .with_emissive(Rgb::new(0x0E, 0xA5, 0xE9), 1.0);
        let json = serde_json::to_string(&hud).unwrap();
        assert!(json.contains("\"opacity\":0.7"));
        assert!(json.contains("\"intensity\":1.0"));
    }
}
