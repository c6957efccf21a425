//! The parametric glasses model.
//!
//! A declarative composition of primitives mirroring the product's preview
//! mesh: a frame bar with two torus lens mounts, two tinted lens discs, two
//! temples, and the floating AR display elements in front of the lenses.
//! No geometry is computed here; the renderer instantiates the primitives.

use serde::Serialize;

use super::{
    CameraSpec, ContactShadowSpec, MaterialSpec, OrbitSettings, Primitive, SceneNodeName,
    SpotLightSpec, Vec3,
};
use crate::customizer::RenderState;

/// Frame material surface parameters.
const FRAME_ROUGHNESS: f32 = 0.3;
const FRAME_METALNESS: f32 = 0.8;

/// Lens disc surface roughness.
const LENS_ROUGHNESS: f32 = 0.1;

/// Opacity of the floating AR display panel.
const HUD_OPACITY: f32 = 0.7;

/// A named primitive with a material and placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub name: SceneNodeName,
    pub primitive: Primitive,
    pub material: MaterialSpec,
    pub position: Vec3,
}

/// Everything the renderer needs to draw one frame of the preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    pub camera: CameraSpec,
    pub ambient_intensity: f32,
    pub spot_light: SpotLightSpec,
    pub contact_shadow: ContactShadowSpec,
    pub orbit: OrbitSettings,
    pub nodes: Vec<SceneNode>,
}

impl SceneDescription {
    /// Builds the preview scene for the given render state and viewport.
    pub fn new(state: &RenderState, orbit: OrbitSettings) -> Self {
        Self {
            camera: CameraSpec::default(),
            ambient_intensity: 0.5,
            spot_light: SpotLightSpec::default(),
            contact_shadow: ContactShadowSpec::default(),
            orbit,
            nodes: glasses_model(state),
        }
    }
}

/// Composes the glasses model from a render snapshot.
///
/// Frame parts share the frame material; the two lens discs carry the
/// tint's color/opacity/metalness; the HUD panel and status dot glow in the
/// lens and frame colors respectively.
pub fn glasses_model(state: &RenderState) -> Vec<SceneNode> {
    let frame = MaterialSpec::solid(state.frame_color, FRAME_ROUGHNESS, FRAME_METALNESS);
    let lens = MaterialSpec::translucent(
        state.lens_color,
        LENS_ROUGHNESS,
        state.lens_metalness,
        state.lens_opacity,
    );

    let lens_mount = Primitive::Torus {
        radius: 0.15,
        tube: 0.03,
        radial_segments: 16,
        tubular_segments: 100,
    };
    let lens_disc = Primitive::Disc {
        radius: 0.14,
        segments: 32,
    };
    let temple = Primitive::Cuboid {
        width: 0.3,
        height: 0.04,
        depth: 0.04,
    };

    vec![
        SceneNode {
            name: SceneNodeName::FrameBar,
            primitive: Primitive::Cuboid {
                width: 0.8,
                height: 0.08,
                depth: 0.08,
            },
            material: frame,
            position: Vec3::ZERO,
        },
        SceneNode {
            name: SceneNodeName::LensMountLeft,
            primitive: lens_mount,
            material: frame,
            position: Vec3::new(-0.3, 0.0, 0.1),
        },
        SceneNode {
            name: SceneNodeName::LensMountRight,
            primitive: lens_mount,
            material: frame,
            position: Vec3::new(0.3, 0.0, 0.1),
        },
        SceneNode {
            name: SceneNodeName::LensLeft,
            primitive: lens_disc,
            material: lens,
            position: Vec3::new(-0.3, 0.0, 0.08),
        },
        SceneNode {
            name: SceneNodeName::LensRight,
            primitive: lens_disc,
            material: lens,
            position: Vec3::new(0.3, 0.0, 0.08),
        },
        SceneNode {
            name: SceneNodeName::TempleLeft,
            primitive: temple,
            material: frame,
            position: Vec3::new(-0.46, 0.0, -0.05),
        },
        SceneNode {
            name: SceneNodeName::TempleRight,
            primitive: temple,
            material: frame,
            position: Vec3::new(0.46, 0.0, -0.05),
        },
        // Floating AR display elements in front of the lenses
        SceneNode {
            name: SceneNodeName::HudPanel,
            primitive: Primitive::Panel {
                width: 0.4,
                height: 0.1,
            },
            material: MaterialSpec::translucent(state.lens_color, 0.5, 0.0, HUD_OPACITY)
                .with_emissive(state.lens_color, 1.0),
            position: Vec3::new(0.0, 0.18, 0.3),
        },
        SceneNode {
            name: SceneNodeName::StatusDot,
            primitive: Primitive::Disc {
                radius: 0.03,
                segments: 32,
            },
            material: MaterialSpec::solid(state.frame_color, 0.5, 0.0)
                .with_emissive(state.frame_color, 1.0),
            position: Vec3::new(0.2, 0.1, 0.25),
        },
    ]
}

// ============================================================================
// Tests
// ============================================================================
