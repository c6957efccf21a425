//! luminx-customizer: headless engine for the LuminX glasses configurator
//!
//! This crate owns the state behind the LuminX product-showcase frontend:
//! the customization controller (frame finish, lens tint, darkness, smart
//! features), the preview-renderer contract, pre-order and newsletter
//! submission, and the slideshow/countdown state the site drives from UI
//! timers. The frontend itself — DOM, styling, the scene-graph renderer,
//! the HTTP/database clients — stays outside; the engine exposes snapshots
//! and collaborator traits at those seams.
//!
//! # Example
//!
//! ```
//! use luminx_customizer::{Configurable, GlassesCustomizer};
//!
//! let mut customizer = GlassesCustomizer::new();
//! customizer.select_frame_finish("neon-purple")?;
//! customizer.select_lens_tint("amber-tint")?;
//! customizer.toggle_feature("eye-tracking")?;
//!
//! // The renderer consumes snapshots...
//! let state = customizer.render_state();
//! assert_eq!(state.frame_color.to_hex(), "#9B87F5");
//!
//! // ...and the frontend round-trips selections as JSON profiles.
//! let json = customizer.export_profile().to_json().unwrap();
//! # let _ = json;
//! # Ok::<(), luminx_customizer::InvalidSelection>(())
//! ```
//!
//! # Change-driven redraws
//!
//! Configuration changes bump [`GlassesCustomizer::version`]; a
//! [`PreviewBinding`] compares versions so each change produces exactly one
//! recomputation of [`RenderState`] and one redraw call. Renderers that
//! want more than the raw snapshot can draw the declarative
//! [`SceneDescription`] instead.

mod catalog;
mod countdown;
mod customizer;
mod order;
mod profile;
mod scene;
mod slideshow;
pub mod telemetry;
mod timing;

#[cfg(feature = "wasm")]
mod bridge;

#[cfg(feature = "wasm")]
pub use bridge::CustomizerBridge;

pub use catalog::{
    FEATURES, FRAME_FINISHES, Feature, FrameFinish, LENS_TINTS, LensTint, ParseColorError, Rgb,
    feature, frame_finish, lens_tint,
};
pub use countdown::{Countdown, TICK_MS, TimeRemaining, two_digits};
pub use customizer::{
    Configurable, GlassesCustomizer, InvalidSelection, PRICE_USD_CENTS, ProductConfiguration,
    RenderState, display_price,
};
pub use order::{
    DEFAULT_PRODUCT_COLOR, NewsletterSignup, NewsletterSink, PreOrderDraft, PreOrderRecord,
    PreOrderStore, PreOrderSubmission, SignupError, StoreError, SubmitError, ValidationError,
    ValidationErrors,
};
pub use profile::CustomizationProfile;
pub use scene::motion::{AutoOrbit, FloatMotion, HoverScale, Spring, lerp};
pub use scene::{
    CameraSpec, ContactShadowSpec, Emissive, MaterialSpec, OrbitSettings, PreviewBinding,
    PreviewRenderer, Primitive, SceneDescription, SceneNode, SceneNodeName, SpotLightSpec, Vec3,
    glasses_model,
};
pub use slideshow::{
    AUTO_ADVANCE_MS, Direction, PreloadTracker, Slide, Slideshow, default_slides,
};
pub use timing::Ticker;
