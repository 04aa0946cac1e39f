// src/lib.rs
//! Haggis Scenes
//!
//! A registry of demo scenes for interactive shading experiments, built on top
//! of whatever engine implements [`gfx::RenderContext`].

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod registry;

// Re-export main types for convenience
pub use app::SceneApp;
pub use config::RegistryConfig;
pub use error::{AssetError, SceneError};
pub use registry::SceneRegistry;

/// Builds the registry on a [`gfx::HeadlessContext`] with both material variants
/// for every algorithm the demo host binds to keys
pub fn headless(config: RegistryConfig) -> Result<SceneRegistry<gfx::HeadlessContext>, SceneError> {
    SceneRegistry::new(
        &(),
        gfx::HeadlessContext::new(),
        |ctx, scene| ctx.material_set(scene, &["gouraud", "phong", "blinn"]),
        |ctx, scene, subdivisions| ctx.ground_mesh(scene, subdivisions),
        config,
    )
}
