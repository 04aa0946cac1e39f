//! # Graphics Module
//!
//! Everything a demo scene is made of, expressed as data the rendering engine
//! consumes through the [`RenderContext`] trait.
//!
//! ## Architecture Overview
//!
//! - **Camera** ([`camera`]) - First person camera, view projection math and mouse navigation
//! - **Geometry** ([`geometry`]) - Mesh descriptors and wireframe placement
//! - **Resources** ([`resources`]) - Material sets, textures and lighting uniforms
//! - **Scene** ([`scene`]) - Lights, models and the configured scene entry
//! - **Context** ([`context`]) - The engine seam
//! - **Headless** ([`headless`]) - A recording context for running without a GPU
//!
//! The engine owns tessellation, shader programs and drawing. This module only
//! decides what exists, where it is and which material it is bound to.

pub mod camera;
pub mod context;
pub mod geometry;
pub mod headless;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, CameraController, UniversalCamera};
pub use context::{MeshHandle, RenderContext, SceneId};
pub use headless::HeadlessContext;
