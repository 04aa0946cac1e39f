// src/gfx/resources/mod.rs
//! Engine resource references
//!
//! Materials, textures and the per-frame lighting uniforms handed to shaders.

pub mod material;
pub mod texture;
pub mod uniforms;

// Re-export main types
pub use material::{MaterialHandle, MaterialSet, MaterialVariant};
pub use texture::{TextureHandle, TextureSource};
pub use uniforms::{LightingUniform, ShaderUniforms, MAX_LIGHTS};
