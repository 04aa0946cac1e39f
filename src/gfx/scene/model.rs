//! Placed meshes and the per-mesh values their shaders read
//!
//! Metadata lives as long as the model it describes. The ground is a regular
//! [`Model`] whose metadata carries an extra [`TerrainMetadata`] block.

use cgmath::Vector3;

use crate::gfx::{
    context::MeshHandle,
    resources::{material::MaterialHandle, texture::TextureHandle},
};

/// Heightmap parameters, only present on the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainMetadata {
    pub height_scalar: f32,
    pub heightmap: TextureHandle,
}

/// Per-mesh material parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetadata {
    pub color: [f32; 3],
    pub texture: TextureHandle,
    pub specular: [f32; 3],
    pub shininess: f32,
    pub texture_scale: [f32; 2],
    pub terrain: Option<TerrainMetadata>,
}

impl ModelMetadata {
    pub fn new(color: [f32; 3], texture: TextureHandle) -> Self {
        Self {
            color,
            texture,
            specular: [0.0, 0.0, 0.0],
            shininess: 1.0,
            texture_scale: [1.0, 1.0],
            terrain: None,
        }
    }

    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = [specular; 3];
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_terrain(mut self, height_scalar: f32, heightmap: TextureHandle) -> Self {
        self.terrain = Some(TerrainMetadata {
            height_scalar,
            heightmap,
        });
        self
    }

    pub fn height_scalar(&self) -> Option<f32> {
        self.terrain.map(|terrain| terrain.height_scalar)
    }
}

/// A mesh placed in a scene together with its material binding
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub mesh: MeshHandle,
    pub position: Vector3<f32>,
    pub scaling: Vector3<f32>,
    pub metadata: ModelMetadata,
    /// Always the variant for the registry's current shading algorithm once built
    pub material: Option<MaterialHandle>,
    /// Meshes parented to this one (wireframe lines, struts)
    pub children: Vec<MeshHandle>,
}

impl Model {
    pub fn new(name: &str, mesh: MeshHandle, metadata: ModelMetadata) -> Self {
        Self {
            name: name.to_string(),
            mesh,
            position: Vector3::new(0.0, 0.0, 0.0),
            scaling: Vector3::new(1.0, 1.0, 1.0),
            metadata,
            material: None,
            children: Vec::new(),
        }
    }

    pub fn material_name(&self) -> Option<&str> {
        self.material.as_ref().map(|m| m.name.as_str())
    }
}
