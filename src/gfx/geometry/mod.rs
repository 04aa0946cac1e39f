//! # Mesh Descriptors
//!
//! Shapes are described, never tessellated here: the render context turns a
//! [`MeshDescriptor`] into engine geometry. The only geometry computed locally is
//! the placement of the edge struts around a wireframe (see [`wireframe`]).

pub mod wireframe;

pub use wireframe::{edge_lines, edge_struts, EdgeStrut, WIRE_CUBE_EDGES, WIRE_CUBE_VERTICES};

use cgmath::{One, Quaternion, Vector3};

use crate::gfx::context::MeshHandle;

/// Engine-side primitive to build
#[derive(Debug, Clone, PartialEq)]
pub enum MeshShape {
    Sphere { segments: u32, diameter: f32 },
    Box { width: f32, height: f32, depth: f32 },
    Cylinder { tessellation: u32 },
    IcoSphere { subdivisions: u32, radius: f32 },
    Hemisphere { segments: u32, diameter: f32 },
    /// Raw vertex data, indices taken pairwise as line segments
    Custom {
        positions: Vec<[f32; 3]>,
        indices: Vec<u32>,
    },
    LineSystem { lines: Vec<[[f32; 3]; 2]> },
}

impl MeshShape {
    pub fn kind(&self) -> &'static str {
        match self {
            MeshShape::Sphere { .. } => "sphere",
            MeshShape::Box { .. } => "box",
            MeshShape::Cylinder { .. } => "cylinder",
            MeshShape::IcoSphere { .. } => "icosphere",
            MeshShape::Hemisphere { .. } => "hemisphere",
            MeshShape::Custom { .. } => "custom",
            MeshShape::LineSystem { .. } => "lines",
        }
    }
}

/// Everything the context needs to create and place one mesh
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDescriptor {
    pub name: String,
    pub shape: MeshShape,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scaling: Vector3<f32>,
    /// Transforms are relative to this mesh when set
    pub parent: Option<MeshHandle>,
}

impl MeshDescriptor {
    pub fn new(name: &str, shape: MeshShape) -> Self {
        Self {
            name: name.to_string(),
            shape,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
            scaling: Vector3::new(1.0, 1.0, 1.0),
            parent: None,
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_parent(mut self, parent: MeshHandle) -> Self {
        self.parent = Some(parent);
        self
    }
}
