//! Error types for scene registry operations
//!
//! Every error is raised at the call that caused it. A failed call leaves the
//! registry exactly as it was before the call.

use std::fmt;

/// Failure to load a texture or heightmap through the render context
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("failed to load asset '{path}': {reason}")]
pub struct AssetError {
    pub path: String,
    pub reason: String,
}

impl AssetError {
    pub fn new(path: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Which texture slot of a scene an asset was meant for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSlot {
    /// The plain white texture other slots fall back to
    FallbackTexture,
    GroundTexture,
    GroundHeightmap,
    ModelTexture(String),
}

impl fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSlot::FallbackTexture => write!(f, "fallback texture"),
            AssetSlot::GroundTexture => write!(f, "ground texture"),
            AssetSlot::GroundHeightmap => write!(f, "ground heightmap"),
            AssetSlot::ModelTexture(model) => write!(f, "texture of model '{}'", model),
        }
    }
}

/// Centralized error type for all registry operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("scene index {index} out of range ({count} scenes)")]
    InvalidSceneIndex { index: usize, count: usize },

    #[error("light index {index} out of range for scene {scene} ({count} lights)")]
    InvalidLightIndex {
        index: usize,
        scene: usize,
        count: usize,
    },

    #[error("unknown shading algorithm '{name}': scene {scene} has no material '{material}'")]
    UnknownShadingAlgorithm {
        name: String,
        scene: usize,
        material: String,
    },

    #[error("scene {scene}: could not load {slot}")]
    AssetLoadFailure {
        scene: usize,
        slot: AssetSlot,
        #[source]
        source: AssetError,
    },
}
