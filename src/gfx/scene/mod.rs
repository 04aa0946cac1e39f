//! # Scene Data Module
//!
//! The state a configured scene owns: camera, point lights, ground, models,
//! material set and registered hooks.
//!
//! ## Key Components
//!
//! - [`SceneEntry`] - One configured scene
//! - [`Light`] - Point light with a movable position
//! - [`Model`] - Placed mesh plus the metadata its shader reads
//! - [`SceneHook`] - Behavior driven by keyboard input or frame rendering

pub mod light;
pub mod model;
pub mod scene;

// Re-export main types
pub use light::Light;
pub use model::{Model, ModelMetadata, TerrainMetadata};
pub use scene::{SceneEntry, SceneEnvironment, SceneHook};
