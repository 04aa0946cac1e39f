pub mod camera_controller;
pub mod camera_utils;
pub mod universal_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{Camera, CameraUniform};
pub use universal_camera::UniversalCamera;
