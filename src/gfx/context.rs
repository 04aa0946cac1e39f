//! The seam between the scene registry and the rendering engine
//!
//! The registry describes scenes; a [`RenderContext`] realizes them. Handles
//! returned by the context are opaque to the registry and only ever passed back.

use cgmath::Vector3;

use crate::{
    error::AssetError,
    gfx::{
        camera::UniversalCamera,
        geometry::MeshDescriptor,
        resources::{
            material::MaterialHandle,
            texture::{TextureHandle, TextureSource},
            uniforms::ShaderUniforms,
        },
        scene::{model::ModelMetadata, scene::SceneEnvironment},
    },
};

/// Engine scene created by [`RenderContext::create_scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub u64);

/// Engine mesh created by [`RenderContext::create_mesh`] or a ground mesh factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

pub trait RenderContext {
    /// Whatever the engine renders into (window, canvas, offscreen target)
    type Surface;

    fn create_scene(&mut self) -> SceneId;

    /// Applies clear color, ambient color and handedness
    fn configure_scene(&mut self, scene: SceneId, environment: &SceneEnvironment);

    /// Makes `camera` the scene's active camera on `surface`
    fn attach_camera(&mut self, scene: SceneId, camera: &UniversalCamera, surface: &Self::Surface);

    /// Replaces the scene's camera after the host moved it or the surface resized.
    /// [`Camera::uniform`](crate::gfx::camera::Camera::uniform) packs it for upload.
    fn update_camera(&mut self, scene: SceneId, camera: &UniversalCamera);

    fn create_mesh(&mut self, scene: SceneId, descriptor: &MeshDescriptor) -> MeshHandle;

    /// Rescales an existing mesh, used for meshes created by host factories
    fn set_scaling(&mut self, mesh: MeshHandle, scaling: Vector3<f32>);

    /// Starts loading a texture. Engines may finish asynchronously; only failures
    /// known at call time are reported.
    fn load_texture(
        &mut self,
        scene: SceneId,
        source: &TextureSource,
    ) -> Result<TextureHandle, AssetError>;

    fn bind_material(&mut self, mesh: MeshHandle, material: &MaterialHandle);

    fn set_metadata(&mut self, mesh: MeshHandle, metadata: &ModelMetadata);

    fn set_uniforms(&mut self, material: &MaterialHandle, uniforms: &ShaderUniforms);
}
