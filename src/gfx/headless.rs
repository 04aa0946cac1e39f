//! A render context that renders nothing and remembers everything
//!
//! Useful for running the registry without a GPU: tests inspect what was
//! recorded, and the demo binary logs it.

use std::collections::{HashMap, HashSet};

use cgmath::Vector3;

use crate::{
    error::AssetError,
    gfx::{
        camera::{Camera, CameraUniform, UniversalCamera},
        context::{MeshHandle, RenderContext, SceneId},
        geometry::MeshDescriptor,
        resources::{
            material::{MaterialHandle, MaterialSet, MaterialVariant},
            texture::{TextureHandle, TextureSource},
            uniforms::ShaderUniforms,
        },
        scene::{model::ModelMetadata, scene::SceneEnvironment},
    },
};

#[derive(Debug, Clone, Default)]
pub struct RecordedScene {
    pub environment: Option<SceneEnvironment>,
    pub camera: Option<UniversalCamera>,
    /// What an engine would upload for `camera`
    pub camera_uniform: Option<CameraUniform>,
    /// Calls to [`RenderContext::update_camera`]
    pub camera_updates: usize,
    pub meshes: Vec<MeshHandle>,
}

impl RecordedScene {
    fn record_camera(&mut self, camera: &UniversalCamera) {
        self.camera = Some(*camera);
        self.camera_uniform = Some(camera.uniform());
    }
}

#[derive(Debug, Clone)]
pub struct RecordedMesh {
    /// `None` for meshes registered through [`HeadlessContext::ground_mesh`]
    pub descriptor: Option<MeshDescriptor>,
    pub subdivisions: Option<[u32; 2]>,
    pub scaling: Vector3<f32>,
    pub material: Option<MaterialHandle>,
    pub metadata: Option<ModelMetadata>,
}

#[derive(Debug, Default)]
pub struct HeadlessContext {
    next_id: u64,
    scenes: Vec<RecordedScene>,
    meshes: HashMap<MeshHandle, RecordedMesh>,
    textures: HashMap<TextureHandle, TextureSource>,
    uniforms: HashMap<MaterialHandle, ShaderUniforms>,
    uniform_pushes: usize,
    missing: HashSet<String>,
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later load of `path` fail. Solid colors are matched by their
    /// `rgb(r, g, b)` form.
    pub fn mark_missing(&mut self, path: impl Into<String>) {
        self.missing.insert(path.into());
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Material factory: both variants for every algorithm, fresh handles per scene
    pub fn material_set(&mut self, _scene: SceneId, algorithms: &[&str]) -> MaterialSet {
        let mut set = MaterialSet::new();
        for algorithm in algorithms {
            for variant in MaterialVariant::ALL {
                let id = self.next_id();
                set.insert(MaterialHandle::new(id, &variant.material_name(algorithm)));
            }
        }
        set
    }

    /// Ground mesh factory
    pub fn ground_mesh(&mut self, scene: SceneId, subdivisions: [u32; 2]) -> MeshHandle {
        let handle = MeshHandle(self.next_id());
        self.register_mesh(scene, handle, None, Some(subdivisions));
        handle
    }

    fn register_mesh(
        &mut self,
        scene: SceneId,
        handle: MeshHandle,
        descriptor: Option<MeshDescriptor>,
        subdivisions: Option<[u32; 2]>,
    ) {
        let scaling = descriptor
            .as_ref()
            .map(|d| d.scaling)
            .unwrap_or(Vector3::new(1.0, 1.0, 1.0));
        self.meshes.insert(
            handle,
            RecordedMesh {
                descriptor,
                subdivisions,
                scaling,
                material: None,
                metadata: None,
            },
        );
        if let Some(recorded) = self.scene_record_mut(scene) {
            recorded.meshes.push(handle);
        }
    }

    fn scene_record_mut(&mut self, scene: SceneId) -> Option<&mut RecordedScene> {
        let index = (scene.0 as usize).checked_sub(1)?;
        self.scenes.get_mut(index)
    }

    pub fn scene_record(&self, scene: SceneId) -> Option<&RecordedScene> {
        let index = (scene.0 as usize).checked_sub(1)?;
        self.scenes.get(index)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&RecordedMesh> {
        self.meshes.get(&handle)
    }

    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureSource> {
        self.textures.get(&handle)
    }

    /// Last uniforms pushed into `material`
    pub fn uniforms(&self, material: &MaterialHandle) -> Option<&ShaderUniforms> {
        self.uniforms.get(material)
    }

    pub fn uniform_pushes(&self) -> usize {
        self.uniform_pushes
    }
}

impl RenderContext for HeadlessContext {
    type Surface = ();

    fn create_scene(&mut self) -> SceneId {
        self.scenes.push(RecordedScene::default());
        // Scene ids are 1-based so they never collide with "no scene"
        SceneId(self.scenes.len() as u64)
    }

    fn configure_scene(&mut self, scene: SceneId, environment: &SceneEnvironment) {
        if let Some(recorded) = self.scene_record_mut(scene) {
            recorded.environment = Some(*environment);
        }
    }

    fn attach_camera(&mut self, scene: SceneId, camera: &UniversalCamera, _surface: &()) {
        if let Some(recorded) = self.scene_record_mut(scene) {
            recorded.record_camera(camera);
        }
    }

    fn update_camera(&mut self, scene: SceneId, camera: &UniversalCamera) {
        if let Some(recorded) = self.scene_record_mut(scene) {
            recorded.record_camera(camera);
            recorded.camera_updates += 1;
        }
    }

    fn create_mesh(&mut self, scene: SceneId, descriptor: &MeshDescriptor) -> MeshHandle {
        let handle = MeshHandle(self.next_id());
        log::trace!("mesh {:?}: {} '{}'", handle, descriptor.shape.kind(), descriptor.name);
        self.register_mesh(scene, handle, Some(descriptor.clone()), None);
        handle
    }

    fn set_scaling(&mut self, mesh: MeshHandle, scaling: Vector3<f32>) {
        if let Some(recorded) = self.meshes.get_mut(&mesh) {
            recorded.scaling = scaling;
        }
    }

    fn load_texture(
        &mut self,
        _scene: SceneId,
        source: &TextureSource,
    ) -> Result<TextureHandle, AssetError> {
        let path = source.to_string();
        if self.missing.contains(&path) {
            return Err(AssetError::new(path, "not found"));
        }
        let handle = TextureHandle(self.next_id());
        self.textures.insert(handle, source.clone());
        Ok(handle)
    }

    fn bind_material(&mut self, mesh: MeshHandle, material: &MaterialHandle) {
        if let Some(recorded) = self.meshes.get_mut(&mesh) {
            recorded.material = Some(material.clone());
        }
    }

    fn set_metadata(&mut self, mesh: MeshHandle, metadata: &ModelMetadata) {
        if let Some(recorded) = self.meshes.get_mut(&mesh) {
            recorded.metadata = Some(*metadata);
        }
    }

    fn set_uniforms(&mut self, material: &MaterialHandle, uniforms: &ShaderUniforms) {
        self.uniform_pushes += 1;
        self.uniforms.insert(material.clone(), uniforms.clone());
    }
}
