use crate::{
    error::SceneError,
    gfx::{
        camera::UniversalCamera,
        context::{RenderContext, SceneId},
        resources::{
            material::{MaterialSet, MaterialVariant},
            uniforms::ShaderUniforms,
        },
    },
};

use super::{light::Light, model::Model};

/// Scene-wide render settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEnvironment {
    pub clear_color: [f32; 4],
    pub ambient: [f32; 3],
    pub right_handed: bool,
}

/// Behavior attached to a scene and driven by the host's event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneHook {
    /// Keyboard: nudge the active light along one axis per key
    MoveActiveLight,
    /// Before each frame: push camera, ambient and lights into the bound shaders
    RefreshUniforms,
}

/// One fully configured scene
#[derive(Debug, Clone)]
pub struct SceneEntry {
    pub scene: SceneId,
    pub background: [f32; 4],
    pub ambient: [f32; 3],
    pub camera: UniversalCamera,
    pub lights: Vec<Light>,
    pub ground: Model,
    pub models: Vec<Model>,
    pub materials: MaterialSet,
    pub ground_subdivisions: [u32; 2],
    pub hooks: Vec<SceneHook>,
}

impl SceneEntry {
    pub fn environment(&self) -> SceneEnvironment {
        SceneEnvironment {
            clear_color: self.background,
            ambient: self.ambient,
            right_handed: true,
        }
    }

    pub fn has_hook(&self, hook: SceneHook) -> bool {
        self.hooks.contains(&hook)
    }

    pub fn register_hook(&mut self, hook: SceneHook) {
        if !self.has_hook(hook) {
            self.hooks.push(hook);
        }
    }

    pub fn unregister_hook(&mut self, hook: SceneHook) {
        self.hooks.retain(|registered| *registered != hook);
    }

    /// Current uniform values for this scene's shaders
    pub fn uniforms(&self) -> ShaderUniforms {
        ShaderUniforms::new(self.camera.position, self.ambient, &self.lights)
    }

    /// Fails if `algorithm` lacks either material variant in this scene
    pub fn check_shading(&self, index: usize, algorithm: &str) -> Result<(), SceneError> {
        match self.materials.missing_variant(algorithm) {
            Some(material) => Err(SceneError::UnknownShadingAlgorithm {
                name: algorithm.to_string(),
                scene: index,
                material,
            }),
            None => Ok(()),
        }
    }

    /// Rebinds the ground and every model to the variants for `algorithm`
    ///
    /// Leaves bindings untouched when a variant is missing.
    pub fn apply_shading<C: RenderContext>(
        &mut self,
        index: usize,
        context: &mut C,
        algorithm: &str,
    ) -> Result<(), SceneError> {
        self.check_shading(index, algorithm)?;

        let ground_material = self.materials.resolve(MaterialVariant::Ground, algorithm);
        let illum_material = self.materials.resolve(MaterialVariant::Illumination, algorithm);

        if let Some(material) = ground_material {
            context.bind_material(self.ground.mesh, material);
            self.ground.material = Some(material.clone());
        }

        if let Some(material) = illum_material {
            for model in &mut self.models {
                context.bind_material(model.mesh, material);
                model.material = Some(material.clone());
            }
        }

        Ok(())
    }

    /// Pushes the current uniforms into both shading programs of `algorithm`
    pub fn refresh_uniforms<C: RenderContext>(&self, context: &mut C, algorithm: &str) {
        let uniforms = self.uniforms();
        for variant in [MaterialVariant::Illumination, MaterialVariant::Ground] {
            if let Some(material) = self.materials.resolve(variant, algorithm) {
                context.set_uniforms(material, &uniforms);
            }
        }
    }

    /// Ground first, then models in creation order
    pub fn all_models(&self) -> impl Iterator<Item = &Model> {
        std::iter::once(&self.ground).chain(self.models.iter())
    }
}
