//! # Scene Registry
//!
//! Owns every configured scene plus the small amount of state a host drives:
//! which scene is active, which of its lights the keyboard moves, which shading
//! algorithm is bound and the current terrain height scale.
//!
//! ## Usage
//!
//! ```no_run
//! use haggis_scenes::{config::RegistryConfig, gfx::HeadlessContext, registry::SceneRegistry};
//!
//! let registry = SceneRegistry::new(
//!     &(),
//!     HeadlessContext::new(),
//!     |ctx, scene| ctx.material_set(scene, &["gouraud", "phong"]),
//!     |ctx, scene, subdivisions| ctx.ground_mesh(scene, subdivisions),
//!     RegistryConfig::default(),
//! );
//! ```
//!
//! Failed calls return a [`SceneError`] and leave every scene untouched.

pub mod layouts;

pub use layouts::{standard_camera, SceneBuilder, SceneLayout, GROUND_SCALING};

use winit::keyboard::Key;

use crate::{
    config::RegistryConfig,
    error::SceneError,
    gfx::{
        camera::UniversalCamera,
        context::{MeshHandle, RenderContext, SceneId},
        resources::{material::MaterialSet, uniforms::ShaderUniforms},
        scene::{Model, SceneEntry, SceneHook},
    },
    input,
};

pub struct SceneRegistry<C: RenderContext> {
    context: C,
    scenes: Vec<SceneEntry>,
    active_scene: usize,
    active_light: usize,
    shading_algorithm: String,
    height_scale: f32,
    light_step: f32,
    asset_failures: Vec<SceneError>,
}

impl<C: RenderContext> SceneRegistry<C> {
    /// Builds every scene in [`SceneLayout::ALL`]
    ///
    /// `material_factory` supplies each scene's material set and
    /// `ground_factory` its ground mesh. The configured shading algorithm must
    /// have both material variants in every set. Missing textures don't fail
    /// construction; see [`SceneRegistry::asset_failures`].
    pub fn new<M, G>(
        surface: &C::Surface,
        mut context: C,
        mut material_factory: M,
        mut ground_factory: G,
        config: RegistryConfig,
    ) -> Result<Self, SceneError>
    where
        M: FnMut(&mut C, SceneId) -> MaterialSet,
        G: FnMut(&mut C, SceneId, [u32; 2]) -> MeshHandle,
    {
        let mut scenes = Vec::with_capacity(SceneLayout::ALL.len());
        let mut asset_failures = Vec::new();

        for (index, layout) in SceneLayout::ALL.into_iter().enumerate() {
            let scene = context.create_scene();
            let materials = material_factory(&mut context, scene);
            let ground_mesh = ground_factory(&mut context, scene, config.ground_subdivisions);

            let mut builder = SceneBuilder::new(index, scene, &mut context, &config)?;
            let output = layout.build(&mut builder);
            asset_failures.extend(builder.into_failures());

            context.set_scaling(ground_mesh, GROUND_SCALING);
            context.set_metadata(ground_mesh, &output.ground);
            let mut ground = Model::new("ground", ground_mesh, output.ground);
            ground.scaling = GROUND_SCALING;

            let mut entry = SceneEntry {
                scene,
                background: output.background,
                ambient: output.ambient,
                camera: standard_camera(),
                lights: output.lights,
                ground,
                models: output.models,
                materials,
                ground_subdivisions: config.ground_subdivisions,
                hooks: Vec::new(),
            };

            context.configure_scene(scene, &entry.environment());
            context.attach_camera(scene, &entry.camera, surface);

            entry.apply_shading(index, &mut context, &config.shading_algorithm)?;
            register_hooks(&mut entry);

            log::info!(
                "Scene {} ({}): {} lights, {} models",
                index,
                layout.name(),
                entry.lights.len(),
                entry.models.len()
            );
            scenes.push(entry);
        }

        Ok(Self {
            context,
            scenes,
            active_scene: 0,
            active_light: 0,
            shading_algorithm: config.shading_algorithm,
            height_scale: 1.0,
            light_step: config.light_step,
            asset_failures,
        })
    }

    /// Engine handle of the scene to render
    pub fn get_active_scene(&self) -> SceneId {
        self.scenes[self.active_scene].scene
    }

    pub fn active_scene_index(&self) -> usize {
        self.active_scene
    }

    pub fn active_entry(&self) -> &SceneEntry {
        &self.scenes[self.active_scene]
    }

    /// Switches the rendered scene; the first light becomes the active light
    pub fn set_active_scene(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.scenes.len() {
            return Err(SceneError::InvalidSceneIndex {
                index,
                count: self.scenes.len(),
            });
        }

        if index != self.active_scene {
            log::info!("Active scene {} -> {}", self.active_scene, index);
        }
        self.active_scene = index;
        self.active_light = 0;
        Ok(())
    }

    pub fn shading_algorithm(&self) -> &str {
        &self.shading_algorithm
    }

    /// Rebinds every ground and model in every scene to the `name` variants
    ///
    /// All scenes are checked before any binding changes.
    pub fn set_shading_algorithm(&mut self, name: &str) -> Result<(), SceneError> {
        for (index, entry) in self.scenes.iter().enumerate() {
            entry.check_shading(index, name)?;
        }

        for (index, entry) in self.scenes.iter_mut().enumerate() {
            entry.apply_shading(index, &mut self.context, name)?;
        }

        if self.shading_algorithm != name {
            log::info!("Shading algorithm {} -> {}", self.shading_algorithm, name);
        }
        self.shading_algorithm = name.to_string();
        Ok(())
    }

    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Sets the terrain height scalar of every scene's ground
    pub fn set_height_scale(&mut self, value: f32) {
        for entry in &mut self.scenes {
            if let Some(terrain) = entry.ground.metadata.terrain.as_mut() {
                terrain.height_scalar = value;
            }
            self.context
                .set_metadata(entry.ground.mesh, &entry.ground.metadata);
        }
        self.height_scale = value;
    }

    pub fn active_light_index(&self) -> usize {
        self.active_light
    }

    /// Picks which light of the active scene the keyboard moves
    pub fn set_active_light(&mut self, index: usize) -> Result<(), SceneError> {
        let count = self.active_entry().lights.len();
        if index >= count {
            return Err(SceneError::InvalidLightIndex {
                index,
                scene: self.active_scene,
                count,
            });
        }

        self.active_light = index;
        Ok(())
    }

    /// Selects the next light of the active scene, wrapping to the first
    pub fn cycle_active_light(&mut self) -> usize {
        let count = self.active_entry().lights.len();
        if count > 0 {
            self.active_light = (self.active_light + 1) % count;
        }
        self.active_light
    }

    /// Camera the active scene is rendered through
    pub fn active_camera(&self) -> &UniversalCamera {
        &self.active_entry().camera
    }

    /// Moves the active scene's camera and hands it to the engine
    ///
    /// The next [`before_render`](Self::before_render) lights the scene from
    /// the new eye position.
    pub fn set_active_camera(&mut self, camera: UniversalCamera) {
        let entry = &mut self.scenes[self.active_scene];
        entry.camera = camera;
        self.context.update_camera(entry.scene, &entry.camera);
    }

    /// Turns one of the shared hooks on or off for scene `index`
    pub fn set_hook(
        &mut self,
        index: usize,
        hook: SceneHook,
        enabled: bool,
    ) -> Result<(), SceneError> {
        let count = self.scenes.len();
        let entry = self
            .scenes
            .get_mut(index)
            .ok_or(SceneError::InvalidSceneIndex { index, count })?;

        if enabled {
            entry.register_hook(hook);
        } else {
            entry.unregister_hook(hook);
        }
        log::debug!("Scene {}: {:?} enabled = {}", index, hook, enabled);
        Ok(())
    }

    /// Feeds a key press to the active scene's keyboard hooks
    ///
    /// Returns true if a light moved.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        let Some(offset) = input::light_nudge(key, self.light_step) else {
            return false;
        };

        let active_light = self.active_light;
        let entry = &mut self.scenes[self.active_scene];
        if !entry.has_hook(SceneHook::MoveActiveLight) {
            return false;
        }

        match entry.lights.get_mut(active_light) {
            Some(light) => {
                light.translate(offset);
                log::debug!(
                    "Scene {}: {} moved to ({:.1}, {:.1}, {:.1})",
                    self.active_scene,
                    light.name,
                    light.position.x,
                    light.position.y,
                    light.position.z
                );
                true
            }
            None => false,
        }
    }

    /// Runs the active scene's per-frame hooks
    ///
    /// Call once before rendering each frame.
    pub fn before_render(&mut self) {
        let entry = &self.scenes[self.active_scene];
        if entry.has_hook(SceneHook::RefreshUniforms) {
            entry.refresh_uniforms(&mut self.context, &self.shading_algorithm);
        }
    }

    /// Keeps every camera's aspect ratio in step with the surface
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Surface resized to {}x{}", width, height);
        for entry in &mut self.scenes {
            entry.camera.resize_projection(width, height);
            self.context.update_camera(entry.scene, &entry.camera);
        }
    }

    /// Uniforms the per-frame hook would push for scene `index`
    pub fn uniforms_for(&self, index: usize) -> Result<ShaderUniforms, SceneError> {
        self.scene(index).map(SceneEntry::uniforms)
    }

    pub fn scene(&self, index: usize) -> Result<&SceneEntry, SceneError> {
        self.scenes.get(index).ok_or(SceneError::InvalidSceneIndex {
            index,
            count: self.scenes.len(),
        })
    }

    pub fn scenes(&self) -> &[SceneEntry] {
        &self.scenes
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Textures that failed to load during construction, by scene and slot
    pub fn asset_failures(&self) -> &[SceneError] {
        &self.asset_failures
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }
}

/// The same two hooks go on every scene
fn register_hooks(entry: &mut SceneEntry) {
    entry.register_hook(SceneHook::MoveActiveLight);
    entry.register_hook(SceneHook::RefreshUniforms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AssetSlot,
        gfx::{resources::material::MaterialVariant, HeadlessContext},
    };
    use cgmath::Vector3;

    const ALGORITHMS: [&str; 3] = ["gouraud", "phong", "blinn"];

    fn registry_with(
        context: HeadlessContext,
        config: RegistryConfig,
    ) -> Result<SceneRegistry<HeadlessContext>, SceneError> {
        SceneRegistry::new(
            &(),
            context,
            |ctx, scene| ctx.material_set(scene, &ALGORITHMS),
            |ctx, scene, subdivisions| ctx.ground_mesh(scene, subdivisions),
            config,
        )
    }

    fn registry() -> SceneRegistry<HeadlessContext> {
        registry_with(HeadlessContext::new(), RegistryConfig::default()).unwrap()
    }

    fn key(c: &str) -> Key {
        Key::Character(c.into())
    }

    fn light_positions(registry: &SceneRegistry<HeadlessContext>) -> Vec<Vec<Vector3<f32>>> {
        registry
            .scenes()
            .iter()
            .map(|entry| entry.lights.iter().map(|light| light.position).collect())
            .collect()
    }

    #[test]
    fn test_builds_three_authored_scenes() {
        let registry = registry();
        assert_eq!(registry.scene_count(), 3);
        assert_eq!(registry.context().scene_count(), 3);

        let light_counts: Vec<usize> = registry.scenes().iter().map(|s| s.lights.len()).collect();
        assert_eq!(light_counts, vec![2, 3, 1]);

        let model_counts: Vec<usize> = registry.scenes().iter().map(|s| s.models.len()).collect();
        assert_eq!(model_counts, vec![2, 4, 3]);

        for entry in registry.scenes() {
            assert_eq!(entry.hooks, vec![SceneHook::MoveActiveLight, SceneHook::RefreshUniforms]);
            assert_eq!(entry.ground_subdivisions, [50, 50]);
            assert_eq!(entry.ground.metadata.height_scalar(), Some(1.0));

            let recorded = registry.context().scene_record(entry.scene).unwrap();
            assert_eq!(recorded.environment.unwrap().clear_color, entry.background);
            assert!(recorded.environment.unwrap().right_handed);
            assert_eq!(recorded.camera.unwrap().position, Vector3::new(0.0, 1.8, 10.0));

            let ground = registry.context().mesh(entry.ground.mesh).unwrap();
            assert_eq!(ground.subdivisions, Some([50, 50]));
            assert_eq!(ground.scaling, GROUND_SCALING);
        }
        assert!(registry.asset_failures().is_empty());
    }

    #[test]
    fn test_wire_cube_children_are_parented() {
        let registry = registry();
        let lab = registry.scene(1).unwrap();
        let frame = lab.models.iter().find(|m| m.name == "custom").unwrap();

        // one line system plus twelve struts
        assert_eq!(frame.children.len(), 13);
        for child in &frame.children {
            let recorded = registry.context().mesh(*child).unwrap();
            assert_eq!(recorded.descriptor.as_ref().unwrap().parent, Some(frame.mesh));
        }
    }

    #[test]
    fn test_active_scene_round_trips() {
        let mut registry = registry();
        for index in 0..registry.scene_count() {
            registry.set_active_scene(index).unwrap();
            assert_eq!(registry.get_active_scene(), registry.scenes()[index].scene);
        }
    }

    #[test]
    fn test_invalid_scene_index_is_rejected() {
        let mut registry = registry();
        registry.set_active_scene(2).unwrap();

        let err = registry.set_active_scene(3).unwrap_err();
        assert_eq!(err, SceneError::InvalidSceneIndex { index: 3, count: 3 });
        assert_eq!(registry.active_scene_index(), 2);
    }

    #[test]
    fn test_initial_bindings_use_default_algorithm() {
        let registry = registry();
        assert_eq!(registry.shading_algorithm(), "gouraud");
        for entry in registry.scenes() {
            assert_eq!(entry.ground.material_name(), Some("ground_gouraud"));
            for model in &entry.models {
                assert_eq!(model.material_name(), Some("illum_gouraud"));
            }
        }
    }

    #[test]
    fn test_phong_rebinds_every_scene() {
        let mut registry = registry();
        registry.set_shading_algorithm("phong").unwrap();

        for entry in registry.scenes() {
            let ground = entry.materials.resolve(MaterialVariant::Ground, "phong").unwrap();
            let illum = entry.materials.resolve(MaterialVariant::Illumination, "phong").unwrap();

            assert_eq!(entry.ground.material.as_ref(), Some(ground));
            assert_eq!(
                registry.context().mesh(entry.ground.mesh).unwrap().material.as_ref(),
                Some(ground)
            );
            for model in &entry.models {
                assert_eq!(model.material.as_ref(), Some(illum));
                assert!(model.material_name().unwrap().ends_with("_phong"));
                assert_eq!(
                    registry.context().mesh(model.mesh).unwrap().material.as_ref(),
                    Some(illum)
                );
            }
        }
    }

    #[test]
    fn test_shading_switch_is_idempotent() {
        let mut registry = registry();
        registry.set_shading_algorithm("blinn").unwrap();
        let once: Vec<_> = registry
            .scenes()
            .iter()
            .flat_map(|s| s.all_models().map(|m| m.material.clone()).collect::<Vec<_>>())
            .collect();

        registry.set_shading_algorithm("blinn").unwrap();
        let twice: Vec<_> = registry
            .scenes()
            .iter()
            .flat_map(|s| s.all_models().map(|m| m.material.clone()).collect::<Vec<_>>())
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_algorithm_changes_nothing() {
        let mut registry = registry();
        registry.set_shading_algorithm("phong").unwrap();

        let err = registry.set_shading_algorithm("toon").unwrap_err();
        assert_eq!(
            err,
            SceneError::UnknownShadingAlgorithm {
                name: "toon".to_string(),
                scene: 0,
                material: "ground_toon".to_string(),
            }
        );
        assert_eq!(registry.shading_algorithm(), "phong");
        for entry in registry.scenes() {
            assert_eq!(entry.ground.material_name(), Some("ground_phong"));
        }
    }

    #[test]
    fn test_algorithm_missing_in_one_scene_is_atomic() {
        let mut registry = SceneRegistry::new(
            &(),
            HeadlessContext::new(),
            |ctx: &mut HeadlessContext, scene| {
                // only the last scene knows phong
                if scene.0 == 3 {
                    ctx.material_set(scene, &["gouraud", "phong"])
                } else {
                    ctx.material_set(scene, &["gouraud"])
                }
            },
            |ctx, scene, subdivisions| ctx.ground_mesh(scene, subdivisions),
            RegistryConfig::default(),
        )
        .unwrap();

        let err = registry.set_shading_algorithm("phong").unwrap_err();
        assert!(matches!(err, SceneError::UnknownShadingAlgorithm { scene: 0, .. }));
        let last = &registry.scenes()[2];
        assert_eq!(last.ground.material_name(), Some("ground_gouraud"));
        assert!(last.models.iter().all(|m| m.material_name() == Some("illum_gouraud")));
    }

    #[test]
    fn test_missing_initial_algorithm_fails_construction() {
        let config = RegistryConfig::default().with_shading_algorithm("cel");
        let result = registry_with(HeadlessContext::new(), config);
        assert!(matches!(
            result,
            Err(SceneError::UnknownShadingAlgorithm { scene: 0, .. })
        ));
    }

    #[test]
    fn test_height_scale_touches_only_grounds() {
        let mut registry = registry();
        let lights_before = light_positions(&registry);
        let models_before: Vec<_> = registry.scenes().iter().map(|s| s.models.clone()).collect();

        registry.set_height_scale(2.75);

        assert_eq!(registry.height_scale(), 2.75);
        for (entry, models) in registry.scenes().iter().zip(&models_before) {
            assert_eq!(entry.ground.metadata.height_scalar(), Some(2.75));
            let pushed = registry.context().mesh(entry.ground.mesh).unwrap().metadata.unwrap();
            assert_eq!(pushed.height_scalar(), Some(2.75));
            assert_eq!(&entry.models, models);
        }
        assert_eq!(light_positions(&registry), lights_before);
    }

    #[test]
    fn test_inverse_keys_restore_light_position() {
        let mut registry = registry();
        let start = registry.active_entry().lights[0].position;

        for (there, back) in [("a", "d"), ("w", "s"), ("f", "r")] {
            assert!(registry.handle_key(&key(there)));
            assert_ne!(registry.active_entry().lights[0].position, start);
            assert!(registry.handle_key(&key(back)));
            assert_eq!(registry.active_entry().lights[0].position, start);
        }
    }

    #[test]
    fn test_key_moves_only_selected_light() {
        let mut registry = registry();
        registry.set_active_scene(1).unwrap();
        registry.set_active_light(2).unwrap();
        let before = light_positions(&registry);

        assert!(registry.handle_key(&key("r")));

        let after = light_positions(&registry);
        for (scene, (old, new)) in before.iter().zip(&after).enumerate() {
            for (light, (old, new)) in old.iter().zip(new).enumerate() {
                if scene == 1 && light == 2 {
                    assert_eq!(*new, *old + Vector3::new(0.0, 1.0, 0.0));
                } else {
                    assert_eq!(new, old);
                }
            }
        }
    }

    #[test]
    fn test_invalid_light_index_is_rejected() {
        let mut registry = registry();
        registry.set_active_light(1).unwrap();

        let err = registry.set_active_light(2).unwrap_err();
        assert_eq!(
            err,
            SceneError::InvalidLightIndex {
                index: 2,
                scene: 0,
                count: 2
            }
        );
        assert_eq!(registry.active_light_index(), 1);
    }

    #[test]
    fn test_scene_switch_resets_active_light() {
        let mut registry = registry();
        registry.set_active_scene(1).unwrap();
        registry.set_active_light(2).unwrap();
        registry.set_active_scene(2).unwrap();
        assert_eq!(registry.active_light_index(), 0);

        assert!(registry.handle_key(&key("d")));
        assert_eq!(registry.active_entry().lights[0].position, Vector3::new(2.0, 5.0, 5.0));
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut registry = registry();
        let before = light_positions(&registry);
        assert!(!registry.handle_key(&key("x")));
        assert_eq!(light_positions(&registry), before);
    }

    #[test]
    fn test_light_step_comes_from_config() {
        let config = RegistryConfig::default().with_light_step(0.5);
        let mut registry = registry_with(HeadlessContext::new(), config).unwrap();
        registry.handle_key(&key("s"));
        assert_eq!(registry.active_entry().lights[0].position, Vector3::new(1.0, 1.0, 5.5));
    }

    #[test]
    fn test_before_render_pushes_into_active_shaders() {
        let mut registry = registry();
        registry.set_active_scene(1).unwrap();
        registry.set_shading_algorithm("phong").unwrap();
        registry.handle_key(&key("a"));
        registry.before_render();

        assert_eq!(registry.context().uniform_pushes(), 2);

        let entry = registry.active_entry();
        for variant in MaterialVariant::ALL {
            let material = entry.materials.resolve(variant, "phong").unwrap();
            let pushed = registry.context().uniforms(material).unwrap();
            assert_eq!(pushed.num_lights, 3);
            assert_eq!(pushed.camera_position, [0.0, 1.8, 10.0]);
            assert_eq!(pushed.ambient, [0.2, 0.2, 0.2]);
            assert_eq!(pushed.light_positions[0], [0.0, 1.0, 5.0]);
            assert_eq!(pushed.light_colors[1], [0.56, 0.56, 0.91]);
        }

        let gouraud = entry.materials.resolve(MaterialVariant::Illumination, "gouraud").unwrap();
        assert!(registry.context().uniforms(gouraud).is_none());
    }

    #[test]
    fn test_uniforms_for_rejects_bad_index() {
        let registry = registry();
        assert_eq!(registry.uniforms_for(2).unwrap().ambient, [0.3, 0.3, 0.3]);
        assert!(matches!(
            registry.uniforms_for(7),
            Err(SceneError::InvalidSceneIndex { index: 7, .. })
        ));
    }

    #[test]
    fn test_resize_updates_every_camera() {
        let mut registry = registry();
        registry.resize(1200, 800);
        assert!(registry.scenes().iter().all(|entry| entry.camera.aspect == 1.5));

        // Minimized window
        registry.resize(1200, 0);
        assert!(registry.scenes().iter().all(|entry| entry.camera.aspect == 1.5));

        for entry in registry.scenes() {
            let recorded = registry.context().scene_record(entry.scene).unwrap();
            assert_eq!(recorded.camera.unwrap().aspect, 1.5);
        }
    }

    #[test]
    fn test_moved_camera_lights_the_next_frame() {
        let mut registry = registry();
        registry.set_active_scene(1).unwrap();

        let mut camera = *registry.active_camera();
        camera.dolly(6.0);
        registry.set_active_camera(camera);
        registry.before_render();

        let entry = registry.active_entry();
        let recorded = registry.context().scene_record(entry.scene).unwrap();
        assert_eq!(recorded.camera_updates, 1);
        assert_eq!(recorded.camera_uniform.unwrap().view_position, [0.0, 1.8, 4.0, 1.0]);

        for variant in MaterialVariant::ALL {
            let material = entry.materials.resolve(variant, "gouraud").unwrap();
            let pushed = registry.context().uniforms(material).unwrap();
            assert_eq!(pushed.camera_position, [0.0, 1.8, 4.0]);
        }

        // Other scenes keep their own camera
        assert_eq!(registry.scenes()[0].camera.position, Vector3::new(0.0, 1.8, 10.0));
    }

    #[test]
    fn test_cycle_active_light_wraps() {
        let mut registry = registry();
        registry.set_active_scene(1).unwrap();
        let visited: Vec<usize> = (0..4).map(|_| registry.cycle_active_light()).collect();
        assert_eq!(visited, vec![1, 2, 0, 1]);

        // Single light scene stays on it
        registry.set_active_scene(2).unwrap();
        assert_eq!(registry.cycle_active_light(), 0);
    }

    #[test]
    fn test_disabled_hooks_stop_running() {
        let mut registry = registry();
        registry.set_hook(0, SceneHook::MoveActiveLight, false).unwrap();
        registry.set_hook(0, SceneHook::RefreshUniforms, false).unwrap();

        let before = light_positions(&registry);
        assert!(!registry.handle_key(&key("d")));
        registry.before_render();
        assert_eq!(light_positions(&registry), before);
        assert_eq!(registry.context().uniform_pushes(), 0);

        registry.set_hook(0, SceneHook::MoveActiveLight, true).unwrap();
        registry.set_hook(0, SceneHook::MoveActiveLight, true).unwrap();
        assert_eq!(registry.active_entry().hooks.len(), 1);
        assert!(registry.handle_key(&key("d")));

        assert_eq!(
            registry.set_hook(5, SceneHook::RefreshUniforms, true),
            Err(SceneError::InvalidSceneIndex { index: 5, count: 3 })
        );
    }

    #[test]
    fn test_missing_fallback_texture_fails_construction() {
        let mut context = HeadlessContext::new();
        context.mark_missing("rgb(255, 255, 255)");

        match registry_with(context, RegistryConfig::default()) {
            Err(SceneError::AssetLoadFailure { scene, slot, source }) => {
                assert_eq!(scene, 0);
                assert_eq!(slot, AssetSlot::FallbackTexture);
                assert_eq!(source.path, "rgb(255, 255, 255)");
            }
            other => panic!("expected fallback failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_textures_are_reported_per_slot() {
        let mut context = HeadlessContext::new();
        context.mark_missing("/textures/baseball.jpg");
        context.mark_missing("/heightmaps/iceland.png");

        let registry = registry_with(context, RegistryConfig::default()).unwrap();
        assert_eq!(registry.scene_count(), 3);

        let failures: Vec<(usize, AssetSlot)> = registry
            .asset_failures()
            .iter()
            .filter_map(|failure| match failure {
                SceneError::AssetLoadFailure { scene, slot, .. } => Some((*scene, slot.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            failures,
            vec![
                (1, AssetSlot::GroundHeightmap),
                (2, AssetSlot::ModelTexture("sphere2".to_string())),
            ]
        );

        // the affected ball still gets a texture, the others keep theirs
        let balls = &registry.scenes()[2].models;
        let texture_of = |i: usize| registry.context().texture(balls[i].metadata.texture).cloned();
        assert_eq!(texture_of(1), Some(crate::gfx::resources::TextureSource::white()));
        assert_eq!(
            texture_of(2),
            Some(crate::gfx::resources::TextureSource::Url("/textures/futbol.jpg".to_string()))
        );
    }

    #[test]
    fn test_assets_resolve_against_base_url() {
        let config = RegistryConfig::default().with_base_url("https://assets.example.org/demo/");
        let registry = registry_with(HeadlessContext::new(), config).unwrap();

        let ground = &registry.scenes()[2].ground;
        let heightmap = ground.metadata.terrain.unwrap().heightmap;
        assert_eq!(
            registry.context().texture(heightmap).map(|t| t.to_string()).as_deref(),
            Some("https://assets.example.org/demo/heightmaps/mulch-heightmap.png")
        );
    }
}
