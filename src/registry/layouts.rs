//! Authored scene layouts
//!
//! Each [`SceneLayout`] variant builds one scene's lights, ground material and
//! models. [`SceneLayout::ALL`] fixes the order, so the variant at position `i`
//! always builds scene `i`.

use cgmath::{Deg, Vector3};

use crate::{
    config::RegistryConfig,
    error::{AssetSlot, SceneError},
    gfx::{
        camera::UniversalCamera,
        context::{MeshHandle, RenderContext, SceneId},
        geometry::{
            edge_lines, edge_struts, MeshDescriptor, MeshShape, WIRE_CUBE_EDGES,
            WIRE_CUBE_VERTICES,
        },
        resources::texture::{TextureHandle, TextureSource},
        scene::{Light, Model, ModelMetadata},
    },
};

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Ground footprint; height comes from the heightmap
pub const GROUND_SCALING: Vector3<f32> = Vector3 {
    x: 20.0,
    y: 1.0,
    z: 20.0,
};

/// Camera shared by every scene: eye height 1.8, ten units back, 35° fov
pub fn standard_camera() -> UniversalCamera {
    UniversalCamera::new(Vector3::new(0.0, 1.8, 10.0))
        .with_target(Vector3::new(0.0, 1.8, 0.0))
        .with_up(Vector3::unit_y())
        .with_fov(Deg(35.0))
        .with_clip_planes(0.1, 100.0)
}

/// Everything a layout decides about its scene
pub struct LayoutOutput {
    pub background: [f32; 4],
    pub ambient: [f32; 3],
    pub lights: Vec<Light>,
    pub ground: ModelMetadata,
    pub models: Vec<Model>,
}

/// Engine access while a scene is being laid out
///
/// Texture failures are recorded instead of returned; the affected slot falls
/// back to a plain white texture.
pub struct SceneBuilder<'a, C: RenderContext> {
    pub index: usize,
    pub scene: SceneId,
    context: &'a mut C,
    config: &'a RegistryConfig,
    white: TextureHandle,
    failures: Vec<SceneError>,
}

impl<'a, C: RenderContext> SceneBuilder<'a, C> {
    /// Fails only if the engine can't create the white fallback texture
    pub fn new(
        index: usize,
        scene: SceneId,
        context: &'a mut C,
        config: &'a RegistryConfig,
    ) -> Result<Self, SceneError> {
        let white = context
            .load_texture(scene, &TextureSource::white())
            .map_err(|source| SceneError::AssetLoadFailure {
                scene: index,
                slot: AssetSlot::FallbackTexture,
                source,
            })?;

        Ok(Self {
            index,
            scene,
            context,
            config,
            white,
            failures: Vec::new(),
        })
    }

    pub fn white(&self) -> TextureHandle {
        self.white
    }

    /// Loads an image relative to the configured base URL
    pub fn texture(&mut self, slot: AssetSlot, relative: &str) -> TextureHandle {
        let url = self.config.asset_url(relative);
        match self.context.load_texture(self.scene, &TextureSource::Url(url)) {
            Ok(handle) => handle,
            Err(source) => {
                log::warn!("Scene {}: {} unavailable, using white: {}", self.index, slot, source);
                self.failures.push(SceneError::AssetLoadFailure {
                    scene: self.index,
                    slot,
                    source,
                });
                self.white
            }
        }
    }

    /// Creates the mesh and attaches its metadata
    pub fn place(&mut self, descriptor: MeshDescriptor, metadata: ModelMetadata) -> Model {
        let mesh = self.context.create_mesh(self.scene, &descriptor);
        self.context.set_metadata(mesh, &metadata);

        let mut model = Model::new(&descriptor.name, mesh, metadata);
        model.position = descriptor.position;
        model.scaling = descriptor.scaling;
        model
    }

    /// Creates a mesh that is only ever moved with its parent
    pub fn child(&mut self, descriptor: MeshDescriptor) -> MeshHandle {
        self.context.create_mesh(self.scene, &descriptor)
    }

    pub fn into_failures(self) -> Vec<SceneError> {
        self.failures
    }
}

/// The authored scenes, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLayout {
    /// Green hills with a sphere and a box under two white lights
    Meadow,
    /// Assorted primitives and a wireframe cube under three colored lights
    PrimitivesLab,
    /// Three textured balls stacked on a turf field
    StackedBalls,
}

impl SceneLayout {
    pub const ALL: [SceneLayout; 3] = [
        SceneLayout::Meadow,
        SceneLayout::PrimitivesLab,
        SceneLayout::StackedBalls,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneLayout::Meadow => "meadow",
            SceneLayout::PrimitivesLab => "primitives lab",
            SceneLayout::StackedBalls => "stacked balls",
        }
    }

    pub fn build<C: RenderContext>(self, builder: &mut SceneBuilder<'_, C>) -> LayoutOutput {
        match self {
            SceneLayout::Meadow => meadow(builder),
            SceneLayout::PrimitivesLab => primitives_lab(builder),
            SceneLayout::StackedBalls => stacked_balls(builder),
        }
    }
}

fn meadow<C: RenderContext>(builder: &mut SceneBuilder<'_, C>) -> LayoutOutput {
    let white = builder.white();
    let heightmap = builder.texture(AssetSlot::GroundHeightmap, "heightmaps/default.png");

    let lights = vec![
        Light::new("light0", Vector3::new(1.0, 1.0, 5.0), WHITE),
        Light::new("light1", Vector3::new(0.0, 3.0, 0.0), WHITE),
    ];

    let ground = ModelMetadata::new([0.10, 0.65, 0.15], white)
        .with_specular(0.1)
        .with_shininess(1.0)
        .with_terrain(1.0, heightmap);

    let sphere = builder.place(
        MeshDescriptor::new(
            "sphere",
            MeshShape::Sphere {
                segments: 32,
                diameter: 1.0,
            },
        )
        .at(1.0, 0.5, 3.0),
        ModelMetadata::new([0.10, 0.35, 0.88], white)
            .with_specular(0.8)
            .with_shininess(16.0),
    );

    let slab = builder.place(
        MeshDescriptor::new(
            "box",
            MeshShape::Box {
                width: 2.0,
                height: 1.0,
                depth: 1.0,
            },
        )
        .at(-1.0, 0.5, 2.0),
        ModelMetadata::new([0.75, 0.15, 0.05], white)
            .with_specular(0.4)
            .with_shininess(4.0),
    );

    LayoutOutput {
        background: [0.1, 0.1, 0.1, 1.0],
        ambient: [0.2, 0.2, 0.2],
        lights,
        ground,
        models: vec![sphere, slab],
    }
}

fn primitives_lab<C: RenderContext>(builder: &mut SceneBuilder<'_, C>) -> LayoutOutput {
    let white = builder.white();
    let heightmap = builder.texture(AssetSlot::GroundHeightmap, "heightmaps/iceland.png");

    let lights = vec![
        Light::new("light0", Vector3::new(1.0, 1.0, 5.0), [1.0, 0.0, 0.0]),
        Light::new("light1", Vector3::new(0.0, 4.0, 0.0), [0.56, 0.56, 0.91]),
        Light::new("light2", Vector3::new(2.0, 3.0, 3.0), [0.1, 1.0, 0.1]),
    ];

    let ground = ModelMetadata::new([0.5, 0.5, 0.5], white)
        .with_specular(0.3)
        .with_shininess(1.0)
        .with_terrain(1.0, heightmap);

    let cylinder = builder.place(
        MeshDescriptor::new("cylinder", MeshShape::Cylinder { tessellation: 32 }).at(1.0, 1.0, 3.0),
        ModelMetadata::new([0.7, 0.7, 0.7], white)
            .with_specular(0.8)
            .with_shininess(16.0),
    );

    let icosphere = builder.place(
        MeshDescriptor::new(
            "icosphere",
            MeshShape::IcoSphere {
                subdivisions: 1,
                radius: 0.6,
            },
        )
        .at(1.0, 2.5, 3.0),
        ModelMetadata::new([0.7, 0.7, 0.7], white)
            .with_specular(0.8)
            .with_shininess(4.0),
    );

    let hemisphere = builder.place(
        MeshDescriptor::new(
            "hemisphere",
            MeshShape::Hemisphere {
                segments: 32,
                diameter: 4.0,
            },
        )
        .at(-5.0, 0.0, 5.0),
        ModelMetadata::new([1.0, 0.1, 1.0], white)
            .with_specular(0.7)
            .with_shininess(6.0),
    );

    let frame = wire_cube(builder, white);

    LayoutOutput {
        background: [1.0, 1.0, 1.0, 1.0],
        ambient: [0.2, 0.2, 0.2],
        lights,
        ground,
        models: vec![cylinder, icosphere, hemisphere, frame],
    }
}

/// Custom cube outline with a line frame and one strut per edge, all parented to it
fn wire_cube<C: RenderContext>(builder: &mut SceneBuilder<'_, C>, white: TextureHandle) -> Model {
    let mut frame = builder.place(
        MeshDescriptor::new(
            "custom",
            MeshShape::Custom {
                positions: WIRE_CUBE_VERTICES.to_vec(),
                indices: WIRE_CUBE_EDGES.to_vec(),
            },
        )
        .at(-4.0, 3.0, -4.0),
        ModelMetadata::new([1.0, 0.0, 0.0], white)
            .with_specular(0.9)
            .with_shininess(4.0),
    );

    let lines = builder.child(
        MeshDescriptor::new(
            "lines",
            MeshShape::LineSystem {
                lines: edge_lines(&WIRE_CUBE_VERTICES, &WIRE_CUBE_EDGES),
            },
        )
        .with_parent(frame.mesh),
    );
    frame.children.push(lines);

    for strut in edge_struts(&WIRE_CUBE_VERTICES, &WIRE_CUBE_EDGES) {
        let mut descriptor = MeshDescriptor::new(
            "box",
            MeshShape::Box {
                width: 0.2,
                height: 0.2,
                depth: strut.length,
            },
        )
        .with_rotation(strut.rotation)
        .with_parent(frame.mesh);
        descriptor.position = strut.center;

        let handle = builder.child(descriptor);
        frame.children.push(handle);
    }

    frame
}

fn stacked_balls<C: RenderContext>(builder: &mut SceneBuilder<'_, C>) -> LayoutOutput {
    let turf = builder.texture(AssetSlot::GroundTexture, "textures/field.jpg");
    let heightmap = builder.texture(AssetSlot::GroundHeightmap, "heightmaps/mulch-heightmap.png");

    let lights = vec![Light::new("light0", Vector3::new(1.0, 5.0, 5.0), WHITE)];

    let ground = ModelMetadata::new(WHITE, turf)
        .with_specular(0.0)
        .with_shininess(1.0)
        .with_terrain(1.0, heightmap);

    let balls = [
        ("sphere1", 0.5, "textures/balldimpled.jpg", 0.2),
        ("sphere2", 1.5, "textures/baseball.jpg", 0.1),
        ("sphere3", 2.5, "textures/futbol.jpg", 0.8),
    ];

    let models = balls
        .iter()
        .map(|&(name, height, texture, specular)| {
            let texture = builder.texture(AssetSlot::ModelTexture(name.to_string()), texture);
            builder.place(
                MeshDescriptor::new(
                    name,
                    MeshShape::Sphere {
                        segments: 32,
                        diameter: 1.0,
                    },
                )
                .at(0.0, height, 0.0),
                ModelMetadata::new(WHITE, texture)
                    .with_specular(specular)
                    .with_shininess(16.0),
            )
        })
        .collect();

    LayoutOutput {
        background: [1.0, 1.0, 1.0, 1.0],
        ambient: [0.3, 0.3, 0.3],
        lights,
        ground,
        models,
    }
}
