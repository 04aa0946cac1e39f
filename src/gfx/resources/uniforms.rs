//! Per-frame lighting uniforms
//!
//! [`ShaderUniforms`] is what the registry pushes into the active shading
//! programs before every frame. Engines that upload one uniform buffer instead of
//! setting named uniforms can pack it into a [`LightingUniform`].

use cgmath::Vector3;

use crate::gfx::scene::light::Light;

/// Fixed light capacity of [`LightingUniform`]. MUST match the shader array size.
pub const MAX_LIGHTS: usize = 8;

/// Values bound to the named shader uniforms
///
/// * `camera_position` - `vec3 camera_position`
/// * `ambient` - `vec3 ambient`
/// * `num_lights` - `int num_lights`
/// * `light_positions` - `vec3 light_positions[]`
/// * `light_colors` - `vec3 light_colors[]` (diffuse)
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderUniforms {
    pub camera_position: [f32; 3],
    pub ambient: [f32; 3],
    pub num_lights: i32,
    pub light_positions: Vec<[f32; 3]>,
    pub light_colors: Vec<[f32; 3]>,
}

impl ShaderUniforms {
    pub fn new(camera_position: Vector3<f32>, ambient: [f32; 3], lights: &[Light]) -> Self {
        Self {
            camera_position: camera_position.into(),
            ambient,
            num_lights: lights.len() as i32,
            light_positions: lights.iter().map(|light| light.position.into()).collect(),
            light_colors: lights.iter().map(|light| light.diffuse).collect(),
        }
    }

    /// Light positions flattened as x, y, z triples
    pub fn flat_light_positions(&self) -> Vec<f32> {
        self.light_positions.iter().flatten().copied().collect()
    }

    /// Packs into the fixed-size GPU layout. Lights beyond [`MAX_LIGHTS`] are dropped.
    pub fn to_uniform(&self) -> LightingUniform {
        let mut uniform: LightingUniform = bytemuck::Zeroable::zeroed();

        let count = self.light_positions.len().min(MAX_LIGHTS);
        if self.light_positions.len() > MAX_LIGHTS {
            log::warn!(
                "{} lights exceed uniform capacity of {}, extra lights ignored",
                self.light_positions.len(),
                MAX_LIGHTS
            );
        }

        uniform.camera_position = self.camera_position;
        uniform.num_lights = count as i32;
        uniform.ambient = self.ambient;

        for i in 0..count {
            uniform.light_positions[i] = pad(self.light_positions[i]);
            uniform.light_colors[i] = pad(self.light_colors[i]);
        }

        uniform
    }
}

fn pad(v: [f32; 3]) -> [f32; 4] {
    [v[0], v[1], v[2], 0.0]
}

/// std140 lighting block
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub camera_position: [f32; 3],
    pub num_lights: i32,
    pub ambient: [f32; 3],
    _padding: f32,
    pub light_positions: [[f32; 4]; MAX_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_LIGHTS],
}
// Total: 16 + 16 + 8*16 + 8*16 = 288 bytes

impl LightingUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light(x: f32, color: [f32; 3]) -> Light {
        Light::new("light", Vector3::new(x, 1.0, 2.0), color)
    }

    #[test]
    fn test_uniforms_follow_light_order() {
        let lights = [light(1.0, [1.0, 0.0, 0.0]), light(2.0, [0.0, 1.0, 0.0])];
        let uniforms = ShaderUniforms::new(Vector3::new(0.0, 1.8, 10.0), [0.2; 3], &lights);

        assert_eq!(uniforms.num_lights, 2);
        assert_eq!(uniforms.camera_position, [0.0, 1.8, 10.0]);
        assert_eq!(uniforms.light_colors, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(
            uniforms.flat_light_positions(),
            vec![1.0, 1.0, 2.0, 2.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_lighting_block_layout_and_capacity() {
        assert_eq!(std::mem::size_of::<LightingUniform>(), 288);

        let lights: Vec<Light> = (0..10).map(|i| light(i as f32, [1.0; 3])).collect();
        let block = ShaderUniforms::new(Vector3::new(0.0, 0.0, 0.0), [0.3; 3], &lights).to_uniform();
        assert_eq!(block.num_lights, MAX_LIGHTS as i32);
        assert_eq!(block.light_positions[7], [7.0, 1.0, 2.0, 0.0]);
        assert_eq!(block.as_bytes().len(), 288);
    }
}
