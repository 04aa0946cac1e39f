use cgmath::{Matrix4, Vector3};

/// Anything that can hand the engine an eye position and a view-projection
pub trait Camera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;

    fn eye(&self) -> Vector3<f32>;

    /// Packs the camera for engines that upload it as a single uniform buffer
    fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_position: self.eye().extend(1.0).into(),
            view_proj: self.build_view_projection_matrix().into(),
        }
    }
}

/// GPU layout of the camera block: `vec4 view_position; mat4 view_proj;`
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// w is always 1 so the block stays 16-byte aligned
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}
