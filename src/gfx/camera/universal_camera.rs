use super::camera_utils::Camera;
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Pitch stops this close to straight up or down
const MAX_PITCH_DOT: f32 = 0.99;

/// Free-flying first person camera described by an eye, a target and an up vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniversalCamera {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for UniversalCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.target),
            self.up,
        );
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    fn eye(&self) -> Vector3<f32> {
        self.position
    }
}

impl UniversalCamera {
    pub fn new(position: Vector3<f32>) -> Self {
        Self {
            position,
            target: position - Vector3::unit_z(),
            up: Vector3::unit_y(),
            aspect: 1.0,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn with_target(mut self, target: Vector3<f32>) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Vector3<f32>) -> Self {
        self.up = up;
        self
    }

    pub fn with_fov(mut self, fovy: impl Into<Rad<f32>>) -> Self {
        self.fovy = fovy.into();
        self
    }

    pub fn with_clip_planes(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Normalized view direction
    pub fn forward(&self) -> Vector3<f32> {
        (self.target - self.position).normalize()
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Turns the view in place; the eye doesn't move
    ///
    /// Positive `yaw` turns left, positive `pitch` looks up. Pitch is dropped
    /// when it would tip the view onto the up axis.
    pub fn look(&mut self, yaw: f32, pitch: f32) {
        let offset = self.target - self.position;
        let distance = offset.magnitude();
        let up = self.up.normalize();

        let yawed = Quaternion::from_axis_angle(up, Rad(yaw)).rotate_vector(offset / distance);
        let right = yawed.cross(up);
        let direction = if right.magnitude2() > f32::EPSILON {
            let pitched =
                Quaternion::from_axis_angle(right.normalize(), Rad(pitch)).rotate_vector(yawed);
            if pitched.dot(up).abs() < MAX_PITCH_DOT {
                pitched
            } else {
                yawed
            }
        } else {
            yawed
        };

        self.target = self.position + direction * distance;
    }

    /// Flies eye and target along the view direction
    pub fn dolly(&mut self, distance: f32) {
        let delta = self.forward() * distance;
        self.position += delta;
        self.target += delta;
    }

    /// Slides eye and target across the view plane
    pub fn pan(&mut self, right: f32, up: f32) {
        let right_axis = self.forward().cross(self.up).normalize();
        let up_axis = right_axis.cross(self.forward());
        let delta = right_axis * right + up_axis * up;
        self.position += delta;
        self.target += delta;
    }
}
