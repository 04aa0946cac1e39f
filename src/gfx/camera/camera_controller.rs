use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, MouseScrollDelta},
    keyboard::{Key, NamedKey},
};

use super::universal_camera::UniversalCamera;

/// Mouse navigation for a [`UniversalCamera`]
///
/// Drag looks around, Shift + drag pans, the wheel flies along the view
/// direction and Shift + C returns to the home view.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    home: UniversalCamera,
    is_shift_held: bool,
    is_mouse_pressed: bool,
}

impl CameraController {
    pub fn new(home: UniversalCamera) -> Self {
        Self {
            rotate_speed: 0.005,
            zoom_speed: 0.5,
            pan_speed: 0.01,
            home,
            is_shift_held: false,
            is_mouse_pressed: false,
        }
    }

    /// Returns true if `camera` moved
    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut UniversalCamera) -> bool {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
                false
            }
            DeviceEvent::MouseWheel { delta } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32,
                };
                camera.dolly(scroll * self.zoom_speed);
                true
            }
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                let (dx, dy) = (delta.0 as f32, delta.1 as f32);
                if self.is_shift_held {
                    camera.pan(-dx * self.pan_speed, dy * self.pan_speed);
                } else {
                    camera.look(-dx * self.rotate_speed, -dy * self.rotate_speed);
                }
                true
            }
            _ => false,
        }
    }

    /// Tracks Shift and handles the reset chord. Returns true if `camera` moved.
    pub fn process_key(
        &mut self,
        key: &Key,
        state: ElementState,
        camera: &mut UniversalCamera,
    ) -> bool {
        match key {
            Key::Named(NamedKey::Shift) => {
                self.is_shift_held = state == ElementState::Pressed;
                false
            }
            Key::Character(c)
                if state == ElementState::Pressed
                    && self.is_shift_held
                    && c.as_str().eq_ignore_ascii_case("c") =>
            {
                log::info!("Camera reset to home view");
                *camera = UniversalCamera {
                    aspect: camera.aspect,
                    ..self.home
                };
                true
            }
            _ => false,
        }
    }
}
