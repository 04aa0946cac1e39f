use cgmath::Vector3;

/// Point light as seen by the shading programs
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub name: String,
    pub position: Vector3<f32>,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl Light {
    /// Creates a light with a white specular component
    pub fn new(name: &str, position: Vector3<f32>, diffuse: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            position,
            diffuse,
            specular: [1.0, 1.0, 1.0],
        }
    }

    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }
}
