use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;

#[derive(Clone)]
pub struct Camera {

    position: Vector3,
    field: f64, // vertical field of view, degrees
    background: Color,
}

impl Camera {

    pub fn new(position: Vector3, field: f64, background: Color) -> Self {
        Self {
            position,
            field,
            background,
        }
    }

    pub fn default() -> Self {
        Self::new(Vector3::zero(), 60.0, Color::black())
    }

    pub fn with_position(&self, position: Vector3) -> Self {
        Self::new(position, self.field, self.background)
    }

    pub fn with_field(&self, field: f64) -> Self {
        Self::new(self.position, field, self.background)
    }

    pub fn with_background(&self, background: Color) -> Self {
        Self::new(self.position, self.field, background)
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn field(&self) -> f64 {
        self.field
    }

    pub fn background(&self) -> &Color {
        &self.background
    }
}
