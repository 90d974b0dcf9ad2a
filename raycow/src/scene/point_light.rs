use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;

#[derive(Clone)]
pub struct PointLight {

    color: Color,
    position: Vector3,
}

impl PointLight {

    pub fn new(color: Color, position: Vector3) -> Self {
        PointLight {
            color,
            position,
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }
}
