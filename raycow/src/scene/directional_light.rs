use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;

#[derive(Clone)]
pub struct DirectionalLight {

    color: Color,
    direction: Vector3,
}

impl DirectionalLight {

    pub fn new(color: Color, direction: Vector3) -> Self {
        DirectionalLight {
            color,
            direction,
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}
