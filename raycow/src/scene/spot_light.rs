use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;

#[derive(Clone)]
pub struct SpotLight {

    color: Color,
    position: Vector3,
    direction: Vector3,
    cutoff: f64, // half angle of the cone, degrees
}

impl SpotLight {

    pub fn new(color: Color, position: Vector3, direction: Vector3, cutoff: f64) -> Self {
        SpotLight {
            color,
            position,
            direction,
            cutoff,
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
}
