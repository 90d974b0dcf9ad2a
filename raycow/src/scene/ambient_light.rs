use crate::materials::color::Color;

#[derive(Clone)]
pub struct AmbientLight {

    color: Color,
}

impl AmbientLight {

    pub fn new(color: Color) -> Self {
        AmbientLight {
            color,
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}
