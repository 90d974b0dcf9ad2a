use super::color::Color;
use crate::geometry::vector3::Vector3;

#[derive(Clone, Debug)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f64,
    pub reflective: Color,
    pub transmissive: Color,
    pub refraction: f64,
}

impl Material {

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: Color) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: Color, shininess: f64) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    pub fn with_reflective(mut self, reflective: Color) -> Self {
        self.reflective = reflective;
        self
    }

    pub fn with_transmissive(mut self, transmissive: Color, refraction: f64) -> Self {
        self.transmissive = transmissive;
        self.refraction = refraction;
        self
    }
}

impl Default for Material {

    fn default() -> Self {
        Material {
            ambient: Color::black(),
            diffuse: Color::black(),
            specular: Color::black(),
            shininess: 1.0,
            reflective: Color::black(),
            transmissive: Color::black(),
            refraction: 0.0,
        }
    }
}

// mirrors `vector` (pointing away from the surface) about `normal`
pub fn reflect(vector: &Vector3, normal: &Vector3) -> Vector3 {
    *normal * (2.0 * normal.dot_product(vector)) - *vector
}
