use crate::materials::material::Material;

use super::camera::Camera;
use super::light::Light;
use super::scene_object::{SceneObject, Shape};

pub struct Scene {

    camera: Camera,
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl Scene {

    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn add_object(&mut self, material: Material, shape: Shape) {
        let id = self.objects.len();
        self.objects.push(SceneObject::new(id, material, shape));
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light)
    }

    pub fn lights(&self) -> &Vec<Light> {
        &self.lights
    }
}
