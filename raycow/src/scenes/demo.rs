use std::collections::HashMap;

use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;
use crate::materials::material::Material;
use crate::objects::mesh::Mesh;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::Triangle;
use crate::scene::ambient_light::AmbientLight;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;
use crate::scene::scene_object::Shape;
use crate::scene::spot_light::SpotLight;

use super::provider::{SceneProvider, SceneProviderError};

// a built-in scene exercising every primitive and light kind, used when no
// scene file is passed
pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self, _options: &HashMap<String, String>) -> Result<Scene, SceneProviderError> {
        let camera = Camera::default().with_background(Color::new(0.05, 0.05, 0.1));
        let mut scene = Scene::new(camera);

        let floor = Material::default()
            .with_ambient(Color::new(0.1, 0.1, 0.1))
            .with_diffuse(Color::new(0.6, 0.6, 0.6));
        scene.add_object(floor, Shape::Plane(Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0))));

        let matte_red = Material::default()
            .with_ambient(Color::new(0.1, 0.02, 0.02))
            .with_diffuse(Color::new(0.8, 0.1, 0.1))
            .with_specular(Color::new(0.8, 0.8, 0.8), 32.0);
        scene.add_object(matte_red, Shape::Sphere(Sphere::new(Vector3::new(-1.2, 0.0, -5.0), 1.0)));

        let mirror = Material::default()
            .with_diffuse(Color::new(0.05, 0.05, 0.05))
            .with_reflective(Color::new(0.9, 0.9, 0.9));
        scene.add_object(mirror, Shape::Sphere(Sphere::new(Vector3::new(1.4, 0.2, -6.5), 1.2)));

        let glass = Material::default()
            .with_specular(Color::new(0.5, 0.5, 0.5), 64.0)
            .with_transmissive(Color::new(0.9, 0.9, 0.9), 1.5);
        scene.add_object(glass, Shape::Sphere(Sphere::new(Vector3::new(0.2, -0.4, -3.2), 0.5)));

        let leaf_green = Material::default()
            .with_ambient(Color::new(0.02, 0.06, 0.02))
            .with_diffuse(Color::new(0.2, 0.7, 0.3));
        scene.add_object(leaf_green, Shape::Mesh(Mesh::new(vec![
            Triangle::new(Vector3::new(-0.5, -1.0, -4.0), Vector3::new(0.5, -1.0, -4.0), Vector3::new(0.0, 0.0, -4.3)),
            Triangle::new(Vector3::new(0.5, -1.0, -4.6), Vector3::new(-0.5, -1.0, -4.6), Vector3::new(0.0, 0.0, -4.3)),
        ])));

        scene.add_light(Light::Ambient(AmbientLight::new(Color::new(0.4, 0.4, 0.4))));
        scene.add_light(Light::Point(PointLight::new(Color::new(0.8, 0.8, 0.8), Vector3::new(3.0, 4.0, -1.0))));
        scene.add_light(Light::Spot(SpotLight::new(
            Color::new(0.6, 0.6, 0.5),
            Vector3::new(-3.0, 5.0, -2.0),
            Vector3::new(1.0, -1.6, -1.0),
            25.0
        )));

        Ok(scene)
    }
}
