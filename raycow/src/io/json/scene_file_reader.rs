use std::fs;

use custom_error::custom_error;
use serde::Deserialize;

use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;
use crate::materials::material::Material;
use crate::objects::mesh::Mesh;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::Triangle;
use crate::scene::ambient_light::AmbientLight;
use crate::scene::camera::Camera;
use crate::scene::directional_light::DirectionalLight;
use crate::scene::light::Light;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;
use crate::scene::scene_object::Shape;
use crate::scene::spot_light::SpotLight;

custom_error! {pub SceneFileError
    FailedToRead {description: String} = "Failed to read scene file: {description}",
    FailedToParse {description: String} = "Failed to parse scene file: {description}",
}

// mirrors the scene file schema: objects and lights are tagged by "type",
// every material field is optional
#[derive(Deserialize)]
struct SceneFile {
    #[serde(default)]
    camera: CameraSpec,
    #[serde(default)]
    objects: Vec<ObjectSpec>,
    #[serde(default)]
    lights: Vec<LightSpec>,
}

#[derive(Deserialize, Default)]
struct CameraSpec {
    position: Option<[f64; 3]>,
    field: Option<f64>,
    background: Option<[f64; 3]>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectSpec {
    Sphere {
        #[serde(default)]
        material: MaterialSpec,
        position: [f64; 3],
        radius: f64,
    },
    Plane {
        #[serde(default)]
        material: MaterialSpec,
        position: [f64; 3],
        normal: [f64; 3],
    },
    Mesh {
        #[serde(default)]
        material: MaterialSpec,
        triangles: Vec<[[f64; 3]; 3]>,
    },
}

#[derive(Deserialize, Default)]
struct MaterialSpec {
    ambient: Option<[f64; 3]>,
    diffuse: Option<[f64; 3]>,
    specular: Option<[f64; 3]>,
    shininess: Option<f64>,
    reflective: Option<[f64; 3]>,
    transmissive: Option<[f64; 3]>,
    refraction: Option<f64>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LightSpec {
    Ambient {
        color: [f64; 3],
    },
    Directional {
        color: [f64; 3],
        direction: [f64; 3],
    },
    Point {
        color: [f64; 3],
        position: [f64; 3],
    },
    Spot {
        color: [f64; 3],
        position: [f64; 3],
        direction: [f64; 3],
        cutoff: f64,
    },
}

pub fn load(path: &str) -> Result<Scene, SceneFileError> {
    info!("loading scene from {}", path);

    let data = fs::read_to_string(path).map_err(|err| SceneFileError::FailedToRead {
        description: err.to_string(),
    })?;

    parse(&data)
}

pub fn parse(data: &str) -> Result<Scene, SceneFileError> {
    let file: SceneFile = serde_json::from_str(data).map_err(|err| SceneFileError::FailedToParse {
        description: err.to_string(),
    })?;

    let mut camera = Camera::default();
    if let Some(position) = &file.camera.position {
        camera = camera.with_position(to_vector(position));
    }
    if let Some(field) = file.camera.field {
        camera = camera.with_field(field);
    }
    if let Some(background) = &file.camera.background {
        camera = camera.with_background(to_color(background));
    }

    let mut scene = Scene::new(camera);

    for object in &file.objects {
        match object {
            ObjectSpec::Sphere { material, position, radius } => {
                scene.add_object(to_material(material), Shape::Sphere(Sphere::new(to_vector(position), *radius)));
            },
            ObjectSpec::Plane { material, position, normal } => {
                scene.add_object(to_material(material), Shape::Plane(Plane::new(to_vector(position), to_vector(normal))));
            },
            ObjectSpec::Mesh { material, triangles } => {
                let triangles = triangles.iter()
                    .map(|t| Triangle::new(to_vector(&t[0]), to_vector(&t[1]), to_vector(&t[2])))
                    .collect();
                scene.add_object(to_material(material), Shape::Mesh(Mesh::new(triangles)));
            },
        }
    }

    for light in &file.lights {
        scene.add_light(match light {
            LightSpec::Ambient { color } => {
                Light::Ambient(AmbientLight::new(to_color(color)))
            },
            LightSpec::Directional { color, direction } => {
                Light::Directional(DirectionalLight::new(to_color(color), to_vector(direction)))
            },
            LightSpec::Point { color, position } => {
                Light::Point(PointLight::new(to_color(color), to_vector(position)))
            },
            LightSpec::Spot { color, position, direction, cutoff } => {
                Light::Spot(SpotLight::new(to_color(color), to_vector(position), to_vector(direction), *cutoff))
            },
        });
    }

    info!("loaded scene with {} objects and {} lights", scene.objects().len(), scene.lights().len());
    Ok(scene)
}

fn to_vector(values: &[f64; 3]) -> Vector3 {
    Vector3::new(values[0], values[1], values[2])
}

fn to_color(values: &[f64; 3]) -> Color {
    Color::new(values[0], values[1], values[2])
}

fn to_material(spec: &MaterialSpec) -> Material {
    let mut material = Material::default();
    if let Some(v) = &spec.ambient {
        material.ambient = to_color(v);
    }
    if let Some(v) = &spec.diffuse {
        material.diffuse = to_color(v);
    }
    if let Some(v) = &spec.specular {
        material.specular = to_color(v);
    }
    if let Some(v) = spec.shininess {
        material.shininess = v;
    }
    if let Some(v) = &spec.reflective {
        material.reflective = to_color(v);
    }
    if let Some(v) = &spec.transmissive {
        material.transmissive = to_color(v);
    }
    if let Some(v) = spec.refraction {
        material.refraction = v;
    }
    material
}
