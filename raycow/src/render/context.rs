use crate::geometry::bvh::{Bvh, BvhItem};
use crate::materials::color::Color;
use crate::scene::scene::Scene;
use crate::scene::scene_object::{SceneObject, Shape};

use super::options::RenderOptions;

// everything a trace needs, built once after scene load and immutable from
// then on; pixel traces can share it across threads freely
pub struct RenderContext {

    scene: Scene,
    options: RenderOptions,
    planes: Vec<SceneObject>,
    boundables: Vec<SceneObject>,
    bvh: Option<Bvh>,
}

impl RenderContext {

    pub fn new(scene: Scene, options: RenderOptions) -> Self {
        let mut planes = Vec::new();
        let mut boundables = Vec::new();
        let mut next_id = scene.objects().len();

        for object in scene.objects() {
            match object.shape() {
                Shape::Plane(_) => planes.push(object.clone()),
                Shape::Sphere(_) | Shape::MeshTriangle { .. } => boundables.push(object.clone()),
                Shape::Mesh(mesh) => {
                    // split grouped meshes into individually boundable triangles
                    for triangle in mesh.triangles() {
                        let centroid = triangle.bounds().center();
                        boundables.push(SceneObject::new(
                            next_id,
                            object.material().clone(),
                            Shape::MeshTriangle { triangle: triangle.clone(), centroid }
                        ));
                        next_id += 1;
                    }
                },
            }
        }

        let bvh = if options.acceleration && !boundables.is_empty() {
            let items = boundables.iter().enumerate()
                .map(|(index, object)| BvhItem {
                    primitive: index,
                    bounds: object.bounds().expect("boundable objects always have bounds"),
                    representative: object.representative().expect("boundable objects always have a sort position"),
                })
                .collect();

            Some(Bvh::build(items))
        } else {
            None
        };

        info!("render context holds {} planes and {} boundable objects", planes.len(), boundables.len());

        Self {
            scene,
            options,
            planes,
            boundables,
            bvh,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn background(&self) -> &Color {
        self.scene.camera().background()
    }

    pub fn planes(&self) -> &Vec<SceneObject> {
        &self.planes
    }

    pub fn boundables(&self) -> &Vec<SceneObject> {
        &self.boundables
    }

    pub fn bvh(&self) -> Option<&Bvh> {
        self.bvh.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::mesh::Mesh;
    use crate::objects::plane::Plane;
    use crate::objects::sphere::Sphere;
    use crate::objects::triangle::Triangle;
    use crate::scene::camera::Camera;

    use super::*;

    fn triangle_at(z: f64) -> Triangle {
        Triangle::new(
            Vector3::new(-1.0, -1.0, z),
            Vector3::new(1.0, -1.0, z),
            Vector3::new(0.0, 1.0, z)
        )
    }

    #[test]
    fn test_meshes_are_split_into_triangles() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(Material::default(), Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));
        scene.add_object(Material::default(), Shape::Plane(Plane::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0))));
        scene.add_object(Material::default(), Shape::Mesh(Mesh::new(vec![triangle_at(-4.0), triangle_at(-6.0)])));

        let context = RenderContext::new(scene, RenderOptions::default());

        assert_eq!(context.planes().len(), 1);
        assert_eq!(context.boundables().len(), 3);
        assert!(context.bvh().is_some());
    }

    #[test]
    fn test_expanded_triangles_get_fresh_ids() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(Material::default(), Shape::Mesh(Mesh::new(vec![triangle_at(-4.0), triangle_at(-6.0)])));

        let context = RenderContext::new(scene, RenderOptions::default());

        let mut ids: Vec<usize> = context.boundables().iter().map(|v| v.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_planes_only_scene_has_no_bvh() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(Material::default(), Shape::Plane(Plane::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0))));

        let context = RenderContext::new(scene, RenderOptions::default());
        assert!(context.bvh().is_none());
    }

    #[test]
    fn test_disabled_acceleration_skips_bvh_build() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(Material::default(), Shape::Sphere(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0)));

        let mut options = RenderOptions::default();
        options.acceleration = false;

        let context = RenderContext::new(scene, options);
        assert!(context.bvh().is_none());
    }
}
