use crate::geometry::ray::Ray;
use crate::render::intersection::Intersection;

use super::triangle::Triangle;

// a grouped triangle list; the render context usually splits it into
// individually boundable triangles, the linear scan below only runs when
// acceleration is off
#[derive(Clone)]
pub struct Mesh {

    triangles: Vec<Triangle>,
}

impl Mesh {

    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
        }
    }

    pub fn triangles(&self) -> &Vec<Triangle> {
        &self.triangles
    }

    pub fn check_intersection(&self, ray: &Ray, allow_back_hits: bool) -> Option<Intersection> {
        let mut ray = ray.clone();
        let mut nearest: Option<Intersection> = None;

        for triangle in &self.triangles {
            if let Some(intersection) = triangle.check_intersection(&ray, allow_back_hits) {
                let is_nearer = nearest.as_ref()
                    .map(|v| intersection.ray_distance() < v.ray_distance())
                    .unwrap_or(true);

                if is_nearer {
                    // narrow the interval while scanning
                    ray.set_far(intersection.ray_distance());
                    nearest = Some(intersection);
                }
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::vector3::Vector3;

    use super::*;

    fn facing_triangle(z: f64) -> Triangle {
        Triangle::new(
            Vector3::new(-1.0, -1.0, z),
            Vector3::new(1.0, -1.0, z),
            Vector3::new(0.0, 1.0, z)
        )
    }

    #[test]
    fn test_nearest_triangle_wins() {
        let mesh = Mesh::new(vec![facing_triangle(-9.0), facing_triangle(-4.0), facing_triangle(-7.0)]);
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

        let intersection = mesh.check_intersection(&ray, true).unwrap();
        assert!((intersection.ray_distance() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_mesh_never_hits() {
        let mesh = Mesh::new(Vec::new());
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        assert!(mesh.check_intersection(&ray, true).is_none());
    }
}
