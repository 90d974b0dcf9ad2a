use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::render::intersection::Intersection;

#[derive(Clone)]
pub struct Plane {

    position: Vector3,
    normal: Vector3,
}

impl Plane {

    pub fn new(position: Vector3, normal: Vector3) -> Self {
        Self {
            position,
            normal,
        }
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    pub fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let normal = self.normal.normalized();
        let ndotd = normal.dot_product(ray.direction());

        if ndotd == 0.0 {
            return None;
        }

        let t = normal.dot_product(&(self.position - *ray.origin())) / ndotd;
        if !ray.accepts(t) {
            return None;
        }

        // the stored normal is reported as-is, shading compensates for
        // back facing hits
        Some(Intersection::new(t, ray.point(t), normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit() {
        let plane = Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, -1.0, 0.0));

        let intersection = plane.check_intersection(&ray).unwrap();
        assert!((intersection.ray_distance() - 1.0).abs() < 1e-9);
        assert_eq!(*intersection.point(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let ray = Ray::new(Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));
        assert!(plane.check_intersection(&ray).is_none());
    }

    #[test]
    fn test_normal_is_never_flipped() {
        let plane = Plane::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        // the ray approaches from below, against the stored normal direction
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0));

        let intersection = plane.check_intersection(&ray).unwrap();
        assert_eq!(*intersection.normal(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_plane_behind_origin_is_rejected() {
        let plane = Plane::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, -1.0, 0.0));
        assert!(plane.check_intersection(&ray).is_none());
    }
}
