use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::render::intersection::Intersection;

#[derive(Clone)]
pub struct Triangle {

    vertices: [Vector3; 3],
}

impl Triangle {

    pub fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn vertices(&self) -> &[Vector3; 3] {
        &self.vertices
    }

    pub fn normal(&self) -> Vector3 {
        let [a, b, c] = &self.vertices;
        (*c - *b).cross_product(&(*a - *b)).normalized()
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::around_points(&self.vertices)
    }

    // plane test first, then a barycentric sign test; back face hits are
    // tolerated when `allow_back_hits` is set since mesh winding is not
    // guaranteed to be consistent
    pub fn check_intersection(&self, ray: &Ray, allow_back_hits: bool) -> Option<Intersection> {
        let [a, b, c] = &self.vertices;
        let normal = self.normal();

        let ndotd = normal.dot_product(ray.direction());
        if ndotd == 0.0 {
            return None;
        }

        let t = normal.dot_product(&(*a - *ray.origin())) / ndotd;
        if !ray.accepts(t) {
            return None;
        }

        let point = ray.point(t);
        let bary_a = (*b - *a).cross_product(&(point - *a)).dot_product(&normal);
        let bary_b = (*c - *b).cross_product(&(point - *b)).dot_product(&normal);
        let bary_c = (*a - *c).cross_product(&(point - *c)).dot_product(&normal);

        let front = bary_a > 0.0 && bary_b > 0.0 && bary_c > 0.0;
        let back = bary_a < 0.0 && bary_b < 0.0 && bary_c < 0.0;

        if front || (back && allow_back_hits) {
            Some(Intersection::new(t, point, normal))
        } else {
            None
        }
    }
}
