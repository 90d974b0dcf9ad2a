use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::render::intersection::Intersection;

#[derive(Clone)]
pub struct Sphere {

    center: Vector3,
    radius: f64,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            center,
            radius,
        }
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    // |origin + t * direction - center|^2 = radius^2, solved for t
    pub fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let to_origin = *ray.origin() - self.center;
        let ddotd = ray.direction().dot_product_with_self();
        let b = ray.direction().dot_product(&to_origin);
        let discriminant = b * b - ddotd * (to_origin.dot_product_with_self() - self.radius * self.radius);

        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let mut t = (-b + root) / ddotd;
        if discriminant > 0.0 {
            let t2 = (-b - root) / ddotd;
            // the closer intersection wins, unless it is before the near bound
            if (t2 < t && t2 >= ray.near()) || (t2 > t && t < ray.near()) {
                t = t2;
            }
        }

        if !ray.accepts(t) {
            return None;
        }

        let point = ray.point(t);
        let normal = (point - self.center).normalized();
        Some(Intersection::new(t, point, normal))
    }

    pub fn bounds(&self) -> BoundingBox {
        let extent = Vector3::new(self.radius, self.radius, self.radius);
        BoundingBox::new(self.center - extent, self.center + extent)
    }
}
