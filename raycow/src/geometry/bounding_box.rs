use super::ray::Ray;
use super::vector3::Vector3;

#[derive(Clone, Debug)]
pub struct BoundingBox {
    pub min_bound: Vector3,
    pub max_bound: Vector3,
}

impl BoundingBox {

    pub const fn new(min_bound: Vector3, max_bound: Vector3) -> Self {
        BoundingBox {
            min_bound,
            max_bound,
        }
    }

    // identity element for extend
    pub const fn empty() -> Self {
        BoundingBox {
            min_bound: Vector3::new(1e30, 1e30, 1e30),
            max_bound: Vector3::new(-1e30, -1e30, -1e30),
        }
    }

    pub fn around_points(points: &[Vector3]) -> Self {
        let mut result = Self::empty();
        for point in points {
            result.min_bound = Vector3::new(
                result.min_bound.x.min(point.x),
                result.min_bound.y.min(point.y),
                result.min_bound.z.min(point.z)
            );
            result.max_bound = Vector3::new(
                result.max_bound.x.max(point.x),
                result.max_bound.y.max(point.y),
                result.max_bound.z.max(point.z)
            );
        }
        result
    }

    pub fn extend(&mut self, other: &BoundingBox) {
        self.min_bound = Vector3::new(
            self.min_bound.x.min(other.min_bound.x),
            self.min_bound.y.min(other.min_bound.y),
            self.min_bound.z.min(other.min_bound.z)
        );
        self.max_bound = Vector3::new(
            self.max_bound.x.max(other.max_bound.x),
            self.max_bound.y.max(other.max_bound.y),
            self.max_bound.z.max(other.max_bound.z)
        );
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min_bound.x <= other.min_bound.x && self.min_bound.y <= other.min_bound.y && self.min_bound.z <= other.min_bound.z
            && self.max_bound.x >= other.max_bound.x && self.max_bound.y >= other.max_bound.y && self.max_bound.z >= other.max_bound.z
    }

    pub fn center(&self) -> Vector3 {
        (self.min_bound + self.max_bound) * 0.5
    }

    pub fn extent(&self) -> Vector3 {
        self.max_bound - self.min_bound
    }

    // y wins over x and z, then z wins over the rest, x is the fallback
    pub fn longest_axis(&self) -> usize {
        let extent = self.extent();

        if extent.x < extent.y && extent.z < extent.y {
            1
        } else if extent.x < extent.z && extent.y < extent.z {
            2
        } else {
            0
        }
    }

    // slab test: does the ray line overlap the box in front of the origin
    pub fn intersected_by(&self, ray: &Ray) -> bool {
        let mut t_min = -1e30;
        let mut t_max = 1e30;

        for axis in 0..3 {
            let inv_d = 1.0 / ray.direction().axis(axis);
            let mut t0 = (self.min_bound.axis(axis) - ray.origin().axis(axis)) * inv_d;
            let mut t1 = (self.max_bound.axis(axis) - ray.origin().axis(axis)) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t0.max(t_min);
            t_max = t1.min(t_max);
        }

        t_max >= t_min.max(0.0)
    }
}
