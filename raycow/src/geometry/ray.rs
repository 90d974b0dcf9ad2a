use super::vector3::Vector3;

#[derive(Clone)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
    near: f64,
    far: Option<f64>, // None means the ray is unbounded
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self::with_interval(origin, direction, 0.0, None)
    }

    pub fn with_interval(origin: Vector3, direction: Vector3, near: f64, far: Option<f64>) -> Self {
        Ray {
            origin,
            direction,
            near,
            far,
        }
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> Option<f64> {
        self.far
    }

    // narrows the interval once a nearer hit is confirmed
    pub fn set_far(&mut self, far: f64) {
        self.far = Some(far);
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }

    pub fn accepts(&self, distance: f64) -> bool {
        distance >= self.near && self.far.map(|far| distance <= far).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_along_ray() {
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.point(2.5), Vector3::new(1.0, 0.0, -2.5));
    }

    #[test]
    fn test_accepts_unbounded() {
        let ray = Ray::with_interval(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0), 1.0, None);
        assert!(!ray.accepts(0.5));
        assert!(ray.accepts(1.0));
        assert!(ray.accepts(1e9));
    }

    #[test]
    fn test_accepts_bounded() {
        let ray = Ray::with_interval(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0), 1.0, Some(5.0));
        assert!(ray.accepts(5.0));
        assert!(!ray.accepts(5.1));
    }

    #[test]
    fn test_set_far_narrows() {
        let mut ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        assert!(ray.accepts(10.0));
        ray.set_far(4.0);
        assert!(!ray.accepts(10.0));
        assert!(ray.accepts(4.0));
    }
}
