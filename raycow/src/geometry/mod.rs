pub mod bounding_box;
pub mod bvh;
pub mod ray;
pub mod vector3;
