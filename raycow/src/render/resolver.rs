use crate::geometry::ray::Ray;
use crate::materials::color::Color;
use crate::scene::scene_object::SceneObject;

use super::context::RenderContext;
use super::intersection::Intersection;

pub struct Hit<'a> {

    object: &'a SceneObject,
    intersection: Intersection,
}

impl<'a> Hit<'a> {

    pub fn new(object: &'a SceneObject, intersection: Intersection) -> Self {
        Self {
            object,
            intersection,
        }
    }

    pub fn object(&self) -> &'a SceneObject {
        self.object
    }

    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }
}

// finds the nearest intersection along the ray, or, when `opacity_sum` is
// passed, accumulates how much light the occluders along the ray block
pub fn resolve<'a>(context: &'a RenderContext, ray: &Ray, mut opacity_sum: Option<&mut Color>) -> Option<Hit<'a>> {
    let options = context.options();
    let mut ray = ray.clone();
    let mut nearest: Option<Hit<'a>> = None;

    let candidates: Vec<&'a SceneObject> = if options.acceleration {
        let mut candidates: Vec<&'a SceneObject> = context.planes().iter().collect();
        if let Some(bvh) = context.bvh() {
            for index in bvh.candidates(&ray) {
                candidates.push(&context.boundables()[index]);
            }
        }
        candidates
    } else {
        context.scene().objects().iter().collect()
    };

    trace!("resolving a ray against {} candidates", candidates.len());

    for object in candidates {
        let intersection = match object.check_intersection(&ray, options.allow_back_hits) {
            Some(v) => v,
            None => continue,
        };

        if let Some(sum) = opacity_sum.as_deref_mut() {
            if !options.shadow_transparency {
                // binary shadows: the first occluder blocks everything
                *sum = Color::white();
                return Some(Hit::new(object, intersection));
            }

            *sum = (*sum + (Color::white() - object.material().transmissive)).clamped();
            if *sum == Color::white() {
                return Some(Hit::new(object, intersection));
            }
        }

        let is_nearer = nearest.as_ref()
            .map(|hit| intersection.ray_distance() < hit.intersection().ray_distance())
            .unwrap_or(true);

        if is_nearer {
            // opacity queries must visit every occluder, so the interval
            // only narrows in nearest-hit mode
            if opacity_sum.is_none() {
                ray.set_far(intersection.ray_distance());
            }
            nearest = Some(Hit::new(object, intersection));
        }
    }

    nearest
}
