use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::color::Color;

use super::context::RenderContext;
use super::resolver::resolve;
use super::shading::shade;

// the sample point sits on the image plane, one unit in front of the eye
const PRIMARY_NEAR: f64 = 1.0;

// casts a single visibility ray through `sample` and shades whatever it hits
pub fn trace(context: &RenderContext, eye: &Vector3, sample: &Vector3) -> Option<Color> {
    let direction = (*sample - *eye).normalized();
    let ray = Ray::with_interval(*eye, direction, PRIMARY_NEAR, None);

    resolve(context, &ray, None)
        .map(|hit| shade(context, hit.object(), eye, hit.intersection().point(), hit.intersection().normal(), 0))
}

// four rays per pixel, averaged; the stylized shading modes reuse the same
// samples when they are switched on
pub fn supersample_trace(context: &RenderContext, eye: &Vector3, samples: &[Vector3; 4]) -> Option<Color> {
    let mut total_color = Color::black();
    let mut hit_ids = Vec::new();

    for sample in samples.iter() {
        let direction = (*sample - *eye).normalized();
        let ray = Ray::with_interval(*eye, direction, PRIMARY_NEAR, None);

        if let Some(hit) = resolve(context, &ray, None) {
            total_color = total_color + shade(context, hit.object(), eye, hit.intersection().point(), hit.intersection().normal(), 0);
            hit_ids.push(hit.object().id());
        }
    }

    if hit_ids.is_empty() {
        return None;
    }

    let options = context.options();
    if options.outline_shading || options.sketch_shading {
        let mut color = if options.outline_shading {
            Color::white()
        } else {
            let grey = total_color.min_channel();
            Color::new(grey, grey, grey)
        };

        // object edges turn into a black outline wherever the four samples
        // disagree on what they hit
        if hit_ids.len() < samples.len() || hit_ids.iter().any(|id| *id != hit_ids[0]) {
            color = Color::black();
        }

        return Some(color);
    }

    Some(total_color * 0.25)
}
