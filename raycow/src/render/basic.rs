use indicatif::ProgressBar;

use raycow_core::models::image::Image;
use raycow_core::models::pixel::Pixel;

use crate::geometry::vector3::Vector3;
use crate::scene::camera::Camera;

use super::context::RenderContext;
use super::render::Render;
use super::tracer::{supersample_trace, trace};

pub struct BasicRender {
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for BasicRender {

    fn render(&self, context: &RenderContext, render_to: &mut Image) {
        let width = render_to.width;
        let height = render_to.height;

        let progress = ProgressBar::new(height as u64);
        for y in 0..height {
            for x in 0..width {
                render_to.set_pixel(x, y, render_pixel(context, x, y, width, height));
            }
            progress.inc(1);
        }
        progress.finish();
    }
}

pub fn render_pixel(context: &RenderContext, x: usize, y: usize, width: usize, height: usize) -> Pixel {
    let camera = context.scene().camera();
    let eye = *camera.position();

    let color = if context.options().supersampling {
        let samples = [
            sample_point(camera, x as f64 + 0.25, y as f64 + 0.25, width, height),
            sample_point(camera, x as f64 + 0.75, y as f64 + 0.25, width, height),
            sample_point(camera, x as f64 + 0.25, y as f64 + 0.75, width, height),
            sample_point(camera, x as f64 + 0.75, y as f64 + 0.75, width, height),
        ];
        supersample_trace(context, &eye, &samples)
    } else {
        trace(context, &eye, &sample_point(camera, x as f64 + 0.5, y as f64 + 0.5, width, height))
    };

    let color = color.unwrap_or(*context.background());
    Pixel::from_unit(color.red, color.green, color.blue)
}

// maps a (possibly fractional) pixel position onto the image plane sitting at
// z = -1 in front of the eye
pub fn sample_point(camera: &Camera, x: f64, y: f64, width: usize, height: usize) -> Vector3 {
    let aspect_ratio = width as f64 / height as f64;
    let field_of_view = (camera.field().to_radians() / 2.0).tan();

    let normalized_x = 2.0 * x / width as f64 - 1.0;
    let normalized_y = 1.0 - 2.0 * y / height as f64;

    *camera.position() + Vector3::new(
        normalized_x * aspect_ratio * field_of_view,
        normalized_y * field_of_view,
        -1.0
    )
}
