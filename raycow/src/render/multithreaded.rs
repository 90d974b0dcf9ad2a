use rayon::prelude::*;

use raycow_core::models::image::Image;

use super::basic::render_pixel;
use super::context::RenderContext;
use super::render::Render;

// same math as the basic render, one rayon task per image row
pub struct MultithreadedRender {
}

impl MultithreadedRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, context: &RenderContext, render_to: &mut Image) {
        let width = render_to.width;
        let height = render_to.height;

        render_to.pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            for x in 0..width {
                row[x] = render_pixel(context, x, y, width, height);
            }
        });
    }
}
