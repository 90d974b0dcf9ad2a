use raycow_core::models::image::Image;

use super::context::RenderContext;

pub trait Render {

    fn render(&self, context: &RenderContext, render_to: &mut Image);
}
