extern crate custom_error;

use raycow_core::models::io::ImageWriter;
use raycow_core::plugins::plugins::ImageFormatSupportPlugin;

use writer::PPMWriter;

pub mod writer;

pub struct PPMFormatSupportPlugin {
}

impl PPMFormatSupportPlugin {

    pub fn new() -> Self {
        PPMFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for PPMFormatSupportPlugin {

    fn format_name(&self) -> String {
        "PPM".to_string()
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(PPMWriter {})
    }
}
