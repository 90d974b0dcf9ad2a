use raycow_core::models::image::Image;
use raycow_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

pub struct PPMWriter {
}

impl ImageWriter for PPMWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if options.get_bool("binary", false)? {
            Ok(write_binary(image))
        } else {
            Ok(write_plain(image))
        }
    }
}

fn write_plain(image: &Image) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"P3\n");
    bytes.extend_from_slice(format!("{} {}\n", image.width, image.height).as_bytes());
    bytes.extend_from_slice(b"255\n");

    for row in image.pixels.chunks(image.width) {
        let mut line = String::new();
        for pixel in row {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&format!("{} {} {}", pixel.red, pixel.green, pixel.blue));
        }
        line.push('\n');
        bytes.extend_from_slice(line.as_bytes());
    }

    bytes
}

fn write_binary(image: &Image) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"P6\n");
    bytes.extend_from_slice(format!("{} {}\n", image.width, image.height).as_bytes());
    bytes.extend_from_slice(b"255\n");

    for pixel in &image.pixels {
        bytes.push(pixel.red);
        bytes.push(pixel.green);
        bytes.push(pixel.blue);
    }

    bytes
}
