#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod io;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;

use std::collections::HashMap;
use std::env;
use std::fs;
use std::process::exit;
use std::time::Instant;

use env_logger::Env;

use raycow_core::models::image::Image;
use raycow_core::models::io::ImageWriterOptions;
use raycow_core::plugins::plugins::ImageFormatSupportPlugin;
use raycow_core::utils::print_intro;
use ppm_support::PPMFormatSupportPlugin;

use render::basic::BasicRender;
use render::context::RenderContext;
use render::multithreaded::MultithreadedRender;
use render::options::RenderOptions;
use render::render::Render;
use scenes::demo::DemoSceneProvider;
use scenes::file::FileSceneProvider;
use scenes::provider::SceneProvider;

const DEFAULT_LOGGING_LEVEL: &str = "info";
const DEFAULT_IMAGE_SIZE: usize = 1000;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    let options = arguments_to_options(&args);

    let scene_provider: Box<dyn SceneProvider> = if options.contains_key("scene") {
        Box::new(FileSceneProvider::new())
    } else {
        info!("no scene file is set, rendering the demo scene");
        Box::new(DemoSceneProvider::new())
    };

    let scene = match scene_provider.scene(&options) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            exit(1);
        }
    };

    let render: Box<dyn Render> = match options.get("render").map(|v| v.as_str()) {
        Some("basic") => Box::new(BasicRender::new()),
        Some("multithreaded") | None => Box::new(MultithreadedRender::new()),
        Some(other) => {
            error!("unknown render implementation: {}", other);
            exit(1);
        }
    };

    let width = dimension(&options, "width");
    let height = dimension(&options, "height");

    let context = RenderContext::new(scene, RenderOptions::from_options(&options));
    let mut output = Image::new(width, height);

    info!("rendering {}x{} image", width, height);
    let started_at = Instant::now();
    render.render(&context, &mut output);
    info!("rendered in {:.1?}", started_at.elapsed());

    save_image(&output, &options);
    info!("done");
}

fn save_image(image: &Image, options: &HashMap<String, String>) {
    let output_format_support = PPMFormatSupportPlugin::new();
    let writer_options = ImageWriterOptions::default()
        .with_option_bool("binary", options.contains_key("binary"));

    let image_bytes = match output_format_support.writer().write(image, &writer_options) {
        Ok(v) => v,
        Err(err) => {
            error!("failed to write image: {}", err);
            exit(1);
        }
    };

    let output_path = options.get("output").map(|v| v.clone()).unwrap_or("result.ppm".to_string());
    if let Err(err) = fs::write(&output_path, &image_bytes) {
        error!("failed to save result image: {}", err);
        exit(1);
    }

    info!("saved {} render to {}", output_format_support.format_name(), output_path);
}

fn dimension(options: &HashMap<String, String>, name: &str) -> usize {
    options.get(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_IMAGE_SIZE)
}

// turns `--key=value` into (key, value) and a bare `--flag` into (flag, "true")
fn arguments_to_options(args: &[String]) -> HashMap<String, String> {
    let mut options = HashMap::new();

    for arg in args.iter().skip(1) {
        if !arg.starts_with("--") {
            warn!("ignoring unrecognized argument: {}", arg);
            continue;
        }

        let arg = &arg[2..];
        match arg.find('=') {
            Some(position) => options.insert(arg[..position].to_string(), arg[position + 1..].to_string()),
            None => options.insert(arg.to_string(), "true".to_string()),
        };
    }

    options
}
