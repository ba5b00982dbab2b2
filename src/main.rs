//! Binary entry point for the plantview fixed-scene 3D viewer.

use std::path::Path;

use plantview::{options::Options, PlantViewError, Viewer};

fn main() -> Result<(), PlantViewError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    // Optional options preset as the first argument
    let args: Vec<String> = std::env::args().collect();
    let options = match args.get(1) {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };

    Viewer::builder().with_options(options).build().run()
}
