#![warn(clippy::all, rust_2018_idioms)]

use paint_brush::{AppResult, PaintApp, PaintConfig};

fn main() -> AppResult<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PaintConfig::default();
    log::info!("Starting {}", config.title);

    let title = config.title.clone();
    let native_options = config.native_options();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )?;
    Ok(())
}
