#![warn(clippy::all, rust_2018_idioms)]

use eframe::egui;
use paintxd::app::APP_NAME;
use paintxd::{ChromeLayout, PaintApp, PaintConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PaintConfig::load().inspect_err(|err| log::error!("{err}"))?;
    let layout = ChromeLayout::new(&config.chrome, config.window_width, config.window_height)
        .inspect_err(|err| log::error!("{err}"))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                let app = PaintApp::new(cc, config, layout).inspect_err(|err| log::error!("{err}"))?;
                Ok(Box::new(app))
            },
        ),
    )?;

    log::info!("{APP_NAME} closed");
    Ok(())
}
