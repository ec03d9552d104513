//! Room-creation frontend entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod models;
mod pages;
mod view_model;

use app::App;
use config::AppConfig;

fn main() {
    let config = AppConfig::load();

    // Initialize logger from configuration
    let logger = match logging::Logger::with_component(
        &config.log_path,
        config.log_level,
        "Frontend",
        config.console_log,
    ) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 560.0])
            .with_title("Create Room"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "CreateRoom",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);
            Ok(Box::new(App::new(&config, logger)))
        }),
    ) {
        eprintln!("Failed to start UI: {}", e);
        std::process::exit(1);
    }
}
