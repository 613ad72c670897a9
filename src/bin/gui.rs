// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use log::LevelFilter;
use shoe_deals::{
    config::{options::DashboardOptions, state::GuiState},
    data::Dataset,
    gui::{self, app::WINDOW_TITLE},
};

fn main() {
    shoe_deals::log::init(LevelFilter::Info);

    let dashboard = DashboardOptions::default();
    let data = match Dataset::load(&dashboard.clean_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Startup: {}", e);
            eprintln!("Run `collect` and `normalize` first.");
            std::process::exit(1);
        }
    };

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, data, dashboard) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
