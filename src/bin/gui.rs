// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use tracing::warn;

use leadgen::{
    config::{options::AppOptions, settings::Settings, state::AppState},
    gui, log,
};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/leadgen.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init_file();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Settings: {e}; continuing with defaults");
        Settings::default()
    });
    let state = AppState::new(AppOptions::for_city(settings.city()));

    // eframe 0.32: icon set via viewport builder
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state, settings) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
