// src/gui/components/metrics_bar.rs
use eframe::egui::{self, RichText};

use crate::{data::Metrics, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let m = Metrics::compute(&app.selected());

    ui.horizontal_wrapped(|ui| {
        tile(ui, "Total leads", m.total.to_string());
        tile(ui, "High priority", m.high_priority.to_string());
        tile(ui, "Without website", m.without_website.to_string());
        tile(ui, "Rating < 4", m.low_rating.to_string());
        tile(ui, "Est. conversion", m.conversion_label());
        tile(ui, "Potential value", m.value_label());
    });
}

fn tile(ui: &mut egui::Ui, title: &str, value: String) {
    ui.group(|ui| {
        ui.set_min_width(120.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small().weak());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}
