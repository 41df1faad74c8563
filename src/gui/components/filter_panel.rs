// src/gui/components/filter_panel.rs
//
// Left sidebar: business types, priorities, rating range, visible columns.
// Edits `app.state.gui` in place and rebuilds the view when anything changed.

use eframe::egui;
use tracing::debug;

use crate::{
    config::consts::{COLUMNS, RATING_MAX, RATING_MIN},
    gui::app::App,
    lead::Priority,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.label(egui::RichText::new(&app.data.source).small().weak());
    ui.separator();

    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            ui.strong("Business type");
            ui.horizontal(|ui| {
                if ui.small_button("All").clicked() {
                    app.state.gui.filter.business_types = app.types.iter().cloned().collect();
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    app.state.gui.filter.business_types.clear();
                    changed = true;
                }
            });
            for ty in &app.types {
                let mut on = app.state.gui.filter.business_types.contains(ty);
                if ui.checkbox(&mut on, ty.as_str()).changed() {
                    app.state.gui.filter.toggle_type(ty, on);
                    changed = true;
                }
            }

            ui.add_space(8.0);
            ui.strong("Priority");
            for p in Priority::ALL {
                let mut on = app.state.gui.filter.priorities.contains(&p);
                if ui.checkbox(&mut on, p.label()).changed() {
                    app.state.gui.filter.toggle_priority(p, on);
                    changed = true;
                }
            }

            ui.add_space(8.0);
            ui.strong("Rating");
            let f = &mut app.state.gui.filter;
            let min_moved = ui
                .add(egui::Slider::new(&mut f.rating_min, RATING_MIN..=RATING_MAX).step_by(0.1).text("min"))
                .changed();
            let max_moved = ui
                .add(egui::Slider::new(&mut f.rating_max, RATING_MIN..=RATING_MAX).step_by(0.1).text("max"))
                .changed();
            if min_moved || max_moved {
                f.clamp_range(min_moved);
                changed = true;
            }

            ui.add_space(8.0);
            ui.separator();
            ui.strong("Columns");
            let cols = &mut app.state.gui.visible_columns;
            for (ci, name) in COLUMNS.iter().enumerate() {
                let mut on = cols.contains(&ci);
                if ui.checkbox(&mut on, *name).changed() {
                    if on {
                        cols.push(ci);
                    } else {
                        cols.retain(|&c| c != ci);
                    }
                }
            }
        });

    if changed {
        app.rebuild_view();
        debug!("UI: Filter changed → {} of {} leads", app.view.len(), app.data.leads.len());
    }
}
