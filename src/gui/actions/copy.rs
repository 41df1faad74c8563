// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.is_empty() {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let (txt, n) = {
        let leads = app.selected();
        (to_export_string(&leads), leads.len())
    };
    let txt = match txt {
        Ok(txt) => txt,
        Err(e) => {
            error!("Copy: {e}");
            app.status(format!("Copy failed: {e}"));
            return;
        }
    };
    info!("Copy: rows={n}");

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {n} leads to clipboard"));
}
