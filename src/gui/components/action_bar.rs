// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use tracing::error;

use crate::{
    gui::{actions, app::App},
    store,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Reload")).clicked() {
            actions::reload(app);
        }

        if ui.button("Export").on_hover_text("Write the filtered leads to CSV").clicked() {
            actions::export(app);
        }

        if ui.button("Copy").on_hover_text("Copy the filtered leads as CSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        let sync_blocked = store::sync_target(&app.settings, &app.data).err();
        let sync = ui
            .add_enabled(!app.running && sync_blocked.is_none(), egui::Button::new("Sync CRM"))
            .on_disabled_hover_text(sync_blocked.map(|e| e.to_string()).unwrap_or_default());
        if sync.clicked() {
            actions::sync_crm(app);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_output_folder(app);
        }

        // Collect
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button_collect = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("COLLECT").color(black).strong()).fill(red),
        );
        if button_collect.clicked() {
            actions::collect(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
    ui.add_space(4.0);
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &App) {
    let dir = &app.state.options.export.out_dir;
    let folder = find_nearest_existing_parent(dir);

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {e}");
            error!("{msg}");
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        error!("Failed to open folder: {e}");
        app.status(format!("Failed to open folder: {e}"));
    }
}

/// Walk up until an existing directory is found; "." as a last resort.
fn find_nearest_existing_parent(path: &std::path::Path) -> std::path::PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return std::path::PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &std::path::Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let opener = "explorer";
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(target_os = "linux")]
    let opener = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(opener)
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn {opener}: {e}"))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
