// src/gui/actions/export.rs
use chrono::Local;
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

/// Filtered view → `<out_dir>/leads_filtrados_<YYYYmmdd>.csv`.
pub fn export(app: &mut App) {
    if app.view.is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let path = app.state.options.export.filtered_path(Local::now().naive_local());

    // keep the dataset borrow inside this block; mutate app after
    let status_msg = {
        let leads = app.selected();
        match file::write_selection(&path, &leads) {
            Ok(p) => {
                info!("Export: OK rows={} → {}", leads.len(), p.display());
                format!("Exported {} leads to {}", leads.len(), p.display())
            }
            Err(e) => {
                error!("Export: Error: {e}");
                format!("Export error: {e}")
            }
        }
    };

    app.status(status_msg);
}
