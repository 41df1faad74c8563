// src/gui/actions/sync.rs
use std::time::Duration;

use tracing::{error, info};

use crate::{
    config::consts::HTTP_TIMEOUT_SECS,
    crm::Airtable,
    gui::app::App,
    store::sync_target,
};

/// Push the filtered view to the CRM. Blocks the UI for the duration of the upload.
/// Refused when the dashboard is showing the CRM table itself.
pub fn sync_crm(app: &mut App) {
    let creds = match sync_target(&app.settings, &app.data) {
        Ok(creds) => creds,
        Err(e) => {
            info!("Sync: {e}");
            app.status(e.to_string());
            return;
        }
    };
    if app.view.is_empty() {
        app.status("Nothing to sync");
        return;
    }

    let status_msg = {
        let leads = app.selected();
        info!("Sync: pushing {} leads to {}", leads.len(), creds.table);
        match Airtable::new(creds, Duration::from_secs(HTTP_TIMEOUT_SECS))
            .and_then(|crm| crm.push_leads(&leads))
        {
            Ok(n) => format!("Synced {n} leads to the CRM"),
            Err(e) => {
                error!("Sync: {e}");
                format!("CRM sync failed: {e}")
            }
        }
    };

    app.status(status_msg);
}
