// src/gui/actions/reload.rs
use tracing::info;

use crate::gui::app::App;

pub fn reload(app: &mut App) {
    info!("Reload: requested");
    app.reload(None);
}
