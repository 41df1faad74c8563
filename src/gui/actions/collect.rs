// src/gui/actions/collect.rs
use std::{sync::mpsc, thread};

use tracing::{error, info};

use crate::{
    collect::{collect_leads, extraction_time},
    file::{write_run_files, ExportReport},
    gui::{app::App, progress::GuiProgress},
    search::SerpApi,
};

/// What a background run hands back to the UI thread.
#[derive(Debug)]
pub struct CollectOutcome {
    pub found: usize,
    pub failed: usize,
    pub written: Option<ExportReport>,
}

/// Start a collection on a worker thread; `App` polls for the result.
pub fn collect(app: &mut App) {
    if app.running {
        return;
    }
    let key = match app.settings.search_api_key() {
        Ok(k) => s!(k),
        Err(e) => {
            app.status(e.to_string());
            return;
        }
    };

    let opts = app.state.options.collect.clone();
    let export = app.state.options.export.clone();
    let status = app.status.clone();
    let (tx, rx) = mpsc::channel();

    info!("Collect: Begin city={} categories={:?}", opts.city, opts.categories);

    thread::spawn(move || {
        let run = || -> crate::Result<CollectOutcome> {
            let api = SerpApi::new(&key)?;
            let mut prog = GuiProgress::new(status);
            let report = collect_leads(&api, &opts, Some(&mut prog));
            let written = write_run_files(&export, &report.leads, extraction_time())?;
            Ok(CollectOutcome {
                found: report.leads.len(),
                failed: report.failed_categories.len(),
                written,
            })
        };
        let _ = tx.send(run());
    });

    app.collect_rx = Some(rx);
    app.running = true;
    app.status(format!("Collecting leads in {}...", app.state.options.collect.city));
}

pub fn collect_finished(app: &mut App, result: crate::Result<CollectOutcome>) {
    match result {
        Ok(CollectOutcome { written: Some(report), found, failed }) => {
            info!("Collect: OK leads={found} failed={failed} → {}", report.all.display());
            app.reload(Some(&report.all));
            let failed_note = if failed > 0 { format!(", {failed} categories failed") } else { s!() };
            app.status(format!(
                "Collected {found} leads ({} HIGH){failed_note}. Saved {}",
                report.high_count,
                report.all.display()
            ));
        }
        Ok(CollectOutcome { written: None, failed, .. }) => {
            info!("Collect: no leads (failed categories={failed})");
            app.status("No leads found; nothing was written");
        }
        Err(e) => {
            error!("Collect: Error: {e}");
            app.status(format!("Collect error: {e}"));
        }
    }
}
