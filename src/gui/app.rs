// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{mpsc::{Receiver, TryRecvError}, Arc, Mutex},
    time::Duration,
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::{settings::Settings, state::AppState},
    data::{business_types, FilteredView, LeadFilter},
    lead::Lead,
    store::{self, DataSet, DataSource},
};

use super::actions::{self, CollectOutcome};
use super::components;

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    settings: Settings,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Lead Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, settings)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for UI options and filters (UI thread only)
    pub state: AppState,
    pub settings: Settings,

    // canonical leads for the current source, plus the filtered projection
    pub data: DataSet,
    pub view: FilteredView,
    /// Business types in the loaded data, first-seen order (filter panel rows).
    pub types: Vec<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub collect_rx: Option<Receiver<crate::Result<CollectOutcome>>>,
}

impl App {
    pub fn new(state: AppState, settings: Settings) -> Self {
        let mut app = Self {
            state,
            settings,
            data: DataSet::default(),
            view: FilteredView::default(),
            types: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            collect_rx: None,
        };
        app.reload(None);
        app
    }

    /// Resolve a source (explicit CSV wins), load it, reset filters to "everything".
    pub fn reload(&mut self, explicit: Option<&Path>) {
        let dir = self.state.options.export.out_dir.clone();
        let loaded = DataSource::resolve(&self.settings, &dir, explicit)
            .and_then(|src| store::load_dataset(&src));

        match loaded {
            Ok(ds) => {
                info!("Load: {} leads from {} (skipped {})", ds.leads.len(), ds.source, ds.skipped);
                let msg = if ds.skipped > 0 {
                    format!("Loaded {} leads from {} ({} rows skipped)", ds.leads.len(), ds.source, ds.skipped)
                } else {
                    format!("Loaded {} leads from {}", ds.leads.len(), ds.source)
                };
                self.set_data(ds);
                self.status(msg);
            }
            Err(e) => {
                error!("Load: {e}");
                self.set_data(DataSet::default());
                self.status(e.to_string());
            }
        }
    }

    fn set_data(&mut self, ds: DataSet) {
        self.types = business_types(&ds.leads);
        self.state.gui.filter = LeadFilter::all_of(&ds.leads);
        self.data = ds;
        self.rebuild_view();
    }

    /// Recompute the filtered row indices after data or filter changes.
    pub fn rebuild_view(&mut self) {
        self.view = FilteredView::from_leads(&self.data.leads, &self.state.gui.filter);
    }

    /// Borrow the leads that pass the current filter.
    pub fn selected(&self) -> Vec<&Lead> {
        self.view.leads(&self.data.leads)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Pick up a finished background collection, if any.
    fn poll_collect(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.collect_rx else { return };
        match rx.try_recv() {
            Ok(result) => {
                self.collect_rx = None;
                self.running = false;
                actions::collect_finished(self, result);
            }
            Err(TryRecvError::Empty) => ctx.request_repaint_after(Duration::from_millis(200)),
            Err(TryRecvError::Disconnected) => {
                self.collect_rx = None;
                self.running = false;
                error!("Collect: worker exited without a result");
                self.status("Collection aborted");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_collect(ctx);

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            components::action_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::metrics_bar::draw(ui, self);

            ui.separator();

            components::charts::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
