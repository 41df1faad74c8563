// src/config/state.rs
use super::consts::DEFAULT_VISIBLE_COLUMNS;
use super::options::AppOptions;
use crate::data::LeadFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Sidebar filters; the table, metrics and charts all read this.
    pub filter: LeadFilter,

    /// Columns shown in the table, as indices into `consts::COLUMNS`, in display order.
    pub visible_columns: Vec<usize>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filter: LeadFilter::default(),
            visible_columns: DEFAULT_VISIBLE_COLUMNS.to_vec(),
            window_w: 1280,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
