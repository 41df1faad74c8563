// src/config/consts.rs

// Search API
pub const SEARCH_ENDPOINT: &str = "https://serpapi.com/search";
pub const SEARCH_ENGINE: &str = "google_maps";
pub const SEARCH_TYPE: &str = "search";
pub const SEARCH_LANGUAGE: &str = "es"; // hl
pub const SEARCH_REGION: &str = "es";   // gl
pub const DEFAULT_MAX_RESULTS: u32 = 20;
pub const API_KEY_PLACEHOLDER: &str = "TU_API_KEY_AQUÍ";

// CRM
pub const CRM_ENDPOINT: &str = "https://api.airtable.com/v0";
pub const CRM_DEFAULT_TABLE: &str = "Leads";
pub const CRM_BATCH_SIZE: usize = 10; // Airtable create limit

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 2_000; // between categories
pub const USER_AGENT: &str = concat!("leadgen/", env!("CARGO_PKG_VERSION"));

// Leads
pub const NOT_AVAILABLE: &str = "No disponible";
pub const HIGH_PRIORITY_BELOW: f64 = 4.0;
pub const LABEL_HIGH: &str = "ALTA PRIORIDAD";
pub const LABEL_NORMAL: &str = "Normal";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_CITY: &str = "Toledo";
pub const DEFAULT_CATEGORIES: &[&str] = &["Talleres mecánicos", "Agencias de seguros", "Clínicas"];

/// CSV/table column order. Must match the serde renames on `Lead`.
pub const COLUMNS: &[&str] = &[
    "Nombre", "Dirección", "Teléfono", "Calificación", "Sitio Web",
    "Tipo Negocio", "Prioridad", "Fecha Extracción", "Ciudad",
];

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const ALL_LEADS_STEM: &str = "clientes_potenciales";
pub const HIGH_PRIORITY_STEM: &str = "clientes_alta_prioridad";
pub const FILTERED_STEM: &str = "leads_filtrados";
pub const FILE_STAMP_FMT: &str = "%Y%m%d_%H%M%S";

// Dashboard
pub const VALUE_PER_LEAD: u64 = 2_500; // estimated $ per client
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;
pub const DEFAULT_VISIBLE_COLUMNS: &[usize] = &[0, 5, 6, 3, 4, 2];

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
