// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search API error: {0}")]
    Api(String),

    #[error("Response has no local_results")]
    MissingResults,

    #[error("Record {index} is not an object")]
    MalformedRecord { index: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No lead data found: {0}")]
    NoData(String),

    #[error("CRM error: {0}")]
    Crm(String),
}

impl From<config::ConfigError> for LeadError {
    fn from(e: config::ConfigError) -> Self {
        LeadError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;
