// src/config/settings.rs
//
// Secrets and defaults from the environment (.env is honored if present).

use std::collections::HashMap;

use config::{Config, Environment};
use serde::Deserialize;

use super::consts::{API_KEY_PLACEHOLDER, CRM_DEFAULT_TABLE, DEFAULT_CITY};
use crate::{LeadError, Result};

/// Environment keys are matched case-insensitively (`SERPAPI_API_KEY` → `serpapi_api_key`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default, alias = "SERPAPI_API_KEY")]
    pub serpapi_api_key: Option<String>,
    #[serde(default, alias = "AIRTABLE_API_KEY")]
    pub airtable_api_key: Option<String>,
    #[serde(default, alias = "AIRTABLE_BASE_ID")]
    pub airtable_base_id: Option<String>,
    #[serde(default, alias = "AIRTABLE_TABLE")]
    pub airtable_table: Option<String>,
    #[serde(default, alias = "CIUDAD_DEFAULT")]
    pub ciudad_default: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrmCredentials {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
}

impl Settings {
    /// Load `.env` (if any), then read the process environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    /// Build from an explicit key/value map instead of the process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::from_environment(Environment::default().source(Some(vars)))
    }

    fn from_environment(env: Environment) -> Result<Self> {
        let cfg = Config::builder().add_source(env).build()?;
        let mut settings: Settings = cfg.try_deserialize()?;
        settings.drop_blanks();
        Ok(settings)
    }

    fn drop_blanks(&mut self) {
        for v in [
            &mut self.serpapi_api_key,
            &mut self.airtable_api_key,
            &mut self.airtable_base_id,
            &mut self.airtable_table,
            &mut self.ciudad_default,
        ] {
            if v.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *v = None;
            }
        }
    }

    pub fn city(&self) -> &str {
        self.ciudad_default.as_deref().unwrap_or(DEFAULT_CITY)
    }

    /// The search key, or a config error if it is unset or still the placeholder.
    pub fn search_api_key(&self) -> Result<&str> {
        match self.serpapi_api_key.as_deref() {
            None => Err(LeadError::Config(s!("SERPAPI_API_KEY is not set"))),
            Some(API_KEY_PLACEHOLDER) => Err(LeadError::Config(s!(
                "SERPAPI_API_KEY still holds the placeholder value"
            ))),
            Some(key) => Ok(key),
        }
    }

    pub fn validate_for_collect(&self) -> Result<()> {
        self.search_api_key().map(|_| ())
    }

    /// CRM is only considered configured when both key and base id are present.
    pub fn crm(&self) -> Option<CrmCredentials> {
        match (&self.airtable_api_key, &self.airtable_base_id) {
            (Some(api_key), Some(base_id)) => Some(CrmCredentials {
                api_key: api_key.clone(),
                base_id: base_id.clone(),
                table: self
                    .airtable_table
                    .clone()
                    .unwrap_or_else(|| s!(CRM_DEFAULT_TABLE)),
            }),
            _ => None,
        }
    }
}
