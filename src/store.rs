// src/store.rs
//
// Where the dashboard gets its leads: an explicit CSV, the CRM, or the
// newest collected CSV. Loading is tolerant; rows are repaired where
// possible and skipped (and counted) where not.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::consts::{HTTP_TIMEOUT_SECS, NOT_AVAILABLE};
use crate::config::settings::{CrmCredentials, Settings};
use crate::core::sanitize::{json_text, normalize_ws};
use crate::crm::{Airtable, Fields};
use crate::csv::reader_without_bom;
use crate::file::latest_lead_file;
use crate::lead::{timestamp, Lead, Priority};
use crate::specs::local_results::parse_rating;
use crate::{LeadError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Csv(PathBuf),
    Crm(CrmCredentials),
}

impl DataSource {
    /// Explicit path, then CRM (when configured), then the newest CSV in `dir`.
    pub fn resolve(settings: &Settings, dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Ok(DataSource::Csv(p.to_path_buf()));
        }
        if let Some(creds) = settings.crm() {
            return Ok(DataSource::Crm(creds));
        }
        latest_lead_file(dir)
            .map(DataSource::Csv)
            .ok_or_else(|| {
                LeadError::NoData(format!(
                    "no clientes_potenciales*.csv in {}; run the collector first",
                    dir.display()
                ))
            })
    }

    pub fn label(&self) -> String {
        match self {
            DataSource::Csv(p) => p.display().to_string(),
            DataSource::Crm(c) => join!("Airtable: ", &c.table),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub leads: Vec<Lead>,
    /// Rows dropped for lack of a usable date.
    pub skipped: usize,
    pub source: String,
    /// Read from the CRM table itself; pushing it back would duplicate every record.
    pub from_crm: bool,
}

impl DataSet {
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

/// CRM to push `data` into. Refused when the CRM is unset or is where `data` came from.
pub fn sync_target(settings: &Settings, data: &DataSet) -> Result<CrmCredentials> {
    let creds = settings
        .crm()
        .ok_or_else(|| LeadError::Config(s!("CRM not configured (set AIRTABLE_API_KEY and AIRTABLE_BASE_ID)")))?;
    if data.from_crm {
        return Err(LeadError::Crm(format!("leads were loaded from {}; load a CSV to sync", creds.table)));
    }
    Ok(creds)
}

/// One stored row, every column optional. Text as written; repaired in `into_lead`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeadRow {
    #[serde(rename = "Nombre")]
    pub name: Option<String>,
    #[serde(rename = "Dirección")]
    pub address: Option<String>,
    #[serde(rename = "Teléfono")]
    pub phone: Option<String>,
    #[serde(rename = "Calificación")]
    pub rating: Option<String>,
    #[serde(rename = "Sitio Web")]
    pub website: Option<String>,
    #[serde(rename = "Tipo Negocio")]
    pub business_type: Option<String>,
    #[serde(rename = "Prioridad")]
    pub priority: Option<String>,
    #[serde(rename = "Fecha Extracción", alias = "Fecha_Ingreso")]
    pub extracted_at: Option<String>,
    #[serde(rename = "Ciudad")]
    pub city: Option<String>,
}

impl LeadRow {
    /// CRM fields may be numbers or booleans; flatten everything to text first.
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let flat: serde_json::Map<String, Value> = fields
            .iter()
            .filter_map(|(k, v)| json_text(v).map(|t| (k.clone(), Value::String(t))))
            .collect();
        Ok(serde_json::from_value(Value::Object(flat))?)
    }

    /// `None` when the date is missing or unparseable.
    ///
    /// A recognised stored priority label is kept as is, so a loaded lead may
    /// disagree with `classify`; the rating/website rule only binds collected leads.
    pub fn into_lead(self) -> Option<Lead> {
        let extracted_at = self.extracted_at.as_deref().and_then(timestamp::parse)?;

        let rating = parse_rating(self.rating.map(Value::String).as_ref());
        let stored = self.priority.as_deref().and_then(Priority::from_label);

        let mut lead = Lead::new(
            text_or_sentinel(self.name),
            text_or_sentinel(self.address),
            text_or_sentinel(self.phone),
            rating,
            text_or_sentinel(self.website),
            text_or_sentinel(self.business_type),
            extracted_at,
            text_or_sentinel(self.city),
        );
        if let Some(p) = stored {
            lead.priority = p;
        }
        Some(lead)
    }
}

fn text_or_sentinel(v: Option<String>) -> String {
    v.map(|s| normalize_ws(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!(NOT_AVAILABLE))
}

pub fn load_dataset(source: &DataSource) -> Result<DataSet> {
    let (rows, source_label) = match source {
        DataSource::Csv(path) => (read_csv_rows(path)?, source.label()),
        DataSource::Crm(creds) => {
            let crm = Airtable::new(creds.clone(), Duration::from_secs(HTTP_TIMEOUT_SECS))?;
            let rows = crm
                .list_records()?
                .iter()
                .map(LeadRow::from_fields)
                .collect::<Result<Vec<_>>>()?;
            (rows, source.label())
        }
    };
    let mut ds = build_dataset(rows, source_label);
    ds.from_crm = matches!(source, DataSource::Crm(_));
    Ok(ds)
}

pub fn load_csv(path: &Path) -> Result<DataSet> {
    load_dataset(&DataSource::Csv(path.to_path_buf()))
}

fn read_csv_rows(path: &Path) -> Result<Vec<LeadRow>> {
    let mut rdr = reader_without_bom(File::open(path)?)?;
    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<LeadRow>().enumerate() {
        match rec {
            Ok(row) => rows.push(row),
            Err(e) => {
                warn!("{}: row {} unreadable: {e}", path.display(), i + 1);
                rows.push(LeadRow::default()); // no date → counted as skipped
            }
        }
    }
    Ok(rows)
}

fn build_dataset(rows: Vec<LeadRow>, source: String) -> DataSet {
    let mut leads = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        match row.into_lead() {
            Some(lead) => leads.push(lead),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("{source}: skipped {skipped} rows without a valid date");
    }
    info!("{source}: loaded {} leads", leads.len());
    DataSet { leads, skipped, source, from_crm: false }
}
