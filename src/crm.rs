// src/crm.rs
//
// Airtable REST client: read the leads table, append leads to it.
//   GET  /v0/<base>/<table>[?offset=..]  → { records: [{ id, fields }], offset? }
//   POST /v0/<base>/<table>              ← { records: [{ fields }], typecast: true }

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::{json, Map, Value};
use tracing::{debug, error, info};

use crate::config::consts::{CRM_BATCH_SIZE, CRM_ENDPOINT};
use crate::config::settings::CrmCredentials;
use crate::core::net;
use crate::lead::Lead;
use crate::{LeadError, Result};

/// Field map of one Airtable record, keyed by column header.
pub type Fields = Map<String, Value>;

pub struct Airtable {
    client: Client,
    creds: CrmCredentials,
    url: Url,
}

impl Airtable {
    pub fn new(creds: CrmCredentials, timeout: Duration) -> Result<Self> {
        Self::with_endpoint(creds, timeout, CRM_ENDPOINT)
    }

    pub fn with_endpoint(creds: CrmCredentials, timeout: Duration, endpoint: &str) -> Result<Self> {
        let url = table_url(endpoint, &creds.base_id, &creds.table)?;
        Ok(Self { client: net::client(timeout)?, creds, url })
    }

    /// Every record's fields, following `offset` until the last page.
    pub fn list_records(&self) -> Result<Vec<Fields>> {
        let mut out = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut req = self.client.get(self.url.clone()).bearer_auth(&self.creds.api_key);
            if let Some(o) = &offset {
                req = req.query(&[("offset", o.as_str())]);
            }
            let page = net::send_json(req).inspect_err(|e| error!("CRM list failed: {e}"))?;

            let records = page
                .get("records")
                .and_then(Value::as_array)
                .ok_or_else(|| LeadError::Crm(s!("response has no records array")))?;
            for rec in records {
                if let Some(fields) = rec.get("fields").and_then(Value::as_object) {
                    out.push(fields.clone());
                }
            }
            debug!("CRM page: {} records (total {})", records.len(), out.len());

            match page.get("offset").and_then(Value::as_str) {
                Some(next) => offset = Some(s!(next)),
                None => break,
            }
        }

        info!("CRM: loaded {} records from {}", out.len(), self.creds.table);
        Ok(out)
    }

    /// Create one record per lead, `CRM_BATCH_SIZE` per request. Returns how many were created.
    pub fn push_leads(&self, leads: &[&Lead]) -> Result<usize> {
        let mut created = 0usize;

        for batch in leads.chunks(CRM_BATCH_SIZE) {
            let body = batch_body(batch)?;
            let req = self
                .client
                .post(self.url.clone())
                .bearer_auth(&self.creds.api_key)
                .json(&body);
            let resp = net::send_json(req).inspect_err(|e| error!("CRM push failed: {e}"))?;
            created += resp
                .get("records")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
        }

        info!("CRM: created {created} records in {}", self.creds.table);
        Ok(created)
    }
}

/// Request body for one create call.
pub fn batch_body(batch: &[&Lead]) -> Result<Value> {
    let records = batch
        .iter()
        .map(|lead| -> Result<Value> { Ok(json!({ "fields": serde_json::to_value(lead)? })) })
        .collect::<Result<Vec<Value>>>()?;
    Ok(json!({ "records": records, "typecast": true }))
}

fn table_url(endpoint: &str, base_id: &str, table: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| LeadError::Crm(format!("bad endpoint {endpoint}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| LeadError::Crm(format!("endpoint cannot be a base: {endpoint}")))?
        .pop_if_empty()
        .push(base_id)
        .push(table);
    Ok(url)
}
