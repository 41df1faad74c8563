// src/specs/local_results.rs
//
// SerpApi google_maps response → Leads.
// Shape: { "local_results": [ { "title", "address", "phone" | "phone_number",
//                                "rating", "website", ... }, ... ] }

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::consts::NOT_AVAILABLE;
use crate::core::sanitize::json_text;
use crate::lead::Lead;
use crate::{LeadError, Result};

pub struct Extraction {
    pub leads: Vec<Lead>,
    /// Records that could not be read at all (not an object).
    pub skipped: usize,
}

pub fn extract_response(
    doc: &Value,
    category: &str,
    city: &str,
    at: NaiveDateTime,
) -> Result<Extraction> {
    let records = doc
        .get("local_results")
        .and_then(Value::as_array)
        .ok_or(LeadError::MissingResults)?;

    let mut leads = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for (index, record) in records.iter().enumerate() {
        match extract_record_at(index, record, category, city, at) {
            Ok(lead) => leads.push(lead),
            Err(e) => {
                warn!("{category}: skipping record: {e}");
                skipped += 1;
            }
        }
    }

    Ok(Extraction { leads, skipped })
}

pub fn extract_record(
    record: &Value,
    category: &str,
    city: &str,
    at: NaiveDateTime,
) -> Result<Lead> {
    extract_record_at(0, record, category, city, at)
}

fn extract_record_at(
    index: usize,
    record: &Value,
    category: &str,
    city: &str,
    at: NaiveDateTime,
) -> Result<Lead> {
    let obj = record
        .as_object()
        .ok_or(LeadError::MalformedRecord { index })?;

    let name = text_or_sentinel(obj, &["title"]);
    let address = text_or_sentinel(obj, &["address"]);
    let phone = text_or_sentinel(obj, &["phone", "phone_number"]);
    let rating = parse_rating(obj.get("rating"));
    let website = text_or_sentinel(obj, &["website"]);

    Ok(Lead::new(name, address, phone, rating, website, s!(category), at, s!(city)))
}

/// First usable text among `keys`, else the sentinel.
fn text_or_sentinel(obj: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(json_text))
        .unwrap_or_else(|| s!(NOT_AVAILABLE))
}

/// Number or numeric string. Anything else (absent, null, garbage, NaN/inf) → 0.0.
pub fn parse_rating(v: Option<&Value>) -> f64 {
    let parsed = match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|r| r.is_finite()).unwrap_or(0.0)
}
