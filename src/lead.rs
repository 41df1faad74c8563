// src/lead.rs
//! The Lead record and its priority rule.
//!
//! A `Lead` is built once by the extractor (or by the dashboard loader) and
//! never mutated afterwards. Its serde field names are the localized CSV
//! headers, so the same struct drives the CSV writer, the clipboard export
//! and the CRM payload.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::consts::{HIGH_PRIORITY_BELOW, LABEL_HIGH, LABEL_NORMAL, NOT_AVAILABLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    #[serde(rename = "ALTA PRIORIDAD")]
    High,
    #[serde(rename = "Normal")]
    Normal,
}

impl Priority {
    pub const ALL: [Priority; 2] = [Priority::High, Priority::Normal];

    /// Sort rank: HIGH first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Normal => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => LABEL_HIGH,
            Priority::Normal => LABEL_NORMAL,
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(LABEL_HIGH) {
            Some(Priority::High)
        } else if s.eq_ignore_ascii_case(LABEL_NORMAL) {
            Some(Priority::Normal)
        } else {
            None
        }
    }
}

/// HIGH iff the rating is below the threshold or there is no website.
pub fn classify(rating: f64, website: &str) -> Priority {
    if rating < HIGH_PRIORITY_BELOW || website == NOT_AVAILABLE {
        Priority::High
    } else {
        Priority::Normal
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Lead {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Dirección")]
    pub address: String,
    #[serde(rename = "Teléfono")]
    pub phone: String,
    #[serde(rename = "Calificación")]
    pub rating: f64,
    #[serde(rename = "Sitio Web")]
    pub website: String,
    #[serde(rename = "Tipo Negocio")]
    pub business_type: String,
    #[serde(rename = "Prioridad")]
    pub priority: Priority,
    #[serde(rename = "Fecha Extracción", serialize_with = "timestamp::serialize")]
    pub extracted_at: NaiveDateTime,
    #[serde(rename = "Ciudad")]
    pub city: String,
}

impl Lead {
    /// Builds a lead and derives its priority. The only constructor the pipeline uses.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        address: String,
        phone: String,
        rating: f64,
        website: String,
        business_type: String,
        extracted_at: NaiveDateTime,
        city: String,
    ) -> Self {
        let priority = classify(rating, &website);
        Self { name, address, phone, rating, website, business_type, priority, extracted_at, city }
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }

    pub fn has_website(&self) -> bool {
        self.website != NOT_AVAILABLE
    }

    pub fn is_low_rated(&self) -> bool {
        self.rating < HIGH_PRIORITY_BELOW
    }

    /// Display text for column `ix` (see `consts::COLUMNS`).
    pub fn cell(&self, ix: usize) -> Cow<'_, str> {
        match ix {
            0 => Cow::Borrowed(&self.name),
            1 => Cow::Borrowed(&self.address),
            2 => Cow::Borrowed(&self.phone),
            3 => Cow::Owned(format!("{:.1}", self.rating)),
            4 => Cow::Borrowed(&self.website),
            5 => Cow::Borrowed(&self.business_type),
            6 => Cow::Borrowed(self.priority.label()),
            7 => Cow::Owned(self.extracted_at.format(crate::config::consts::TIMESTAMP_FMT).to_string()),
            8 => Cow::Borrowed(&self.city),
            _ => Cow::Borrowed(""),
        }
    }
}

/// Priority first (HIGH before NORMAL), then rating descending.
/// `sort_by` is stable, so ties keep collection order.
pub fn sort_leads(leads: &mut [Lead]) {
    leads.sort_by(compare_leads);
}

pub fn compare_leads(a: &Lead, b: &Lead) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| b.rating.total_cmp(&a.rating))
}

pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    use crate::config::consts::TIMESTAMP_FMT;

    pub fn serialize<S: Serializer>(at: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&at.format(TIMESTAMP_FMT))
    }

    /// Full timestamp, or a bare date at midnight.
    pub fn parse(text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        NaiveDateTime::parse_from_str(text, TIMESTAMP_FMT)
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.fZ"))
            .ok()
            .or_else(|| {
                chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}
