// src/collect.rs
//
// One run: search every category in order, extract, accumulate, sort.
// Failures are absorbed per category; the run itself never fails.

use std::thread;

use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{error, info, warn};

use crate::config::options::CollectOptions;
use crate::core::sanitize::truncate_chars;
use crate::lead::{sort_leads, Lead};
use crate::progress::{NullProgress, Progress};
use crate::search::{LocalSearch, SearchQuery};
use crate::specs::local_results::extract_response;
use crate::LeadError;

/// How much of an unexpected response body goes into the log.
const BODY_PREVIEW: usize = 500;

#[derive(Debug, Default)]
pub struct CollectReport {
    /// Sorted: HIGH first, then rating descending.
    pub leads: Vec<Lead>,
    /// Categories that produced nothing because of an error, with the reason.
    pub failed_categories: Vec<(String, String)>,
    pub skipped_records: usize,
}

impl CollectReport {
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn high_priority_count(&self) -> usize {
        self.leads.iter().filter(|l| l.is_high_priority()).count()
    }
}

/// Local wall-clock time at whole seconds, as written to the CSV.
pub fn extraction_time() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn collect_leads(
    search: &dyn LocalSearch,
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> CollectReport {
    match progress {
        Some(p) => run(search, opts, p),
        None => run(search, opts, &mut NullProgress),
    }
}

fn run(search: &dyn LocalSearch, opts: &CollectOptions, progress: &mut dyn Progress) -> CollectReport {
    let mut report = CollectReport::default();
    progress.begin(opts.categories.len());

    for (i, category) in opts.categories.iter().enumerate() {
        if i > 0 && !opts.pause.is_zero() {
            thread::sleep(opts.pause);
        }

        progress.log(&format!("Searching: {category} in {}", opts.city));
        let query = SearchQuery {
            category,
            city: &opts.city,
            limit: opts.max_results,
        };

        let doc = match search.search(&query) {
            Ok(doc) => doc,
            Err(e) => {
                error!("{category}: search failed: {e}");
                progress.item_failed(category, &e.to_string());
                report.failed_categories.push((category.clone(), e.to_string()));
                continue;
            }
        };

        match extract_response(&doc, category, &opts.city, extraction_time()) {
            Ok(extraction) => {
                info!("{category}: {} leads", extraction.leads.len());
                progress.item_done(category, extraction.leads.len());
                report.skipped_records += extraction.skipped;
                report.leads.extend(extraction.leads);
            }
            Err(LeadError::MissingResults) => {
                let body = serde_json::to_string_pretty(&doc).unwrap_or_default();
                warn!(
                    "{category}: no local_results in response: {}",
                    truncate_chars(&body, BODY_PREVIEW)
                );
                progress.item_done(category, 0);
            }
            Err(e) => {
                error!("{category}: {e}");
                progress.item_failed(category, &e.to_string());
                report.failed_categories.push((category.clone(), e.to_string()));
            }
        }
    }

    sort_leads(&mut report.leads);
    progress.finish();
    report
}
