// tests/collect_pipeline.rs
//
// Drives collect_leads with an in-memory LocalSearch; no network, no pauses.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::{json, Value};

use leadgen::collect::collect_leads;
use leadgen::config::options::{CollectOptions, ExportOptions};
use leadgen::file::write_run_files;
use leadgen::lead::Priority;
use leadgen::progress::Progress;
use leadgen::search::{LocalSearch, SearchQuery};
use leadgen::{LeadError, Result};

enum Reply {
    Doc(Value),
    Fail,
}

struct StubSearch {
    replies: HashMap<String, Reply>,
    seen: RefCell<Vec<String>>,
}

impl StubSearch {
    fn new(replies: Vec<(&str, Reply)>) -> Self {
        Self {
            replies: replies.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl LocalSearch for StubSearch {
    fn search(&self, query: &SearchQuery) -> Result<Value> {
        self.seen.borrow_mut().push(query.q());
        match self.replies.get(query.category) {
            Some(Reply::Doc(v)) => Ok(v.clone()),
            Some(Reply::Fail) => Err(LeadError::Status { status: 500, url: "/search".into() }),
            None => Ok(json!({ "local_results": [] })),
        }
    }
}

#[derive(Default)]
struct Recorder {
    begun: Option<usize>,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.begun = Some(total); }
    fn item_done(&mut self, category: &str, found: usize) { self.done.push((category.into(), found)); }
    fn item_failed(&mut self, category: &str, _reason: &str) { self.failed.push(category.into()); }
    fn finish(&mut self) { self.finished = true; }
}

fn opts(categories: &[&str]) -> CollectOptions {
    CollectOptions {
        city: "Toledo".into(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        max_results: 20,
        pause: Duration::ZERO,
    }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("leadgen_collect_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn queries_each_category_in_order_and_sorts_the_result() {
    let stub = StubSearch::new(vec![
        ("Clínicas", Reply::Doc(json!({ "local_results": [
            { "title": "Clinic Good", "rating": 4.8, "website": "http://good" },
            { "title": "Clinic Bad", "rating": 2.1, "website": "http://bad" },
        ]}))),
        ("Talleres", Reply::Doc(json!({ "local_results": [
            { "title": "Taller Sin Web", "rating": "4.4" },
            { "title": "Taller Ok", "rating": "4.1", "website": "http://ok" },
        ]}))),
    ]);
    let mut rec = Recorder::default();
    let report = collect_leads(&stub, &opts(&["Clínicas", "Talleres"]), Some(&mut rec));

    assert_eq!(*stub.seen.borrow(), ["Clínicas Toledo", "Talleres Toledo"]);
    assert_eq!(rec.begun, Some(2));
    assert!(rec.finished);
    assert_eq!(rec.done, [("Clínicas".to_string(), 2), ("Talleres".to_string(), 2)]);

    let names: Vec<&str> = report.leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Taller Sin Web", "Clinic Bad", "Clinic Good", "Taller Ok"]);
    assert_eq!(report.high_priority_count(), 2);
    assert!(report.failed_categories.is_empty());
    assert_eq!(report.leads[0].business_type, "Talleres");
}

#[test]
fn a_failing_category_does_not_stop_the_others() {
    let stub = StubSearch::new(vec![
        ("A", Reply::Fail),
        ("B", Reply::Doc(json!({ "local_results": [{ "title": "Only", "rating": 4.9, "website": "http://o" }] }))),
        ("C", Reply::Doc(json!({ "error": "ignored by the stub, shape only" }))),
    ]);
    let mut rec = Recorder::default();
    let report = collect_leads(&stub, &opts(&["A", "B", "C"]), Some(&mut rec));

    assert_eq!(stub.seen.borrow().len(), 3);
    assert_eq!(report.leads.len(), 1);
    assert_eq!(report.leads[0].priority, Priority::Normal);
    assert_eq!(report.failed_categories.len(), 1);
    assert_eq!(report.failed_categories[0].0, "A");
    assert_eq!(rec.failed, ["A"]);
    // missing local_results counts as done with zero leads
    assert!(rec.done.contains(&("C".to_string(), 0)));
}

#[test]
fn malformed_records_are_counted() {
    let stub = StubSearch::new(vec![
        ("A", Reply::Doc(json!({ "local_results": [ "x", { "title": "Fine" }, null ] }))),
    ]);
    let report = collect_leads(&stub, &opts(&["A"]), None);
    assert_eq!(report.leads.len(), 1);
    assert_eq!(report.skipped_records, 2);
}

#[test]
fn empty_run_reports_zero_and_writes_nothing() {
    let stub = StubSearch::new(vec![]);
    let report = collect_leads(&stub, &opts(&["A", "B", "C"]), None);
    assert!(report.is_empty());

    let dir = tmp_dir("empty");
    let export = ExportOptions { out_dir: dir.clone(), stamp: true };
    let at = leadgen::collect::extraction_time();
    let written = write_run_files(&export, &report.leads, at).unwrap();
    assert!(written.is_none());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}
