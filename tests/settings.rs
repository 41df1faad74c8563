// tests/settings.rs
use std::collections::HashMap;

use leadgen::LeadError;
use leadgen::config::consts::API_KEY_PLACEHOLDER;
use leadgen::config::settings::Settings;

fn settings(pairs: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Settings::from_map(vars).unwrap()
}

#[test]
fn defaults_when_nothing_is_set() {
    let s = settings(&[]);
    assert_eq!(s.city(), "Toledo");
    assert!(s.crm().is_none());
    assert!(matches!(s.validate_for_collect(), Err(LeadError::Config(_))));
}

#[test]
fn placeholder_key_is_rejected() {
    let s = settings(&[("SERPAPI_API_KEY", API_KEY_PLACEHOLDER)]);
    assert!(matches!(s.search_api_key(), Err(LeadError::Config(_))));
}

#[test]
fn real_key_and_city_are_read() {
    let s = settings(&[("SERPAPI_API_KEY", "abc123"), ("CIUDAD_DEFAULT", "Madrid")]);
    assert_eq!(s.search_api_key().unwrap(), "abc123");
    assert!(s.validate_for_collect().is_ok());
    assert_eq!(s.city(), "Madrid");
}

#[test]
fn blank_values_count_as_unset() {
    let s = settings(&[("SERPAPI_API_KEY", "  "), ("CIUDAD_DEFAULT", ""), ("AIRTABLE_API_KEY", "k")]);
    assert!(s.serpapi_api_key.is_none());
    assert_eq!(s.city(), "Toledo");
    assert!(s.crm().is_none()); // base id missing
}

#[test]
fn crm_needs_key_and_base_and_defaults_the_table() {
    let s = settings(&[("AIRTABLE_API_KEY", "k"), ("AIRTABLE_BASE_ID", "app1")]);
    let c = s.crm().unwrap();
    assert_eq!((c.api_key.as_str(), c.base_id.as_str(), c.table.as_str()), ("k", "app1", "Leads"));

    let s = settings(&[("AIRTABLE_API_KEY", "k"), ("AIRTABLE_BASE_ID", "app1"), ("AIRTABLE_TABLE", "Prospects")]);
    assert_eq!(s.crm().unwrap().table, "Prospects");
}
