// tests/search_params.rs
//
// Request shapes for the two HTTP services, checked offline.

use chrono::NaiveDate;
use serde_json::json;

use leadgen::crm::batch_body;
use leadgen::lead::Lead;
use leadgen::search::{SearchQuery, SerpApi};

#[test]
fn serpapi_query_parameters() {
    let api = SerpApi::new("secret").unwrap();
    let q = SearchQuery { category: "Clínicas", city: "Toledo", limit: 20 };
    assert_eq!(q.q(), "Clínicas Toledo");

    let params = api.params(&q);
    let expect = [
        ("engine", "google_maps"),
        ("q", "Clínicas Toledo"),
        ("type", "search"),
        ("api_key", "secret"),
        ("hl", "es"),
        ("gl", "es"),
        ("num", "20"),
    ];
    assert_eq!(params.len(), expect.len());
    for ((k, v), (ek, ev)) in params.iter().zip(expect) {
        assert_eq!((*k, v.as_str()), (ek, ev));
    }
}

#[test]
fn crm_batch_uses_localized_fields_and_typecast() {
    let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
    let lead = Lead::new(
        "A".into(), "B".into(), "C".into(), 3.5, "No disponible".into(),
        "Clínicas".into(), at, "Toledo".into(),
    );
    let body = batch_body(&[&lead]).unwrap();
    assert_eq!(body["typecast"], json!(true));
    let fields = &body["records"][0]["fields"];
    assert_eq!(fields["Nombre"], json!("A"));
    assert_eq!(fields["Calificación"], json!(3.5));
    assert_eq!(fields["Prioridad"], json!("ALTA PRIORIDAD"));
    assert_eq!(fields["Fecha Extracción"], json!("2024-05-01 08:00:00"));
    assert_eq!(fields["Ciudad"], json!("Toledo"));
}
