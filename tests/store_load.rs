// tests/store_load.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use leadgen::LeadError;
use leadgen::config::consts::NOT_AVAILABLE;
use leadgen::config::settings::Settings;
use leadgen::csv::write_leads_to_path;
use leadgen::lead::{Lead, Priority};
use leadgen::store::{load_csv, sync_target, DataSet, DataSource};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("leadgen_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Vec<Lead> {
    let at = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap().and_hms_opt(18, 5, 0).unwrap();
    vec![
        Lead::new("Taller \"El Rápido\"".into(), "Av. Europa 5, Toledo".into(), NOT_AVAILABLE.into(),
                  3.7, NOT_AVAILABLE.into(), "Talleres mecánicos".into(), at, "Toledo".into()),
        Lead::new("Seguros Sol".into(), "C/ Toledo 1".into(), "+34 925 000 111".into(),
                  4.6, "https://sol.es".into(), "Agencias de seguros".into(), at, "Toledo".into()),
    ]
}

#[test]
fn written_csv_loads_back_identically() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("clientes_potenciales.csv");
    let leads = sample();
    write_leads_to_path(&path, &leads).unwrap();

    let ds = load_csv(&path).unwrap();
    assert_eq!(ds.skipped, 0);
    assert_eq!(ds.leads, leads);
    assert_eq!(ds.source, path.display().to_string());
}

#[test]
fn tolerant_loading_repairs_and_skips() {
    let dir = tmp_dir("tolerant");
    let path = dir.join("legacy.csv");
    let text = "\u{feff}Nombre,Calificación,Tipo Negocio,Prioridad,Fecha_Ingreso,Sitio Web\n\
                A,3.5,Clínicas,,2024-05-01,http://a\n\
                B,bad,Clínicas,Normal,2024-05-02 10:00:00,\n\
                C,4.9,Clínicas,,,http://c\n\
                D,4.9,Clínicas,???,not a date,http://d\n\
                E,4.2,Talleres,,2024-05-03,http://e\n";
    fs::write(&path, text).unwrap();

    let ds = load_csv(&path).unwrap();
    assert_eq!(ds.skipped, 2);
    assert_eq!(ds.leads.len(), 3);

    let a = &ds.leads[0];
    assert_eq!(a.priority, Priority::High); // derived: rating < 4
    assert_eq!(a.address, NOT_AVAILABLE);
    assert_eq!(a.city, NOT_AVAILABLE);
    assert_eq!(a.extracted_at, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());

    let b = &ds.leads[1];
    assert_eq!(b.rating, 0.0);
    assert_eq!(b.website, NOT_AVAILABLE);
    assert_eq!(b.priority, Priority::Normal); // stored label wins

    let e = &ds.leads[2];
    assert_eq!(e.priority, Priority::Normal);
    assert_eq!(e.business_type, "Talleres");
}

#[test]
fn resolve_prefers_explicit_then_crm_then_latest_file() {
    let dir = tmp_dir("resolve");
    let empty = Settings::default();

    match DataSource::resolve(&empty, &dir, None) {
        Err(LeadError::NoData(_)) => {}
        other => panic!("expected NoData, got {other:?}"),
    }

    let file = dir.join("clientes_potenciales_20240101_000000.csv");
    fs::write(&file, "Nombre\n").unwrap();
    assert_eq!(DataSource::resolve(&empty, &dir, None).unwrap(), DataSource::Csv(file.clone()));

    let crm = Settings {
        airtable_api_key: Some("key".into()),
        airtable_base_id: Some("app123".into()),
        ..Settings::default()
    };
    match DataSource::resolve(&crm, &dir, None).unwrap() {
        DataSource::Crm(c) => assert_eq!(c.table, "Leads"),
        other => panic!("expected CRM, got {other:?}"),
    }

    let explicit = Path::new("elsewhere.csv");
    assert_eq!(
        DataSource::resolve(&crm, &dir, Some(explicit)).unwrap(),
        DataSource::Csv(explicit.to_path_buf())
    );
}

#[test]
fn sync_is_refused_for_leads_read_from_the_crm() {
    let vars = [("AIRTABLE_API_KEY", "key"), ("AIRTABLE_BASE_ID", "app123")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let settings = Settings::from_map(vars).unwrap();

    let from_crm = DataSet { leads: sample(), from_crm: true, ..Default::default() };
    assert!(matches!(sync_target(&settings, &from_crm), Err(LeadError::Crm(_))));

    let from_csv = DataSet { leads: sample(), ..Default::default() };
    let creds = sync_target(&settings, &from_csv).unwrap();
    assert_eq!(creds.base_id, "app123");

    let unset = Settings::from_map(Default::default()).unwrap();
    assert!(matches!(sync_target(&unset, &from_csv), Err(LeadError::Config(_))));
}

#[test]
fn csv_loads_are_not_marked_as_crm() {
    let dir = tmp_dir("origin");
    let path = dir.join("clientes_potenciales.csv");
    write_leads_to_path(&path, &sample()).unwrap();
    assert!(!load_csv(&path).unwrap().from_crm);
}
