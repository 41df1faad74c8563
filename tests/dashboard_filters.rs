// tests/dashboard_filters.rs
use chrono::NaiveDate;

use leadgen::config::consts::NOT_AVAILABLE;
use leadgen::data::{
    breakdown_by_type, business_types, format_thousands, leads_per_day, FilteredView, LeadFilter, Metrics,
};
use leadgen::lead::{Lead, Priority};

fn lead(name: &str, ty: &str, rating: f64, website: &str, day: u32) -> Lead {
    let at = NaiveDate::from_ymd_opt(2024, 5, day).unwrap().and_hms_opt(12, 0, 0).unwrap();
    Lead::new(
        name.into(), "x".into(), "y".into(),
        rating, website.into(), ty.into(), at, "Toledo".into(),
    )
}

fn sample() -> Vec<Lead> {
    vec![
        lead("a", "Clínicas", 4.5, "http://a", 1),      // Normal
        lead("b", "Clínicas", 3.0, "http://b", 1),      // High, low rating
        lead("c", "Talleres", 4.0, NOT_AVAILABLE, 2),   // High, no website
        lead("d", "Talleres", 5.0, "http://d", 3),      // Normal
        lead("e", "Seguros", 2.0, NOT_AVAILABLE, 3),    // High, both
    ]
}

#[test]
fn default_filter_selects_nothing_and_all_of_selects_everything() {
    let leads = sample();
    assert!(FilteredView::from_leads(&leads, &LeadFilter::default()).is_empty());

    let all = LeadFilter::all_of(&leads);
    assert_eq!(FilteredView::from_leads(&leads, &all).row_ix, [0, 1, 2, 3, 4]);
    assert_eq!(all.business_types.len(), 3);
    assert_eq!(all.priorities.len(), 2);
}

#[test]
fn rating_bounds_are_inclusive() {
    let leads = sample();
    let mut f = LeadFilter::all_of(&leads);
    f.rating_min = 4.0;
    f.rating_max = 4.5;
    assert_eq!(FilteredView::from_leads(&leads, &f).row_ix, [0, 2]);
}

#[test]
fn type_and_priority_toggles() {
    let leads = sample();
    let mut f = LeadFilter::all_of(&leads);
    f.toggle_type("Clínicas", false);
    f.toggle_priority(Priority::Normal, false);
    let view = FilteredView::from_leads(&leads, &f);
    let names: Vec<&str> = view.leads(&leads).iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["c", "e"]);

    f.toggle_type("Clínicas", true);
    assert_eq!(FilteredView::from_leads(&leads, &f).row_ix, [1, 2, 4]);
}

#[test]
fn clamp_keeps_min_not_above_max() {
    let mut f = LeadFilter::default();
    f.rating_min = 4.5;
    f.rating_max = 3.0;
    f.clamp_range(true);
    assert_eq!((f.rating_min, f.rating_max), (4.5, 4.5));

    f.rating_min = 4.0;
    f.rating_max = 2.0;
    f.clamp_range(false);
    assert_eq!((f.rating_min, f.rating_max), (2.0, 2.0));
}

#[test]
fn metrics_match_hand_counts() {
    let leads = sample();
    let refs: Vec<&Lead> = leads.iter().collect();
    let m = Metrics::compute(&refs);
    assert_eq!(m.total, 5);
    assert_eq!(m.high_priority, 3);
    assert_eq!(m.without_website, 2);
    assert_eq!(m.low_rating, 2);
    assert_eq!(m.conversion_pct, 60.0);
    assert_eq!(m.conversion_label(), "60.0%");
    assert_eq!(m.potential_value, 12_500);
    assert_eq!(m.value_label(), "$12,500");

    let third = Metrics::compute(&refs[..3]);
    assert_eq!(third.conversion_pct, 66.7);

    let none = Metrics::compute(&[]);
    assert_eq!(none.conversion_pct, 0.0);
    assert_eq!(none.potential_value, 0);
}

#[test]
fn chart_aggregates() {
    let leads = sample();
    let refs: Vec<&Lead> = leads.iter().collect();

    let by_type = breakdown_by_type(&refs);
    let rows: Vec<(&str, usize, usize)> =
        by_type.iter().map(|t| (t.business_type.as_str(), t.high, t.normal)).collect();
    assert_eq!(rows, [("Clínicas", 1, 1), ("Talleres", 1, 1), ("Seguros", 1, 0)]);

    let per_day: Vec<(u32, usize)> = leads_per_day(&refs)
        .into_iter()
        .map(|(d, n)| (chrono::Datelike::day(&d), n))
        .collect();
    assert_eq!(per_day, [(1, 2), (2, 1), (3, 2)]);

    assert_eq!(business_types(&leads), ["Clínicas", "Talleres", "Seguros"]);
}

#[test]
fn thousands_separator() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}
