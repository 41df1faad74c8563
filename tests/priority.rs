// tests/priority.rs
use chrono::NaiveDate;

use leadgen::config::consts::NOT_AVAILABLE;
use leadgen::lead::{classify, sort_leads, Lead, Priority};

fn lead(name: &str, rating: f64, website: &str) -> Lead {
    let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
    Lead::new(
        name.into(), "Calle Mayor 1".into(), "925 000 000".into(),
        rating, website.into(), "Clínicas".into(), at, "Toledo".into(),
    )
}

#[test]
fn below_threshold_is_high_whatever_the_website() {
    for r in [0.0, 1.0, 2.5, 3.9, 3.99] {
        assert_eq!(classify(r, "http://a.com"), Priority::High, "rating {r}");
        assert_eq!(classify(r, NOT_AVAILABLE), Priority::High, "rating {r}");
    }
}

#[test]
fn at_or_above_threshold_depends_on_website() {
    for r in [4.0, 4.1, 4.5, 5.0] {
        assert_eq!(classify(r, "http://a.com"), Priority::Normal, "rating {r}");
        assert_eq!(classify(r, NOT_AVAILABLE), Priority::High, "rating {r}");
    }
}

#[test]
fn lead_new_derives_priority() {
    assert!(lead("A", 4.6, "http://a.com").priority == Priority::Normal);
    assert!(lead("B", 4.6, NOT_AVAILABLE).is_high_priority());
    assert!(lead("C", 0.0, "http://c.com").is_high_priority());
}

#[test]
fn labels_round_trip() {
    for p in Priority::ALL {
        assert_eq!(Priority::from_label(p.label()), Some(p));
    }
    assert_eq!(Priority::from_label("  alta prioridad "), Some(Priority::High));
    assert_eq!(Priority::from_label("urgent"), None);
    assert!(Priority::High.rank() < Priority::Normal.rank());
}

#[test]
fn sort_puts_high_first_then_rating_desc_and_is_stable() {
    let mut leads = vec![
        lead("n1", 4.2, "http://x"),
        lead("h1", 3.0, "http://x"),
        lead("n2", 4.8, "http://x"),
        lead("h2", 4.9, NOT_AVAILABLE),
        lead("h3", 3.0, NOT_AVAILABLE),
        lead("n3", 4.2, "http://y"),
    ];
    sort_leads(&mut leads);

    let names: Vec<&str> = leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["h2", "h1", "h3", "n2", "n1", "n3"]);

    for w in leads.windows(2) {
        assert!(w[0].priority.rank() <= w[1].priority.rank());
        if w[0].priority == w[1].priority {
            assert!(w[0].rating >= w[1].rating);
        }
    }
}

#[test]
fn cell_formats_rating_and_timestamp() {
    let l = lead("A", 4.0, "http://a.com");
    assert_eq!(l.cell(3), "4.0");
    assert_eq!(l.cell(6), "Normal");
    assert_eq!(l.cell(7), "2024-05-01 10:00:00");
    assert_eq!(l.cell(99), "");
}
