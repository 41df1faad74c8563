// src/data.rs
//
// Dashboard logic over a loaded lead set.
//
// - LeadFilter:    sidebar selection (types, priorities, rating range).
// - FilteredView:  row indices into the canonical leads that pass the filter.
//                  Holds no copies; the table, charts and exports resolve
//                  indices against the same slice.
// - Metrics etc.:  aggregates the metrics row and charts draw from.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::config::consts::{RATING_MAX, RATING_MIN, VALUE_PER_LEAD};
use crate::lead::{Lead, Priority};

#[derive(Clone, Debug, PartialEq)]
pub struct LeadFilter {
    pub business_types: BTreeSet<String>,
    pub priorities: BTreeSet<Priority>,
    pub rating_min: f64,
    pub rating_max: f64,
}

impl Default for LeadFilter {
    /// Empty selections: nothing passes until `all_of` fills them in.
    fn default() -> Self {
        Self {
            business_types: BTreeSet::new(),
            priorities: BTreeSet::new(),
            rating_min: RATING_MIN,
            rating_max: RATING_MAX,
        }
    }
}

impl LeadFilter {
    /// Every type and priority present in `leads`, full rating range.
    pub fn all_of(leads: &[Lead]) -> Self {
        Self {
            business_types: leads.iter().map(|l| l.business_type.clone()).collect(),
            priorities: leads.iter().map(|l| l.priority).collect(),
            rating_min: RATING_MIN,
            rating_max: RATING_MAX,
        }
    }

    /// Inclusive on both rating bounds.
    pub fn matches(&self, lead: &Lead) -> bool {
        self.business_types.contains(&lead.business_type)
            && self.priorities.contains(&lead.priority)
            && lead.rating >= self.rating_min
            && lead.rating <= self.rating_max
    }

    pub fn toggle_type(&mut self, ty: &str, on: bool) {
        if on {
            self.business_types.insert(s!(ty));
        } else {
            self.business_types.remove(ty);
        }
    }

    pub fn toggle_priority(&mut self, p: Priority, on: bool) {
        if on {
            self.priorities.insert(p);
        } else {
            self.priorities.remove(&p);
        }
    }

    /// Keep min ≤ max after a slider moved; the other bound follows.
    pub fn clamp_range(&mut self, moved_min: bool) {
        self.rating_min = self.rating_min.clamp(RATING_MIN, RATING_MAX);
        self.rating_max = self.rating_max.clamp(RATING_MIN, RATING_MAX);
        if self.rating_min > self.rating_max {
            if moved_min {
                self.rating_max = self.rating_min;
            } else {
                self.rating_min = self.rating_max;
            }
        }
    }
}

/// Zero-copy filtered view: positions of kept leads, in data order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    pub row_ix: Vec<usize>,
}

impl FilteredView {
    pub fn from_leads(leads: &[Lead], filter: &LeadFilter) -> Self {
        let row_ix = leads
            .iter()
            .enumerate()
            .filter(|(_, l)| filter.matches(l))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow the kept leads (no cloning).
    pub fn leads<'a>(&self, all: &'a [Lead]) -> Vec<&'a Lead> {
        self.row_ix.iter().filter_map(|&i| all.get(i)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    pub total: usize,
    pub high_priority: usize,
    pub without_website: usize,
    pub low_rating: usize,
    /// HIGH / total × 100, one decimal; 0 when empty.
    pub conversion_pct: f64,
    pub potential_value: u64,
}

impl Metrics {
    pub fn compute(leads: &[&Lead]) -> Self {
        let total = leads.len();
        let high_priority = leads.iter().filter(|l| l.is_high_priority()).count();
        let without_website = leads.iter().filter(|l| !l.has_website()).count();
        let low_rating = leads.iter().filter(|l| l.is_low_rated()).count();

        let conversion_pct = if total == 0 {
            0.0
        } else {
            (high_priority as f64 / total as f64 * 1000.0).round() / 10.0
        };

        Self {
            total,
            high_priority,
            without_website,
            low_rating,
            conversion_pct,
            potential_value: total as u64 * VALUE_PER_LEAD,
        }
    }

    pub fn conversion_label(&self) -> String {
        format!("{:.1}%", self.conversion_pct)
    }

    pub fn value_label(&self) -> String {
        join!("$", &format_thousands(self.potential_value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeBreakdown {
    pub business_type: String,
    pub high: usize,
    pub normal: usize,
}

impl TypeBreakdown {
    pub fn total(&self) -> usize { self.high + self.normal }
}

/// Per-type HIGH/NORMAL counts, largest total first; ties by name.
pub fn breakdown_by_type(leads: &[&Lead]) -> Vec<TypeBreakdown> {
    let mut by_type: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for l in leads {
        let e = by_type.entry(l.business_type.as_str()).or_default();
        match l.priority {
            Priority::High => e.0 += 1,
            Priority::Normal => e.1 += 1,
        }
    }
    let mut rows: Vec<TypeBreakdown> = by_type
        .into_iter()
        .map(|(t, (high, normal))| TypeBreakdown { business_type: s!(t), high, normal })
        .collect();
    // BTreeMap order is by name; stable sort keeps it for equal totals.
    rows.sort_by(|a, b| b.total().cmp(&a.total()));
    rows
}

/// Leads per extraction date, ascending.
pub fn leads_per_day(leads: &[&Lead]) -> Vec<(NaiveDate, usize)> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for l in leads {
        *by_day.entry(l.extracted_at.date()).or_default() += 1;
    }
    by_day.into_iter().collect()
}

/// Distinct business types in first-seen order.
pub fn business_types(leads: &[Lead]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    leads
        .iter()
        .filter(|l| seen.insert(l.business_type.as_str()))
        .map(|l| l.business_type.clone())
        .collect()
}

/// 1234567 → "1,234,567"
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
