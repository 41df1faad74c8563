// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDateTime;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn for_city(city: &str) -> Self {
        Self {
            collect: CollectOptions::for_city(city),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollectOptions {
    pub city: String,
    /// One search per category, in this order.
    pub categories: Vec<String>,
    pub max_results: u32,
    /// Pause between consecutive searches (not after the last one).
    pub pause: Duration,
}

impl CollectOptions {
    pub fn for_city(city: &str) -> Self {
        Self {
            city: s!(city),
            categories: DEFAULT_CATEGORIES.iter().map(|c| s!(*c)).collect(),
            max_results: DEFAULT_MAX_RESULTS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self::for_city(DEFAULT_CITY)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Append `_<YYYYmmdd_HHMMSS>` to file stems so runs don't overwrite each other.
    pub stamp: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            stamp: true,
        }
    }
}

impl ExportOptions {
    pub fn all_leads_path(&self, at: NaiveDateTime) -> PathBuf {
        self.stamped(ALL_LEADS_STEM, at)
    }

    pub fn high_priority_path(&self, at: NaiveDateTime) -> PathBuf {
        self.stamped(HIGH_PRIORITY_STEM, at)
    }

    /// Dashboard export of the filtered view: date-only stamp, always.
    pub fn filtered_path(&self, at: NaiveDateTime) -> PathBuf {
        let name = join!(FILTERED_STEM, "_", &at.format("%Y%m%d").to_string(), ".csv");
        Self::join_dir_and_filename(&self.out_dir, name)
    }

    fn stamped(&self, stem: &str, at: NaiveDateTime) -> PathBuf {
        let name = if self.stamp {
            join!(stem, "_", &at.format(FILE_STAMP_FMT).to_string(), ".csv")
        } else {
            join!(stem, ".csv")
        };
        Self::join_dir_and_filename(&self.out_dir, name)
    }

    pub fn join_dir_and_filename(dir: &Path, file_name: impl AsRef<Path>) -> PathBuf {
        if dir.as_os_str().is_empty() {
            file_name.as_ref().to_path_buf()
        } else {
            dir.join(file_name)
        }
    }
}
