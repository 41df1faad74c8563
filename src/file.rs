// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::consts::ALL_LEADS_STEM;
use crate::config::options::ExportOptions;
use crate::csv::write_leads_to_path;
use crate::lead::Lead;
use crate::Result;

/// What a run wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub all: PathBuf,
    pub all_count: usize,
    /// `None` when there were no HIGH leads.
    pub high_priority: Option<PathBuf>,
    pub high_count: usize,
}

/// Full set plus HIGH-only subset. Nothing is written for zero leads.
pub fn write_run_files(
    export: &ExportOptions,
    leads: &[Lead],
    at: NaiveDateTime,
) -> Result<Option<ExportReport>> {
    if leads.is_empty() {
        return Ok(None);
    }
    ensure_directory(&export.out_dir)?;

    let all = export.all_leads_path(at);
    write_leads_to_path(&all, leads)?;
    info!("wrote {} leads to {}", leads.len(), all.display());

    let high: Vec<&Lead> = leads.iter().filter(|l| l.is_high_priority()).collect();
    let high_priority = if high.is_empty() {
        None
    } else {
        let path = export.high_priority_path(at);
        write_leads_to_path(&path, high.iter().copied())?;
        info!("wrote {} HIGH leads to {}", high.len(), path.display());
        Some(path)
    };

    Ok(Some(ExportReport {
        all,
        all_count: leads.len(),
        high_priority,
        high_count: high.len(),
    }))
}

/// Write an arbitrary selection (dashboard export). Parent dirs are created.
pub fn write_selection(path: &Path, leads: &[&Lead]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    write_leads_to_path(path, leads.iter().copied())?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Newest `clientes_potenciales*.csv` in `dir` by modification time.
pub fn latest_lead_file(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut best: Option<(SystemTime, PathBuf)> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_lead_file(&path) {
            continue;
        }
        let mtime = fs::metadata(&path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let newer = match &best {
            Some((t, p)) => mtime > *t || (mtime == *t && path > *p),
            None => true,
        };
        if newer {
            best = Some((mtime, path));
        }
    }

    best.map(|(_, p)| p)
}

fn is_lead_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    name.starts_with(ALL_LEADS_STEM) && ext.eq_ignore_ascii_case("csv")
}
