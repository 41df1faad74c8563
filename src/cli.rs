// src/cli.rs
//
// `collect`: one collection run from the terminal. Human-readable progress and
// summary go to stdout; diagnostics go through tracing to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::warn;

use crate::collect::{collect_leads, extraction_time, CollectReport};
use crate::config::consts::DEFAULT_MAX_RESULTS;
use crate::config::options::{AppOptions, CollectOptions, ExportOptions};
use crate::config::settings::Settings;
use crate::data::Metrics;
use crate::file::{write_run_files, ExportReport};
use crate::lead::Lead;
use crate::progress::Progress;
use crate::search::SerpApi;

#[derive(Parser, Debug)]
#[command(name = "collect", version, about = "Collect local business leads into CSV")]
pub struct Args {
    /// City to search in (default: CIUDAD_DEFAULT, else Toledo)
    #[arg(long)]
    pub city: Option<String>,

    /// Business category to search; repeat for several (default: the built-in set)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Result cap per category
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,

    /// Output directory
    #[arg(long, short = 'o')]
    pub out_dir: Option<PathBuf>,

    /// Write clientes_potenciales.csv instead of a timestamped name
    #[arg(long)]
    pub no_stamp: bool,

    /// Seconds to wait between categories
    #[arg(long = "pause-secs", value_name = "SECS", value_parser = parse_pause)]
    pub pause: Option<Duration>,

    /// How many HIGH priority leads to list at the end
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

impl Args {
    /// Defaults from settings, overridden by flags.
    pub fn to_options(&self, settings: &Settings) -> AppOptions {
        let city = self.city.as_deref().unwrap_or(settings.city());
        let mut opts = AppOptions::for_city(city);
        self.apply(&mut opts.collect, &mut opts.export);
        opts
    }

    fn apply(&self, collect: &mut CollectOptions, export: &mut ExportOptions) {
        if !self.categories.is_empty() {
            collect.categories = self.categories.clone();
        }
        collect.max_results = self.max_results;
        if let Some(pause) = self.pause {
            collect.pause = pause;
        }
        if let Some(dir) = &self.out_dir {
            export.out_dir = dir.clone();
        }
        export.stamp = !self.no_stamp;
    }
}

/// Non-negative seconds that fit in a `Duration`.
fn parse_pause(raw: &str) -> std::result::Result<Duration, String> {
    let secs: f64 = raw.trim().parse().map_err(|e| format!("not a number: {e}"))?;
    if secs < 0.0 {
        return Err(s!("must not be negative"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("out of range: {e}"))
}

/// Prints one line per category.
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("🔍 {msg}");
    }
    fn item_done(&mut self, category: &str, found: usize) {
        self.done += 1;
        println!("   ✓ {category}: {found} leads ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, category: &str, reason: &str) {
        self.done += 1;
        println!("   ✗ {category}: {reason} ({}/{})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    crate::log::init_console();
    let args = Args::parse();
    let settings = Settings::load().wrap_err("reading settings")?;

    let key = match settings.search_api_key() {
        Ok(key) => key,
        Err(e) => {
            print_key_help(&e.to_string());
            return Err(e).wrap_err("search API key");
        }
    };

    let opts = args.to_options(&settings);
    println!("🚀 Collecting leads in {}", opts.collect.city);
    println!("   Categories: {}", opts.collect.categories.join(", "));
    println!();

    let api = SerpApi::new(key).wrap_err("building HTTP client")?;
    let mut progress = ConsoleProgress { done: 0, total: 0 };
    let report = collect_leads(&api, &opts.collect, Some(&mut progress));

    println!();
    if report.is_empty() {
        println!("⚠️  No leads found. Nothing was written.");
        print_failures(&report);
        return Ok(());
    }

    let written = write_run_files(&opts.export, &report.leads, extraction_time())
        .wrap_err("writing CSV files")?;

    print_summary(&report, written.as_ref(), args.top);
    Ok(())
}

fn print_key_help(reason: &str) {
    eprintln!("❌ {reason}");
    eprintln!();
    eprintln!("To get a SerpApi key:");
    eprintln!("  1. Sign up at https://serpapi.com/ (the free plan includes 100 searches/month)");
    eprintln!("  2. Copy your API key from the dashboard");
    eprintln!("  3. Put it in a .env file next to the binary:");
    eprintln!("       SERPAPI_API_KEY=your_key_here");
}

fn print_failures(report: &CollectReport) {
    let _ = write_failures(&mut io::stdout().lock(), report);
}

fn write_failures(out: &mut impl Write, report: &CollectReport) -> io::Result<()> {
    for (category, reason) in &report.failed_categories {
        writeln!(out, "   ✗ {category}: {reason}")?;
    }
    Ok(())
}

fn print_summary(report: &CollectReport, written: Option<&ExportReport>, top: usize) {
    if let Err(e) = write_summary(&mut io::stdout().lock(), report, written, top) {
        warn!("summary not printed: {e}");
    }
}

/// Run statistics, saved files and the first `top` HIGH leads.
/// Counts come from `Metrics`, the same numbers the dashboard shows.
pub fn write_summary(
    out: &mut impl Write,
    report: &CollectReport,
    written: Option<&ExportReport>,
    top: usize,
) -> io::Result<()> {
    let all: Vec<&Lead> = report.leads.iter().collect();
    let m = Metrics::compute(&all);
    let high = m.high_priority;

    writeln!(out, "📊 Summary")?;
    writeln!(out, "   Total leads:        {}", m.total)?;
    writeln!(out, "   High priority:      {high}")?;
    writeln!(out, "   Normal:             {}", m.total - high)?;
    writeln!(out, "   Without website:    {}", m.without_website)?;
    writeln!(out, "   Rating < 4:         {}", m.low_rating)?;
    if report.skipped_records > 0 {
        writeln!(out, "   Skipped records:    {}", report.skipped_records)?;
    }
    if !report.failed_categories.is_empty() {
        writeln!(out, "   Failed categories:  {}", report.failed_categories.len())?;
        write_failures(out, report)?;
    }

    if let Some(w) = written {
        writeln!(out)?;
        writeln!(out, "💾 Saved {} leads to {}", w.all_count, w.all.display())?;
        match &w.high_priority {
            Some(p) => writeln!(out, "💾 Saved {} HIGH priority leads to {}", w.high_count, p.display())?,
            None => writeln!(out, "   No HIGH priority leads; subset file skipped")?,
        }
    }

    if top > 0 && high > 0 {
        writeln!(out)?;
        writeln!(out, "🎯 Top {} high-priority leads:", top.min(high))?;
        for (i, lead) in report.leads.iter().filter(|l| l.is_high_priority()).take(top).enumerate() {
            writeln!(out, "   {}. {} ({})", i + 1, lead.name, lead.business_type)?;
            writeln!(out, "      📍 {}", lead.address)?;
            writeln!(out, "      📞 {}  ⭐ {:.1}  🌐 {}", lead.phone, lead.rating, lead.website)?;
        }
    }
    Ok(())
}
