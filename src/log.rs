// src/log.rs
//
// tracing setup for both frontends.
// CLI: stderr, filter from RUST_LOG (default "warn"); human output stays on stdout.
// GUI: append to .store/debug.log, no ANSI.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_console() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Falls back to the console subscriber if the log file can't be opened.
pub fn init_file() {
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let file = fs::create_dir_all(STORE_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter_or("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(_) => init_console(),
    }
}
