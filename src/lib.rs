// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod collect;
pub mod crm;
pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod lead;
pub mod progress;
pub mod search;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{LeadError, Result};
pub use lead::{Lead, Priority};
