// src/specs/mod.rs
//! # Response "specs" module
//!
//! This module hosts the **response-specific extraction specifications** for the
//! search API. Each spec focuses on one response shape and encodes *where the
//! ground truth lives in the JSON* and *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Pure JSON reading** of already-decoded responses (no HTTP).
//! - **Field precedence** (e.g. `phone` before `phone_number`).
//! - **Fallbacks**: the `No disponible` sentinel for missing text, 0.0 for an
//!   unusable rating.
//!
//! ## What does **not** live here
//! - Issuing requests (`search`), pacing and aggregation (`collect`).
//! - Sorting, CSV writing, dashboard filtering.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → collect::collect_leads → search::LocalSearch::search()
//!                                    ↘ specs::local_results::extract_response()
//! ```
//!
//! ## Conventions & invariants
//! - A malformed *record* is skipped and counted, never fatal for the response.
//! - A response without `local_results` is an error for that category only.
//! - Specs are testable **offline** against literal JSON.
pub mod local_results;
