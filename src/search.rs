// src/search.rs
//
// Hosted local-search API. `LocalSearch` is the seam the collector talks to;
// `SerpApi` is the real implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::consts::*;
use crate::core::net;
use crate::{LeadError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub category: &'a str,
    pub city: &'a str,
    pub limit: u32,
}

impl SearchQuery<'_> {
    /// "<category> <city>"
    pub fn q(&self) -> String {
        join!(self.category, " ", self.city)
    }
}

pub trait LocalSearch {
    /// One request per query. Returns the decoded response body.
    fn search(&self, query: &SearchQuery) -> Result<Value>;
}

pub struct SerpApi {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SerpApi {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_endpoint(api_key, SEARCH_ENDPOINT)
    }

    pub fn with_endpoint(api_key: &str, endpoint: &str) -> Result<Self> {
        Ok(Self {
            client: net::client(Duration::from_secs(HTTP_TIMEOUT_SECS))?,
            endpoint: s!(endpoint),
            api_key: s!(api_key),
        })
    }

    /// Query parameters, in request order.
    pub fn params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        vec![
            ("engine", s!(SEARCH_ENGINE)),
            ("q", query.q()),
            ("type", s!(SEARCH_TYPE)),
            ("api_key", self.api_key.clone()),
            ("hl", s!(SEARCH_LANGUAGE)),
            ("gl", s!(SEARCH_REGION)),
            ("num", query.limit.to_string()),
        ]
    }
}

impl LocalSearch for SerpApi {
    fn search(&self, query: &SearchQuery) -> Result<Value> {
        debug!("GET {} q={:?} num={}", self.endpoint, query.q(), query.limit);
        let req = self.client.get(&self.endpoint).query(&self.params(query));
        let doc = net::send_json(req)?;

        // SerpApi reports quota/key problems in-band with a 200.
        if let Some(msg) = doc.get("error").and_then(Value::as_str) {
            return Err(LeadError::Api(s!(msg)));
        }
        Ok(doc)
    }
}
