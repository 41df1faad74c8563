// src/core/net.rs
//
// Blocking HTTP over reqwest. One client per service; every call returns JSON.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::{LeadError, Result};

pub fn client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Send and decode. Non-2xx becomes `LeadError::Status`; a bad body becomes `LeadError::Json`.
pub fn send_json(req: RequestBuilder) -> Result<Value> {
    let resp = req.send()?;
    let status = resp.status();
    if !status.is_success() {
        // The URL carries the api_key query param; report the path only.
        let url = resp.url().path().to_string();
        return Err(LeadError::Status { status: status.as_u16(), url });
    }
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}
