//! The HTTP seam between the gateway and the network.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// One authenticated GET against the Jira REST API.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub url: String,
    pub query: Vec<(&'a str, String)>,
    pub auth_header: &'a str,
}

pub trait Transport {
    /// Perform the request and return the decoded JSON body. Non-success
    /// statuses must surface as [`Error::Status`].
    fn get_json(&self, request: &Request<'_>) -> Result<Value>;
}

/// Blocking `reqwest` transport.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, request: &Request<'_>) -> Result<Value> {
        debug!(url = %request.url, query = ?request.query, "GET");

        let resp = self
            .client
            .get(&request.url)
            .query(&request.query)
            .header("Authorization", request.auth_header)
            .header("Accept", "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            debug!(url = %request.url, status = status.as_u16(), "request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
