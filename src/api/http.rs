//! reqwest-backed [`Backend`].

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use serde_json::Value;

use super::{Backend, Endpoint, Reply, TransportError};
use crate::config::ClientConfig;

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client against `config.base_url` with its timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client fails to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::new(&config.base_url, config.timeouts.request(), config.timeouts.connect())
    }

    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(base_url: &str, request_timeout: Duration, connect_timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

fn classify(url: &str, error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout { url: url.to_owned() }
    } else {
        TransportError::Connect { url: url.to_owned(), message: error.to_string() }
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn post(&self, endpoint: Endpoint, body: Value) -> Result<Reply, TransportError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "sending request");

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| {
            let error = classify(&url, &e);
            tracing::warn!(%url, error = %error, "request failed");
            error
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout { url: url.clone() }
            } else {
                TransportError::Body(e.to_string())
            }
        })?;
        tracing::debug!(%url, status, bytes = text.len(), "received reply");
        Ok(Reply { status, body: text })
    }
}
