//! Backend — the remote registration, login and prediction service.
//!
//! DESIGN
//! ======
//! The [`Backend`] trait is the seam between views and the network. It
//! carries one JSON `POST` and hands back the raw status and body text,
//! leaving interpretation (message vs. detail vs. raw text) to the views.
//! [`http::HttpBackend`] is the reqwest implementation; tests substitute
//! a recording mock.

pub mod http;
pub mod wire;

use std::fmt;

use serde_json::Value;

/// Named endpoints of the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    Predict,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Predict => "/predict",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body parsed as JSON, `None` when it is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// The request could not be sent or its response could not be read.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not reach {url}: {message}")]
    Connect { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Send `body` as JSON to `endpoint` and return the reply, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response was received.
    async fn post(&self, endpoint: Endpoint, body: Value) -> Result<Reply, TransportError>;
}
