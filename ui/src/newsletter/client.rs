//! HTTP client for the newsletter subscription endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::SiteConfig;

#[derive(Debug, Serialize)]
pub struct SubscribeRequest<'a> {
    pub email: &'a str,
}

/// Body the backend answers with. Only `error` carries meaning for the UI.
#[derive(Debug, Default, Deserialize)]
struct SubscribeReply {
    #[serde(default)]
    error: Option<String>,
}

/// Server verdict for a request that completed and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    /// Non-ok status; the server's `error` text when it sent one.
    Rejected(Option<String>),
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("subscription request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("subscription reply was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SubscribeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubscribeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Reuses a caller-built client (shared connection pool, proxy settings).
    pub fn with_http(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.subscribe_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, no retry, no timeout beyond the platform's own.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, SubscribeError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&SubscribeRequest { email })
            .send()
            .await?;
        let ok = response.status().is_success();
        let body = response.bytes().await?;
        interpret_reply(ok, &body)
    }
}

/// The reply must decode as JSON whatever the status.
pub(crate) fn interpret_reply(ok: bool, body: &[u8]) -> Result<SubscribeOutcome, SubscribeError> {
    let reply: SubscribeReply = serde_json::from_slice(body)?;
    if ok {
        Ok(SubscribeOutcome::Subscribed)
    } else {
        Ok(SubscribeOutcome::Rejected(
            reply.error.filter(|message| !message.is_empty()),
        ))
    }
}
