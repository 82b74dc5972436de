//! Newsletter form state, independent of rendering.

use super::client::{SubscribeError, SubscribeOutcome};
use crate::t;

/// Line shown under the form after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Subscribed,
    /// Server-supplied reason, shown verbatim.
    ServerError(String),
    /// Rejected without a reason.
    Failed,
    /// Transport failure or an undecodable reply.
    Unreachable,
}

impl StatusMessage {
    pub fn text(&self) -> String {
        match self {
            StatusMessage::Subscribed => t!("newsletter-success"),
            StatusMessage::ServerError(message) => message.clone(),
            StatusMessage::Failed => t!("newsletter-failed"),
            StatusMessage::Unreachable => t!("newsletter-unreachable"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusMessage::Subscribed)
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_success() {
            "newsletter__status newsletter__status--success"
        } else {
            "newsletter__status newsletter__status--error"
        }
    }
}

impl From<Result<SubscribeOutcome, SubscribeError>> for StatusMessage {
    fn from(result: Result<SubscribeOutcome, SubscribeError>) -> Self {
        match result {
            Ok(SubscribeOutcome::Subscribed) => StatusMessage::Subscribed,
            Ok(SubscribeOutcome::Rejected(Some(reason))) => StatusMessage::ServerError(reason),
            Ok(SubscribeOutcome::Rejected(None)) => StatusMessage::Failed,
            Err(_) => StatusMessage::Unreachable,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    pub email: String,
    pub message: Option<StatusMessage>,
    pub loading: bool,
}

impl NewsletterForm {
    pub fn edit(&mut self, email: String) {
        self.email = email;
    }

    /// Enters the loading state and returns the address to send. `None` while
    /// a request is already in flight or when the draft is blank.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.loading || self.email.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.message = None;
        Some(self.email.clone())
    }

    pub fn finish(&mut self, result: Result<SubscribeOutcome, SubscribeError>) {
        if let Err(err) = &result {
            tracing::warn!(%err, "newsletter subscription failed");
        }
        let message = StatusMessage::from(result);
        if message.is_success() {
            tracing::info!("newsletter subscription accepted");
            self.email.clear();
        }
        self.message = Some(message);
        self.loading = false;
    }
}
