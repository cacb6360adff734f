use serde::Deserialize;

use crate::form::{BannerKind, ContactFields, ContactForm};

const INVALID_FORM: &str = "Please fill in all required fields correctly.";
const SENT_FALLBACK: &str = "Your enquiry has been sent successfully!";
const REJECTED_FALLBACK: &str = "Failed to send message";
const UNREACHABLE: &str =
    "Sorry, there was an error sending your message. Please try again or call us directly.";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request to contact relay failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Contact relay rejected the enquiry ({status}): {message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// How one submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Client-side checks failed; nothing was sent.
    Invalid,
    Sent(String),
    Failed(String),
}

#[derive(Debug, Default, Deserialize)]
struct RelayReply {
    message: Option<String>,
    error: Option<String>,
}

pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn post(&self, fields: &ContactFields) -> Result<String, ClientError> {
        let response = self.http.post(&self.endpoint).json(fields).send().await?;

        let status = response.status();
        let reply: RelayReply = response.json().await?;

        if status.is_success() {
            Ok(reply.message.unwrap_or_else(|| SENT_FALLBACK.to_string()))
        } else {
            Err(ClientError::Rejected {
                status,
                message: reply
                    .error
                    .unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
            })
        }
    }

    /// Validates, posts once, and updates the form's view state.
    pub async fn submit(&self, form: &mut ContactForm) -> Outcome {
        if !form.validate_all() {
            form.show(BannerKind::Error, INVALID_FORM);
            return Outcome::Invalid;
        }

        form.set_busy(true);
        let result = self.post(&form.fields).await;
        form.set_busy(false);

        match result {
            Ok(message) => {
                form.show(BannerKind::Success, message.clone());
                form.reset();
                Outcome::Sent(message)
            }
            Err(ClientError::Rejected { status, message }) => {
                tracing::warn!("Contact relay returned {status}: {message}");
                form.show(BannerKind::Error, message.clone());
                Outcome::Failed(message)
            }
            Err(e) => {
                tracing::error!("Form submission error: {e}");
                form.show(BannerKind::Error, UNREACHABLE);
                Outcome::Failed(UNREACHABLE.to_string())
            }
        }
    }
}
