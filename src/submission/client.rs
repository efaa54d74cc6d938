use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::error::SubmitError;
use crate::models::{SubmissionOutcome, SubmissionPayload};

use super::origin::PageOrigin;

const GENERIC_FAILURE: &str = "Submission failed";

/// Sends a validated payload somewhere and reports how it went.
///
/// Implementations never fail: every error path is folded into
/// [`SubmissionOutcome::Failure`].
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome;
}

pub struct HttpSubmitter {
    client: reqwest::Client,
    base_url: String,
    submit_url: String,
    default_success_message: String,
}

impl HttpSubmitter {
    pub fn new(config: &Config, origin: &PageOrigin) -> Self {
        let base_url = origin.base_url(config);
        Self {
            client: reqwest::Client::builder()
                .build()
                .expect("Failed to build reqwest client"),
            submit_url: config.submit_url(&base_url),
            base_url,
            default_success_message: config.default_success_message.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    async fn try_submit(&self, payload: &SubmissionPayload) -> Result<String, SubmitError> {
        let resp = self
            .client
            .post(&self.submit_url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmitError::Unexpected(e.to_string()))?;

        if status.is_success() {
            let parsed: Value = serde_json::from_str(&body)?;
            return Ok(parsed
                .get("message")
                .and_then(Value::as_str)
                .map(|s| s.to_string())
                .unwrap_or_else(|| self.default_success_message.clone()));
        }

        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(|s| s.to_string()))
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        Err(SubmitError::Server {
            status: status.as_u16(),
            message,
        })
    }

    fn classify(&self, err: reqwest::Error) -> SubmitError {
        if err.is_connect() {
            SubmitError::Network {
                base_url: self.base_url.clone(),
            }
        } else {
            SubmitError::Unexpected(err.to_string())
        }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let attempt = Uuid::now_v7();
        tracing::debug!("Submission {attempt} posting to {}", self.submit_url);

        match self.try_submit(payload).await {
            Ok(message) => {
                tracing::info!("Submission {attempt} accepted");
                SubmissionOutcome::Success(message)
            }
            Err(e) => {
                tracing::error!("Submission {attempt} failed: {e:?}");
                SubmissionOutcome::Failure(e.to_string())
            }
        }
    }
}
