use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success(msg) | SubmissionOutcome::Failure(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

/// Presentation category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Loading,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Loading => "loading",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}
