use regex::Regex;
use std::sync::LazyLock;

use crate::models::payload::{
    BUSINESS_BENEFIT, EMAIL, EMPLOYEE_ID, JUSTIFICATION, PROBLEM, TOWER, USER_NAME,
};
use crate::models::SubmissionPayload;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Required fields in reporting order, with the message used when blank.
const REQUIRED: [(&str, &str); 7] = [
    (USER_NAME, "UserName is required"),
    (EMAIL, "Email is required"),
    (EMPLOYEE_ID, "Employee ID is required"),
    (TOWER, "Please select your tower"),
    (PROBLEM, "Please select a problem type"),
    (BUSINESS_BENEFIT, "Business Benefit is required"),
    (JUSTIFICATION, "Justification/UseCase is required"),
];

const INVALID_EMAIL: &str = "Please enter a valid email address";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check every required field. Returns one message per violation; empty means valid.
pub fn validate(payload: &SubmissionPayload) -> Vec<String> {
    let mut errors = Vec::new();

    for (name, missing) in REQUIRED {
        let value = payload.get(name).unwrap_or("");

        if value.trim().is_empty() {
            errors.push(missing.to_string());
        } else if name == EMAIL && !is_valid_email(value) {
            errors.push(INVALID_EMAIL.to_string());
        }
    }

    errors
}

/// Render validation errors as one bulleted message.
pub fn format_errors(errors: &[String]) -> String {
    format!("Please fix the following errors:\n• {}", errors.join("\n• "))
}
