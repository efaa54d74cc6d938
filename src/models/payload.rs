use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const USER_NAME: &str = "userName";
pub const EMAIL: &str = "email";
pub const EMPLOYEE_ID: &str = "employeeId";
pub const TOWER: &str = "tower";
pub const PROBLEM: &str = "problem";
pub const BUSINESS_BENEFIT: &str = "businessBenefit";
pub const JUSTIFICATION: &str = "justification";

pub const SUBMISSION_TIME: &str = "submissionTime";

pub const REQUIRED_FIELDS: [&str; 7] = [
    USER_NAME,
    EMAIL,
    EMPLOYEE_ID,
    TOWER,
    PROBLEM,
    BUSINESS_BENEFIT,
    JUSTIFICATION,
];

/// Field values captured at submit time, serialized as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(rename = "submissionTime")]
    pub submission_time: String,
}

impl SubmissionPayload {
    pub fn new(mut fields: BTreeMap<String, String>, at: DateTime<Utc>) -> Self {
        // The stamp wins over a form field of the same name.
        fields.remove(SUBMISSION_TIME);
        Self {
            fields,
            submission_time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
