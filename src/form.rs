use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::payload::{
    BUSINESS_BENEFIT, EMAIL, EMPLOYEE_ID, JUSTIFICATION, PROBLEM, TOWER, USER_NAME,
};
use crate::models::{FieldKind, FormField, SubmissionPayload};

pub const TOWER_OPTIONS: [&str; 6] = ["Tz", "EDL", "ESB", "EDI", "Corporate", "Legacy Apps"];

pub const PROBLEM_OPTIONS: [&str; 8] = [
    "Incident Solution Recommendation",
    "Knowledge chatbot",
    "Ticket Classification",
    "Dynamic Query Response",
    "Automated Ticket Auditing",
    "Code Documentation",
    "Sentiment Analysis",
    "File Processor for Special Character Corrections",
];

/// Current value and look of every field in the form, in display order.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    /// The AI solution request survey.
    pub fn survey() -> Self {
        Self::default()
            .with_field(FormField::new(USER_NAME, FieldKind::Text, true))
            .with_field(FormField::new(EMAIL, FieldKind::Email, true))
            .with_field(FormField::new(EMPLOYEE_ID, FieldKind::Text, true))
            .with_field(FormField::new(TOWER, FieldKind::select(&TOWER_OPTIONS), true))
            .with_field(FormField::new(PROBLEM, FieldKind::select(&PROBLEM_OPTIONS), true))
            .with_field(FormField::new(BUSINESS_BENEFIT, FieldKind::TextArea, true))
            .with_field(FormField::new(JUSTIFICATION, FieldKind::TextArea, true))
    }

    /// Add a field, replacing any existing field with the same name.
    pub fn with_field(mut self, field: FormField) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Snapshot every field into a payload stamped with `at`.
    pub fn collect(&self, at: DateTime<Utc>) -> SubmissionPayload {
        let fields: BTreeMap<String, String> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        SubmissionPayload::new(fields, at)
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}
