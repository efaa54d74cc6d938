use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    /// Drop-down; an empty value means nothing is selected yet.
    Select { options: Vec<String> },
    TextArea,
}

impl FieldKind {
    pub fn select(options: &[&str]) -> Self {
        FieldKind::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Border color applied to a field by live feedback and length counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Default,
    Active,
    Valid,
    Invalid,
}

impl BorderStyle {
    pub fn color(&self) -> Option<&'static str> {
        match self {
            BorderStyle::Default => None,
            BorderStyle::Active => Some("#667eea"),
            BorderStyle::Valid => Some("#28a745"),
            BorderStyle::Invalid => Some("#dc3545"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub border: BorderStyle,
}

impl FormField {
    pub fn new(name: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required,
            value: String::new(),
            border: BorderStyle::Default,
        }
    }

    /// Whether this field could ever hold `value`. Selects only take one of their options.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.kind {
            FieldKind::Select { options } => value.is_empty() || options.iter().any(|o| o == value),
            _ => true,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.border = BorderStyle::Default;
    }
}
