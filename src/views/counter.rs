use crate::models::BorderStyle;

const NORMAL_COLOR: &str = "#666";
const OVER_LIMIT_COLOR: &str = "#dc3545";

/// Live character count shown under a long-text field.
///
/// Purely cosmetic: going over the limit never blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthCounter {
    field: String,
    max: usize,
    current: usize,
}

impl LengthCounter {
    pub fn new(field: &str, max: usize) -> Self {
        Self {
            field: field.to_string(),
            max,
            current: 0,
        }
    }

    /// Recompute from the field's content and return the border the field should get.
    pub fn on_input(&mut self, value: &str) -> BorderStyle {
        // Browsers count UTF-16 code units.
        self.current = value.encode_utf16().count();

        if self.is_over_limit() {
            BorderStyle::Invalid
        } else {
            BorderStyle::Default
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_over_limit(&self) -> bool {
        self.current > self.max
    }

    pub fn label(&self) -> String {
        format!("{}/{} characters", self.current, self.max)
    }

    pub fn color(&self) -> &'static str {
        if self.is_over_limit() {
            OVER_LIMIT_COLOR
        } else {
            NORMAL_COLOR
        }
    }
}
