use crate::models::{BorderStyle, FieldKind, FormField};
use crate::submission::is_valid_email;

/// Border a field gets when it loses focus.
pub fn on_blur(field: &FormField) -> BorderStyle {
    if field.required && field.is_blank() {
        BorderStyle::Invalid
    } else if field.kind == FieldKind::Email
        && !field.value.is_empty()
        && !is_valid_email(&field.value)
    {
        BorderStyle::Invalid
    } else if !field.value.is_empty() {
        BorderStyle::Valid
    } else {
        BorderStyle::Default
    }
}

pub fn on_focus(_field: &FormField) -> BorderStyle {
    BorderStyle::Active
}
