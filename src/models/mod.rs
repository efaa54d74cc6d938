pub mod field;
pub mod outcome;
pub mod payload;

pub use field::{BorderStyle, FieldKind, FormField};
pub use outcome::{Severity, SubmissionOutcome};
pub use payload::SubmissionPayload;
