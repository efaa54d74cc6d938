pub mod client;
pub mod fields;
pub mod origin;

pub use client::{HttpSubmitter, Submitter};
pub use fields::{format_errors, is_valid_email, validate};
pub use origin::PageOrigin;
