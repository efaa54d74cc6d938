use crate::submission::fields;

#[derive(Debug)]
pub enum SubmitError {
    Validation(Vec<String>),
    Network { base_url: String },
    Server { status: u16, message: String },
    Unexpected(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(errors) => {
                write!(f, "{}", fields::format_errors(errors))
            }
            SubmitError::Network { base_url } => write!(
                f,
                "Unable to connect to server. Please make sure the backend server is running on {base_url}"
            ),
            SubmitError::Server { message, .. } => write!(f, "Error: {message}"),
            SubmitError::Unexpected(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Unexpected(err.to_string())
    }
}

#[derive(Debug)]
pub enum OriginError {
    InvalidLocation { location: String, reason: String },
}

impl std::fmt::Display for OriginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OriginError::InvalidLocation { location, reason } => {
                write!(f, "Invalid page location '{location}': {reason}")
            }
        }
    }
}

impl std::error::Error for OriginError {}
