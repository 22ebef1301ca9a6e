use std::fmt;

/// Text shown to the user whenever a submission fails, whatever the cause.
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "There was a problem submitting your request. Please try again.";

/// Categorization of submission failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitErrorKind {
    /// The request never produced a response (DNS, connection, CORS, ...).
    Transport,
    /// The payload could not be encoded.
    Serialization,
    /// The endpoint answered with a readable failure status.
    Rejected,
}

impl fmt::Display for SubmitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitErrorKind::Transport => write!(f, "Transport"),
            SubmitErrorKind::Serialization => write!(f, "Serialization"),
            SubmitErrorKind::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Structured submission error. Logged in full, shown to the user only as
/// [`SUBMIT_FAILURE_MESSAGE`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitError {
    pub kind: SubmitErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl SubmitError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SubmitErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self {
            kind: SubmitErrorKind::Serialization,
            message: message.into(),
            status: None,
        }
    }

    pub fn rejected(status: u16) -> Self {
        Self {
            kind: SubmitErrorKind::Rejected,
            message: format!("endpoint responded with status {status}"),
            status: Some(status),
        }
    }

    /// The alert text for this failure. Every kind maps to the same message.
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILURE_MESSAGE
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SubmitError {}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        SubmitError::serialization(e.to_string())
    }
}
