use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown option {value:?} for field {field}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Value of wrong kind for field {0}")]
    TypeMismatch(&'static str),

    #[error("Form has already been submitted")]
    AlreadySubmitted,

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Could not serialize draft: {0}")]
    Serialization(#[from] serde_json::Error),
}
