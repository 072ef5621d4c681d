use serde::Serialize;

use crate::domain::{error::SubmissionError, models::registration_draft::RegistrationDraft};

/// What the caller shows once a registration went through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

/// Completion action receiving a draft that passed every rule
pub trait SubmissionHandler {
    fn handle(&self, draft: RegistrationDraft) -> Result<Confirmation, SubmissionError>;
}
