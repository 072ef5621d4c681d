use serde_json::Value;
use tracing::info;

use crate::domain::{
    error::SubmissionError,
    models::registration_draft::RegistrationDraft,
    services::submission_service::{Confirmation, SubmissionHandler},
};

const SECRET_FIELDS: [&str; 2] = ["password", "confirmPassword"];

/// Logs the submitted bundle and confirms. Nothing is sent or stored.
#[derive(Debug, Clone)]
pub struct LoggingSubmissionHandler {
    message: String,
}

impl LoggingSubmissionHandler {
    pub fn new() -> Self {
        Self {
            message: "Registration successful!".to_string(),
        }
    }
}

impl Default for LoggingSubmissionHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// The draft as JSON with password fields removed
pub fn redacted_bundle(draft: &RegistrationDraft) -> Result<Value, SubmissionError> {
    let mut bundle = serde_json::to_value(draft)?;
    if let Value::Object(fields) = &mut bundle {
        for key in SECRET_FIELDS {
            fields.remove(key);
        }
    }
    Ok(bundle)
}

impl SubmissionHandler for LoggingSubmissionHandler {
    fn handle(&self, draft: RegistrationDraft) -> Result<Confirmation, SubmissionError> {
        let bundle = redacted_bundle(&draft)?;
        info!(bundle = %bundle, "form submitted");

        Ok(Confirmation {
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_hides_passwords() {
        let draft = RegistrationDraft {
            email: "jane@example.com".to_string(),
            password: "Abcdefgh".to_string(),
            confirm_password: "Abcdefgh".to_string(),
            ..Default::default()
        };
        let bundle = redacted_bundle(&draft).unwrap();
        assert_eq!("jane@example.com", bundle["email"]);
        assert!(bundle.get("password").is_none());
        assert!(bundle.get("confirmPassword").is_none());
    }

    #[test]
    fn test_handle_confirms() {
        let handler = LoggingSubmissionHandler::new();
        let confirmation = handler.handle(RegistrationDraft::new()).unwrap();
        assert_eq!("Registration successful!", confirmation.message);
    }
}
