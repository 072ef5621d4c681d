use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    error::DomainError,
    models::{field_status::FieldErrors, form_state::FormState},
    services::{
        clock_service::Clock,
        submission_service::{Confirmation, SubmissionHandler},
        validation_service::ValidationEngine,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(Confirmation),
    /// At least one rule failed; the handler was not called
    Blocked(FieldErrors),
}

pub struct SubmitRegistrationUsecase<C: Clock, H: SubmissionHandler> {
    engine: Arc<ValidationEngine>,
    clock: C,
    handler: H,
}

impl<C: Clock, H: SubmissionHandler> SubmitRegistrationUsecase<C, H> {
    pub fn new(engine: Arc<ValidationEngine>, clock: C, handler: H) -> Self {
        Self {
            engine,
            clock,
            handler,
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn execute(&self, state: &mut FormState) -> Result<SubmitOutcome, DomainError> {
        state.begin_submit()?;
        state.touch_all();

        let errors = self.engine.validate(state.draft(), self.clock.today());
        state.apply_errors(&errors);
        if !errors.is_empty() {
            let invalid: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
            warn!(
                submit_count = state.submit_count(),
                invalid = ?invalid,
                "registration blocked by validation"
            );
            state.finish_submit(false);
            return Ok(SubmitOutcome::Blocked(errors));
        }

        match self.handler.handle(state.draft().clone()) {
            Ok(confirmation) => {
                state.finish_submit(true);
                info!(submit_count = state.submit_count(), "registration submitted");
                Ok(SubmitOutcome::Submitted(confirmation))
            }
            Err(e) => {
                state.finish_submit(false);
                warn!(error = %e, "submission handler failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::NaiveDate;
    use rstest::*;

    use super::*;
    use crate::domain::{
        error::SubmissionError,
        models::{
            field::FieldName,
            form_state::FormPhase,
            registration_draft::{Country, Gender, RegistrationDraft},
        },
        services::validation_service::REQUIRED,
    };

    #[derive(Clone)]
    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    // mock handler recording every draft it receives
    #[derive(Clone, Default)]
    struct RecordingHandler {
        received: Rc<RefCell<Vec<RegistrationDraft>>>,
        fail: bool,
    }

    impl SubmissionHandler for RecordingHandler {
        fn handle(&self, draft: RegistrationDraft) -> Result<Confirmation, SubmissionError> {
            self.received.borrow_mut().push(draft);
            if self.fail {
                return Err(SubmissionError::Rejected("backend unavailable".to_string()));
            }
            Ok(Confirmation {
                message: "ok".to_string(),
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn usecase(handler: RecordingHandler) -> SubmitRegistrationUsecase<FixedClock, RecordingHandler> {
        SubmitRegistrationUsecase::new(
            Arc::new(ValidationEngine::default()),
            FixedClock(today()),
            handler,
        )
    }

    #[fixture]
    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "5551234567".to_string(),
            dob: "2006-06-15".to_string(),
            gender: Some(Gender::Other),
            password: "Abcdefgh".to_string(),
            confirm_password: "Abcdefgh".to_string(),
            address: "1 Main St".to_string(),
            country: Some(Country::India),
            terms_accepted: true,
            profile_picture: None,
        }
    }

    #[rstest]
    fn test_submit_positive(valid_draft: RegistrationDraft) {
        let handler = RecordingHandler::default();
        let usecase = usecase(handler.clone());
        let mut state = FormState::with_initial(valid_draft.clone());

        let outcome = usecase.execute(&mut state).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Submitted(ref c) if c.message == "ok"));
        assert_eq!(vec![valid_draft], *handler.received.borrow());
        assert_eq!(FormPhase::Submitted, state.phase());
        assert_eq!(1, state.submit_count());
    }

    #[rstest]
    fn test_submit_blocked_negative(mut valid_draft: RegistrationDraft) {
        valid_draft.address.clear();
        let handler = RecordingHandler::default();
        let usecase = usecase(handler.clone());
        let mut state = FormState::with_initial(valid_draft);

        let outcome = usecase.execute(&mut state).unwrap();

        let SubmitOutcome::Blocked(errors) = outcome else {
            panic!("expected submission to be blocked");
        };
        assert_eq!(Some(REQUIRED), errors.get(FieldName::Address));
        assert!(handler.received.borrow().is_empty());
        assert_eq!(FormPhase::Editing, state.phase());
        assert!(FieldName::ALL.iter().all(|f| state.status(*f).touched()));
        assert_eq!(Some(REQUIRED), state.visible_error(FieldName::Address));
    }

    #[rstest]
    fn test_submit_twice_negative(valid_draft: RegistrationDraft) {
        let handler = RecordingHandler::default();
        let usecase = usecase(handler.clone());
        let mut state = FormState::with_initial(valid_draft);

        usecase.execute(&mut state).unwrap();
        let err = usecase.execute(&mut state).unwrap_err();

        assert!(matches!(err, DomainError::AlreadySubmitted));
        assert_eq!(1, handler.received.borrow().len());
    }

    #[rstest]
    fn test_handler_failure_returns_to_editing_negative(valid_draft: RegistrationDraft) {
        let handler = RecordingHandler {
            fail: true,
            ..Default::default()
        };
        let usecase = usecase(handler);
        let mut state = FormState::with_initial(valid_draft);

        let err = usecase.execute(&mut state).unwrap_err();

        assert!(matches!(err, DomainError::Submission(SubmissionError::Rejected(_))));
        assert_eq!(FormPhase::Editing, state.phase());
    }
}
