//! Registration form logic: draft values, per-field validation rules,
//! touched/error bookkeeping and the submit gate. Rendering is left to the
//! host, which feeds `FormEvent`s in and draws the returned `FormView`.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;

pub use config::FormSettings;
pub use domain::error::{DomainError, SubmissionError};
pub use domain::models::{
    field::FieldName,
    registration_draft::{Country, FieldValue, FileHandle, Gender, RegistrationDraft},
};
pub use infrastructure::{
    logging_submission_handler::LoggingSubmissionHandler, system_clock::SystemClock,
};
pub use presentation::handlers::registration_form_handler::{FormEvent, FormView, RegistrationForm};
pub use usecase::submit_registration_usecase::SubmitOutcome;
