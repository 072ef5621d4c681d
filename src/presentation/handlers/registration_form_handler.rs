use std::sync::Arc;

use serde::Serialize;

use crate::{
    config::FormSettings,
    domain::{
        error::DomainError,
        models::{
            field::FieldName,
            form_state::{FormPhase, FormState},
            registration_draft::{Country, FieldValue, FileHandle, Gender},
        },
        services::{
            clock_service::Clock, submission_service::Confirmation,
            submission_service::SubmissionHandler, validation_service::ValidationEngine,
        },
    },
    usecase::{
        edit_field_usecase::EditFieldUsecase,
        submit_registration_usecase::{SubmitOutcome, SubmitRegistrationUsecase},
    },
};

// Events

/// User interaction delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Change { field: FieldName, value: FieldValue },
    Blur(FieldName),
    SelectFile(Option<FileHandle>),
    Submit,
    Reset,
}

// View

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Radio,
    Password,
    TextArea,
    Select,
    File,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: FieldName,
    pub label: &'static str,
    pub input: InputKind,
    pub value: String,
    pub options: Vec<OptionView>,
    /// Only set once the field was touched or a submit was attempted
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub can_submit: bool,
    pub confirmation: Option<Confirmation>,
}

fn label(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => "Full Name",
        FieldName::Email => "Email",
        FieldName::PhoneNumber => "Phone Number",
        FieldName::Dob => "Date of Birth",
        FieldName::Gender => "Gender",
        FieldName::Password => "Password",
        FieldName::ConfirmPassword => "Confirm Password",
        FieldName::Address => "Address",
        FieldName::Country => "Country",
        FieldName::ProfilePicture => "Profile Picture (Optional)",
        FieldName::TermsAccepted => "I accept the terms and conditions",
    }
}

fn input_kind(field: FieldName) -> InputKind {
    match field {
        FieldName::FullName => InputKind::Text,
        FieldName::Email => InputKind::Email,
        FieldName::PhoneNumber => InputKind::Tel,
        FieldName::Dob => InputKind::Date,
        FieldName::Gender => InputKind::Radio,
        FieldName::Password | FieldName::ConfirmPassword => InputKind::Password,
        FieldName::Address => InputKind::TextArea,
        FieldName::Country => InputKind::Select,
        FieldName::ProfilePicture => InputKind::File,
        FieldName::TermsAccepted => InputKind::Checkbox,
    }
}

fn options(field: FieldName) -> Vec<OptionView> {
    let option = |value: &str, label: &str| OptionView {
        value: value.to_string(),
        label: label.to_string(),
    };
    match field {
        FieldName::Gender => Gender::ALL
            .iter()
            .map(|g| option(g.as_str(), g.as_str()))
            .collect(),
        FieldName::Country => std::iter::once(option("", "Select your country"))
            .chain(Country::ALL.iter().map(|c| option(c.as_str(), c.as_str())))
            .collect(),
        _ => Vec::new(),
    }
}

/* Form Component */

/// A mounted registration form: owns the state and routes events to the
/// edit and submit use cases.
pub struct RegistrationForm<C: Clock + Clone, H: SubmissionHandler> {
    state: FormState,
    edit_service: EditFieldUsecase<C>,
    submit_service: SubmitRegistrationUsecase<C, H>,
    confirmation: Option<Confirmation>,
}

impl<C: Clock + Clone, H: SubmissionHandler> RegistrationForm<C, H> {
    pub fn new(settings: &FormSettings, clock: C, handler: H) -> Self {
        let engine = Arc::new(ValidationEngine::new(settings));
        let edit_service = EditFieldUsecase::new(engine.clone(), clock.clone());
        let submit_service = SubmitRegistrationUsecase::new(engine, clock, handler);

        let mut state = FormState::new();
        edit_service.revalidate(&mut state);

        Self {
            state,
            edit_service,
            submit_service,
            confirmation: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn handler(&self) -> &H {
        self.submit_service.handler()
    }

    /// Apply one event. Returns the outcome when the event was a submit.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>, DomainError> {
        match event {
            FormEvent::Change { field, value } => {
                self.edit_service.set_value(&mut self.state, field, value)?;
            }
            FormEvent::Blur(field) => {
                self.edit_service.set_touched(&mut self.state, field)?;
            }
            FormEvent::SelectFile(file) => {
                self.edit_service.set_value(
                    &mut self.state,
                    FieldName::ProfilePicture,
                    FieldValue::File(file),
                )?;
            }
            FormEvent::Submit => {
                let outcome = self.submit_service.execute(&mut self.state)?;
                if let SubmitOutcome::Submitted(confirmation) = &outcome {
                    self.confirmation = Some(confirmation.clone());
                }
                return Ok(Some(outcome));
            }
            FormEvent::Reset => {
                self.state.reset();
                self.confirmation = None;
                self.edit_service.revalidate(&mut self.state);
            }
        }
        Ok(None)
    }

    pub fn view(&self) -> FormView {
        let draft = self.state.draft();
        let fields = FieldName::ALL
            .into_iter()
            .map(|field| FieldView {
                name: field,
                label: label(field),
                input: input_kind(field),
                value: draft.display_value(field),
                options: options(field),
                error: self.state.visible_error(field).map(str::to_string),
            })
            .collect();

        FormView {
            title: "Registration Form",
            fields,
            submit_label: "Register",
            can_submit: self.state.phase() == FormPhase::Editing,
            confirmation: self.confirmation.clone(),
        }
    }
}
