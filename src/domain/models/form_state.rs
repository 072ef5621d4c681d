use std::collections::BTreeMap;

use crate::domain::{
    error::DomainError,
    models::{
        field::FieldName,
        field_status::{FieldErrors, FieldStatus},
        registration_draft::{FieldValue, RegistrationDraft},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Draft values plus per-field bookkeeping for one mounted form
#[derive(Debug, Clone)]
pub struct FormState {
    draft: RegistrationDraft,
    initial: RegistrationDraft,
    statuses: BTreeMap<FieldName, FieldStatus>,
    phase: FormPhase,
    submit_count: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::with_initial(RegistrationDraft::new())
    }

    pub fn with_initial(initial: RegistrationDraft) -> Self {
        Self {
            draft: initial.clone(),
            initial,
            statuses: FieldName::ALL
                .into_iter()
                .map(|field| (field, FieldStatus::default()))
                .collect(),
            phase: FormPhase::Editing,
            submit_count: 0,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn status(&self, field: FieldName) -> &FieldStatus {
        // every field gets a status at construction
        &self.statuses[&field]
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    pub fn is_valid(&self) -> bool {
        self.statuses.values().all(|status| status.error().is_none())
    }

    /// Error to render under the field: only once it was touched or a
    /// submit was attempted.
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        let status = self.status(field);
        if status.touched() || self.submit_count > 0 {
            status.error()
        } else {
            None
        }
    }

    pub(crate) fn ensure_editable(&self) -> Result<(), DomainError> {
        match self.phase {
            FormPhase::Submitted => Err(DomainError::AlreadySubmitted),
            _ => Ok(()),
        }
    }

    pub(crate) fn set_value(&mut self, field: FieldName, value: FieldValue) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.draft.set(field, value)
    }

    pub(crate) fn touch(&mut self, field: FieldName) {
        if let Some(status) = self.statuses.get_mut(&field) {
            status.touch();
        }
    }

    pub(crate) fn touch_all(&mut self) {
        self.statuses.values_mut().for_each(FieldStatus::touch);
    }

    pub(crate) fn apply_errors(&mut self, errors: &FieldErrors) {
        for (field, status) in self.statuses.iter_mut() {
            status.set_error(errors.get(*field).map(str::to_string));
        }
    }

    pub(crate) fn begin_submit(&mut self) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.submit_count += 1;
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    pub(crate) fn finish_submit(&mut self, accepted: bool) {
        self.phase = if accepted {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        };
    }

    /// Back to an empty, pristine draft
    pub fn reset(&mut self) {
        *self = Self::with_initial(self.initial.clone());
    }
}
