use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    error::DomainError,
    models::{field::FieldName, form_state::FormState, registration_draft::FieldValue},
    services::{clock_service::Clock, validation_service::ValidationEngine},
};

/// Change and blur handling for the form state
pub struct EditFieldUsecase<C: Clock> {
    engine: Arc<ValidationEngine>,
    clock: C,
}

impl<C: Clock> EditFieldUsecase<C> {
    pub fn new(engine: Arc<ValidationEngine>, clock: C) -> Self {
        Self { engine, clock }
    }

    /// Store a new value and re-run every rule.
    ///
    /// The whole draft is re-validated so that confirmPassword follows
    /// password edits and the age rule sees the current date.
    pub fn set_value(
        &self,
        state: &mut FormState,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(), DomainError> {
        state.set_value(field, value)?;
        debug!(field = %field, "field changed");
        self.revalidate(state);
        Ok(())
    }

    pub fn set_touched(&self, state: &mut FormState, field: FieldName) -> Result<(), DomainError> {
        state.ensure_editable()?;
        state.touch(field);
        debug!(field = %field, "field touched");
        self.revalidate(state);
        Ok(())
    }

    pub fn revalidate(&self, state: &mut FormState) {
        let errors = self.engine.validate(state.draft(), self.clock.today());
        state.apply_errors(&errors);
    }
}
