use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::field::FieldName;

/// Error messages keyed by field. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldState {
    Pristine,
    Valid,
    Invalid,
}

/// Touched flag and current error of one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldStatus {
    touched: bool,
    error: Option<String>,
}

impl FieldStatus {
    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn state(&self) -> FieldState {
        match (self.touched, &self.error) {
            (false, _) => FieldState::Pristine,
            (true, None) => FieldState::Valid,
            (true, Some(_)) => FieldState::Invalid,
        }
    }
}
