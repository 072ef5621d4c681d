pub mod field;
pub mod field_status;
pub mod form_state;
pub mod registration_draft;
