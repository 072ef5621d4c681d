pub mod edit_field_usecase;
pub mod submit_registration_usecase;
