pub mod registration_form_handler;
