pub mod clock_service;
pub mod submission_service;
pub mod validation_service;
