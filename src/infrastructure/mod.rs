pub mod logging_submission_handler;
pub mod system_clock;
