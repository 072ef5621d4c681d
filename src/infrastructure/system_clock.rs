use chrono::{Local, NaiveDate};

use crate::domain::services::clock_service::Clock;

/// Reads today's date from the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
