use chrono::NaiveDate;

/// Source of the calendar date the age rule is evaluated against
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
