use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use validator::ValidateEmail;

use crate::{
    config::FormSettings,
    domain::models::{field::FieldName, field_status::FieldErrors, registration_draft::RegistrationDraft},
};

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_DATE: &str = "Invalid date";
pub const PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";
pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions";

const DATE_FORMAT: &str = "%Y-%m-%d";

type Check = Box<dyn Fn(&RegistrationDraft, NaiveDate) -> bool + Send + Sync>;

/// A predicate the draft must satisfy, and the message shown when it doesn't
pub struct Rule {
    message: String,
    check: Check,
}

impl Rule {
    pub fn new(
        message: impl Into<String>,
        check: impl Fn(&RegistrationDraft, NaiveDate) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            check: Box::new(check),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, draft: &RegistrationDraft, today: NaiveDate) -> bool {
        (self.check)(draft, today)
    }
}

fn required(text: fn(&RegistrationDraft) -> &str) -> Rule {
    Rule::new(REQUIRED, move |d, _| !text(d).is_empty())
}

fn min_length(text: fn(&RegistrationDraft) -> &str, min: usize, message: String) -> Rule {
    Rule::new(message, move |d, _| text(d).chars().count() >= min)
}

fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Whole years between `birth` and `today`, counting a birthday as reached
/// only once its month and day have come round. A Feb 29 birthday is
/// reached on Mar 1 in non-leap years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Maps a draft to the first failing rule of every field.
///
/// Rules of a field run in the order they were declared and evaluation stops
/// at the first failure, so `Required` always wins over content checks.
/// `today` is passed in rather than read from a clock, which keeps
/// evaluation deterministic.
pub struct ValidationEngine {
    rules: BTreeMap<FieldName, Vec<Rule>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(&FormSettings::default())
    }
}

impl ValidationEngine {
    pub fn new(settings: &FormSettings) -> Self {
        let mut rules: BTreeMap<FieldName, Vec<Rule>> = BTreeMap::new();

        rules.insert(
            FieldName::FullName,
            vec![
                required(|d| d.full_name.as_str()),
                min_length(
                    |d| d.full_name.as_str(),
                    settings.min_full_name_length,
                    format!(
                        "Full Name must be at least {} characters long",
                        settings.min_full_name_length
                    ),
                ),
            ],
        );

        rules.insert(
            FieldName::Email,
            vec![
                required(|d| d.email.as_str()),
                Rule::new(INVALID_EMAIL, |d, _| d.email.validate_email()),
            ],
        );

        // length only, the content is not restricted to digits
        rules.insert(
            FieldName::PhoneNumber,
            vec![
                required(|d| d.phone_number.as_str()),
                min_length(
                    |d| d.phone_number.as_str(),
                    settings.min_phone_length,
                    format!(
                        "Phone number must be at least {} digits",
                        settings.min_phone_length
                    ),
                ),
            ],
        );

        // ages beyond i32 can never be reached
        let minimum_age = i32::try_from(settings.minimum_age).unwrap_or(i32::MAX);
        rules.insert(
            FieldName::Dob,
            vec![
                required(|d| d.dob.as_str()),
                Rule::new(INVALID_DATE, |d, _| parse_dob(&d.dob).is_some()),
                Rule::new(
                    format!("You must be at least {} years old", settings.minimum_age),
                    move |d, today| {
                        parse_dob(&d.dob).is_some_and(|birth| age_on(birth, today) >= minimum_age)
                    },
                ),
            ],
        );

        rules.insert(
            FieldName::Gender,
            vec![Rule::new(REQUIRED, |d, _| d.gender.is_some())],
        );

        rules.insert(
            FieldName::Password,
            vec![
                required(|d| d.password.as_str()),
                min_length(
                    |d| d.password.as_str(),
                    settings.min_password_length,
                    format!(
                        "Password must be at least {} characters",
                        settings.min_password_length
                    ),
                ),
                Rule::new(PASSWORD_UPPERCASE, |d, _| {
                    d.password.chars().any(|c| c.is_ascii_uppercase())
                }),
                Rule::new(PASSWORD_LOWERCASE, |d, _| {
                    d.password.chars().any(|c| c.is_ascii_lowercase())
                }),
            ],
        );

        rules.insert(
            FieldName::ConfirmPassword,
            vec![
                required(|d| d.confirm_password.as_str()),
                Rule::new(PASSWORDS_MUST_MATCH, |d, _| d.confirm_password == d.password),
            ],
        );

        rules.insert(FieldName::Address, vec![required(|d| d.address.as_str())]);

        rules.insert(
            FieldName::Country,
            vec![Rule::new(REQUIRED, |d, _| d.country.is_some())],
        );

        rules.insert(
            FieldName::TermsAccepted,
            vec![Rule::new(TERMS_NOT_ACCEPTED, |d, _| d.terms_accepted)],
        );

        Self { rules }
    }

    pub fn rules(&self, field: FieldName) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn validate_field(
        &self,
        field: FieldName,
        draft: &RegistrationDraft,
        today: NaiveDate,
    ) -> Option<String> {
        self.rules(field)
            .iter()
            .find(|rule| !rule.passes(draft, today))
            .map(|rule| rule.message().to_string())
    }

    pub fn validate(&self, draft: &RegistrationDraft, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in self.rules.keys() {
            if let Some(message) = self.validate_field(*field, draft, today) {
                errors.insert(*field, message);
            }
        }
        errors
    }
}
