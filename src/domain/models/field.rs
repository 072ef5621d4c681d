use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Identifier of a registration form field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Dob,
    Gender,
    Password,
    ConfirmPassword,
    Address,
    Country,
    ProfilePicture,
    TermsAccepted,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Dob,
        FieldName::Gender,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Address,
        FieldName::Country,
        FieldName::ProfilePicture,
        FieldName::TermsAccepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::Dob => "dob",
            FieldName::Gender => "gender",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::Address => "address",
            FieldName::Country => "country",
            FieldName::ProfilePicture => "profilePicture",
            FieldName::TermsAccepted => "termsAccepted",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}
