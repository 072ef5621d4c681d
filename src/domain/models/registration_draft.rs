use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{error::DomainError, models::field::FieldName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| DomainError::UnknownOption {
                field: FieldName::Gender.as_str(),
                value: s.to_string(),
            })
    }
}

/// Countries offered by the country select. Extend by adding variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    Canada,
    India,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Usa, Country::Canada, Country::India];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::India => "India",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| DomainError::UnknownOption {
                field: FieldName::Country.as_str(),
                value: s.to_string(),
            })
    }
}

/// Handle to a file chosen through the host's file picker.
/// Stored as-is; neither size nor type is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    id: Uuid,
    file_name: String,
    size_bytes: u64,
    content_type: Option<String>,
}

impl FileHandle {
    pub fn new(file_name: String, size_bytes: u64, content_type: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            size_bytes,
            content_type,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// Payload of a field change event
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    File(Option<FileHandle>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// In-progress registration values, keyed by the form's field names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// Raw `YYYY-MM-DD` text from the date input
    pub dob: String,
    pub gender: Option<Gender>,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub country: Option<Country>,
    pub terms_accepted: bool,
    pub profile_picture: Option<FileHandle>,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), DomainError> {
        match (field, value) {
            (FieldName::FullName, FieldValue::Text(v)) => self.full_name = v,
            (FieldName::Email, FieldValue::Text(v)) => self.email = v,
            (FieldName::PhoneNumber, FieldValue::Text(v)) => self.phone_number = v,
            (FieldName::Dob, FieldValue::Text(v)) => self.dob = v,
            (FieldName::Password, FieldValue::Text(v)) => self.password = v,
            (FieldName::ConfirmPassword, FieldValue::Text(v)) => self.confirm_password = v,
            (FieldName::Address, FieldValue::Text(v)) => self.address = v,
            (FieldName::Gender, FieldValue::Text(v)) => {
                self.gender = if v.is_empty() { None } else { Some(v.parse()?) };
            }
            (FieldName::Country, FieldValue::Text(v)) => {
                self.country = if v.is_empty() { None } else { Some(v.parse()?) };
            }
            (FieldName::TermsAccepted, FieldValue::Checked(v)) => self.terms_accepted = v,
            (FieldName::ProfilePicture, FieldValue::File(v)) => self.profile_picture = v,
            (field, _) => return Err(DomainError::TypeMismatch(field.as_str())),
        }
        Ok(())
    }

    /// Text shown in the field's input
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::FullName => self.full_name.clone(),
            FieldName::Email => self.email.clone(),
            FieldName::PhoneNumber => self.phone_number.clone(),
            FieldName::Dob => self.dob.clone(),
            FieldName::Gender => self.gender.map(|g| g.to_string()).unwrap_or_default(),
            FieldName::Password => self.password.clone(),
            FieldName::ConfirmPassword => self.confirm_password.clone(),
            FieldName::Address => self.address.clone(),
            FieldName::Country => self.country.map(|c| c.to_string()).unwrap_or_default(),
            FieldName::TermsAccepted => self.terms_accepted.to_string(),
            FieldName::ProfilePicture => self
                .profile_picture
                .as_ref()
                .map(|file| file.file_name().to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[fixture]
    fn draft() -> RegistrationDraft {
        RegistrationDraft::new()
    }

    #[rstest]
    fn test_set_text_fields(mut draft: RegistrationDraft) {
        draft.set(FieldName::FullName, FieldValue::text("Jane Doe")).unwrap();
        draft.set(FieldName::Dob, FieldValue::text("2000-01-31")).unwrap();
        assert_eq!("Jane Doe", draft.full_name);
        assert_eq!("2000-01-31", draft.dob);
    }

    #[rstest]
    fn test_set_options(mut draft: RegistrationDraft) {
        draft.set(FieldName::Gender, FieldValue::text("Female")).unwrap();
        draft.set(FieldName::Country, FieldValue::text("USA")).unwrap();
        assert_eq!(Some(Gender::Female), draft.gender);
        assert_eq!(Some(Country::Usa), draft.country);

        // selecting the placeholder clears the choice
        draft.set(FieldName::Country, FieldValue::text("")).unwrap();
        assert_eq!(None, draft.country);
    }

    #[rstest]
    fn test_set_unknown_option_negative(mut draft: RegistrationDraft) {
        let err = draft
            .set(FieldName::Country, FieldValue::text("Atlantis"))
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownOption { field: "country", .. }));
        assert_eq!(None, draft.country);
    }

    #[rstest]
    #[case(FieldName::TermsAccepted, FieldValue::text("yes"))]
    #[case(FieldName::Email, FieldValue::Checked(true))]
    #[case(FieldName::ProfilePicture, FieldValue::text("me.png"))]
    fn test_set_wrong_kind_negative(
        mut draft: RegistrationDraft,
        #[case] field: FieldName,
        #[case] value: FieldValue,
    ) {
        let err = draft.set(field, value).unwrap_err();
        assert!(matches!(err, DomainError::TypeMismatch(name) if name == field.as_str()));
    }

    #[rstest]
    fn test_profile_picture_is_stored_unchecked(mut draft: RegistrationDraft) {
        let file = FileHandle::new("huge.exe".to_string(), u64::MAX, None);
        draft
            .set(FieldName::ProfilePicture, FieldValue::File(Some(file.clone())))
            .unwrap();
        assert_eq!(Some(file), draft.profile_picture);
        assert_eq!("huge.exe", draft.display_value(FieldName::ProfilePicture));
    }

    #[test]
    fn test_file_handle_keeps_host_metadata() {
        let first = FileHandle::new("me.png".to_string(), 2048, Some("image/png".to_string()));
        let second = FileHandle::new("me.png".to_string(), 2048, None);

        assert_eq!("me.png", first.file_name());
        assert_eq!(2048, first.size_bytes());
        assert_eq!(Some("image/png"), first.content_type());
        assert_eq!(None, second.content_type());
        // every selection gets its own id
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_bundle_uses_wire_names() {
        let draft = RegistrationDraft {
            full_name: "Jane Doe".to_string(),
            country: Some(Country::Usa),
            terms_accepted: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!("Jane Doe", json["fullName"]);
        assert_eq!("USA", json["country"]);
        assert_eq!(true, json["termsAccepted"]);
    }
}
