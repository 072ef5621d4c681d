use serde::Deserialize;

use crate::domain::error::DomainError;

/// Thresholds used by the validation rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub min_full_name_length: usize,
    pub min_phone_length: usize,
    pub min_password_length: usize,
    pub minimum_age: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            min_full_name_length: 3,
            min_phone_length: 10,
            min_password_length: 8,
            minimum_age: 18,
        }
    }
}

impl FormSettings {
    /// Parse settings from JSON. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let settings: Self =
            serde_json::from_str(raw).map_err(|e| DomainError::InvalidSettings(e.to_string()))?;
        settings.check()?;
        Ok(settings)
    }

    pub fn check(&self) -> Result<(), DomainError> {
        if i32::try_from(self.minimum_age).is_err() {
            return Err(DomainError::InvalidSettings(format!(
                "minimumAge {} is out of range",
                self.minimum_age
            )));
        }
        Ok(())
    }
}
