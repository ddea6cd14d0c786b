use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

/// The free-text attributes of a record that can be searched and updated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    City,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::City];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::City => "city",
        }
    }
}

impl ContactRecord {
    /// Builds a record with every field trimmed and title-cased.
    pub fn new(first_name: &str, last_name: &str, city: &str) -> Self {
        ContactRecord {
            first_name: normalize(first_name),
            last_name: normalize(last_name),
            city: normalize(city),
        }
    }

    /// Checks the raw input before normalizing, since upper-casing can
    /// lengthen a string (`ß` becomes `Ss`).
    pub fn try_new(first_name: &str, last_name: &str, city: &str) -> Result<Self, AppError> {
        for (field, value) in Field::ALL.into_iter().zip([first_name, last_name, city]) {
            if !validate_text_field(value, false) {
                return Err(AppError::Validation(format!(
                    "{}: {}",
                    field.as_str(),
                    ValidationReq::text_req()
                )));
            }
        }
        Ok(Self::new(first_name, last_name, city))
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::City => &self.city,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::City => &mut self.city,
        }
    }

    pub fn matches(&self, field: Field, value: &str) -> bool {
        self.get(field).to_lowercase() == value.trim().to_lowercase()
    }

}

pub fn normalize(text: &str) -> String {
    title_case(text.trim())
}
