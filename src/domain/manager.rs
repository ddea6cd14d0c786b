use super::*;

use super::contact::normalize;
use indexmap::IndexMap;
use tracing::debug;

/// Phone number to record, kept in insertion order.
pub type Contacts = IndexMap<String, ContactRecord>;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactStore {
    pub mem: Contacts,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(mem: Contacts) -> Self {
        Self { mem }
    }

    pub fn contacts(&self) -> &Contacts {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.mem.contains_key(number)
    }

    pub fn add(
        &mut self,
        number: &str,
        first_name: &str,
        last_name: &str,
        city: &str,
    ) -> Result<&ContactRecord, AppError> {
        if !validate_phone_number(number, false) {
            return Err(AppError::InvalidPhoneNumber(number.to_string()));
        }

        if self.contains(number) {
            return Err(AppError::DuplicateNumber(number.to_string()));
        }

        let record = ContactRecord::try_new(first_name, last_name, city)?;

        debug!(number, "adding contact");
        let (index, _) = self.mem.insert_full(number.to_string(), record);
        Ok(&self.mem[index])
    }

    pub fn lookup_by_number(&self, number: &str) -> Option<&ContactRecord> {
        self.mem.get(number)
    }

    pub fn search_by_field(&self, field: Field, value: &str) -> Vec<(&str, &ContactRecord)> {
        self.mem
            .iter()
            .filter(|(_, record)| record.matches(field, value))
            .map(|(number, record)| (number.as_str(), record))
            .collect()
    }

    pub fn search_by_two_fields(
        &self,
        field1: Field,
        value1: &str,
        field2: Field,
        value2: &str,
    ) -> Vec<(&str, &ContactRecord)> {
        self.mem
            .iter()
            .filter(|(_, record)| record.matches(field1, value1) && record.matches(field2, value2))
            .map(|(number, record)| (number.as_str(), record))
            .collect()
    }

    pub fn delete(&mut self, number: &str) -> Result<ContactRecord, AppError> {
        // shift_remove keeps the display order of the remaining contacts
        match self.mem.shift_remove(number) {
            Some(record) => {
                debug!(number, "deleted contact");
                Ok(record)
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    /// Writes `value` into one field of an existing record.
    /// A blank value leaves the field untouched and returns `Ok(false)`.
    pub fn update_field(
        &mut self,
        number: &str,
        field: Field,
        value: &str,
    ) -> Result<bool, AppError> {
        let Some(record) = self.mem.get_mut(number) else {
            return Err(AppError::NotFound("Contact".to_string()));
        };

        if value.trim().is_empty() {
            return Ok(false);
        }

        if !validate_text_field(value, false) {
            return Err(AppError::Validation(ValidationReq::text_req()));
        }

        *record.get_mut(field) = normalize(value);
        debug!(number, field = field.as_str(), "updated contact");
        Ok(true)
    }
}
