use super::*;

use std::cell::RefCell;

/// Keeps the phonebook in memory. Used where no file should be touched.
#[derive(Default)]
pub struct MemStorage {
    pub data: RefCell<Option<Contacts>>,
}

impl MemStorage {
    pub fn new(contacts: Contacts) -> Self {
        Self {
            data: RefCell::new(Some(contacts)),
        }
    }

    /// A storage with nothing in it; loading fails like a missing file.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<Contacts> {
        self.data.borrow().clone()
    }
}

impl Persistence for MemStorage {
    fn load(&self) -> Result<ContactStore, AppError> {
        match self.data.borrow().as_ref() {
            Some(contacts) => Ok(ContactStore::from_contacts(contacts.clone())),
            None => Err(AppError::MissingStoreFile("memory".into())),
        }
    }

    fn save(&self, store: &ContactStore) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(store.contacts().clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
