use super::*;

use std::path::PathBuf;

pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persistence for JsonStorage {
    fn load(&self) -> Result<ContactStore, AppError> {
        if !fs::exists(&self.path)? {
            return Err(AppError::MissingStoreFile(self.path.clone()));
        }

        let mut data = String::new();
        {
            let mut file = OpenOptions::new().read(true).open(&self.path)?;
            file.read_to_string(&mut data)?;
        }

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            debug!(path = %self.path.display(), "phonebook file is empty");
            return Ok(ContactStore::new());
        }

        let contacts: Contacts = serde_json::from_str(&data)?;

        for number in contacts.keys() {
            if !validate_phone_number(number, false) {
                warn!(number = %number, "phonebook contains a key that is not a 10 digit number");
            }
        }

        debug!(path = %self.path.display(), count = contacts.len(), "loaded phonebook");
        Ok(ContactStore::from_contacts(contacts))
    }

    fn save(&self, store: &ContactStore) -> Result<(), AppError> {
        let json_contacts = helper::to_pretty_json(store.contacts())?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json_contacts.as_bytes())?;

        debug!(path = %self.path.display(), count = store.len(), "saved phonebook");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
