pub mod memory;
pub mod stores;

use crate::domain::{ContactStore, Contacts};
use crate::errors::AppError;
use crate::helper;
use crate::validation::validate_phone_number;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use tracing::{debug, warn};

pub const DEFAULT_PHONEBOOK: &str = "phonebook.json";

/// Loads the whole phonebook once at startup and writes it back once at exit.
pub trait Persistence {
    fn load(&self) -> Result<ContactStore, AppError>;

    fn save(&self, store: &ContactStore) -> Result<(), AppError>;

    /// Where the phonebook lives, for messages.
    fn location(&self) -> String;
}
