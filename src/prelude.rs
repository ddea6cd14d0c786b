pub use crate::cli::{Session, command, prompt::Prompter, run_app};
pub use crate::domain::{
    ContactRecord, ContactStore, Contacts, Field, SearchCriteria, SearchOutcome, contact,
};
pub use crate::errors::AppError;
pub use crate::storage::{Persistence, memory::MemStorage, stores::JsonStorage};
