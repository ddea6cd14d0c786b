pub mod contact;
pub mod manager;
pub mod search;

use crate::errors::AppError;
use crate::helper::title_case;
use crate::validation::{ValidationReq, validate_phone_number, validate_text_field};

pub use contact::{ContactRecord, Field};
pub use manager::{ContactStore, Contacts};
pub use search::{SearchCriteria, SearchOutcome};
