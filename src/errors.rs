use core::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingStoreFile(PathBuf),
    InputClosed,
    ParseCommand(String),
    InvalidPhoneNumber(String),
    Validation(String),
    DuplicateNumber(String),
    NotFound(String),
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Phonebook file is not valid JSON: {}", e)
            }
            AppError::MissingStoreFile(path) => {
                write!(f, "File {} is not in the directory", path.display())
            }
            AppError::InputClosed => {
                write!(f, "Input closed before exit was selected, changes were not saved")
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::InvalidPhoneNumber(number) => {
                write!(f, "Invalid phone number '{}': it must consist of 10 digits", number)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::DuplicateNumber(number) => {
                write!(f, "Number {} is already in the phonebook", number)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
        }
    }
}
