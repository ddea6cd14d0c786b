use crate::errors::AppError;
use crate::storage::DEFAULT_PHONEBOOK;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Interactive phone book")]
pub struct Cli {
    /// Phonebook JSON file. It must exist, and is saved back on exit
    #[arg(env = "PHONEBOOK_FILE", default_value = DEFAULT_PHONEBOOK)]
    pub phonebook: PathBuf,
}

/// Menu entries, in the order they are offered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    ListContacts,
    AddContact,
    SearchContacts,
    DeleteContact,
    UpdateContact,
    Exit,
}

pub const MENU: &str = "\n\
1 - view all contacts in the phonebook\n\
2 - add a new contact\n\
3 - search contacts\n\
4 - delete a contact\n\
5 - update a contact\n\
6 - exit\n\
Choose an operation: ";

pub fn parse_command(action: &str) -> Result<Command, AppError> {
    // Digits only, so "+1" and "-1" are rejected like any other text
    if action.is_empty() || !action.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::ParseCommand(action.to_string()));
    }

    match action.parse::<u64>() {
        Ok(1) => Ok(Command::ListContacts),
        Ok(2) => Ok(Command::AddContact),
        Ok(3) => Ok(Command::SearchContacts),
        Ok(4) => Ok(Command::DeleteContact),
        Ok(5) => Ok(Command::UpdateContact),
        Ok(6) => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_menu_numbers() -> Result<(), AppError> {
        assert_eq!(parse_command("1")?, Command::ListContacts);
        assert_eq!(parse_command("2")?, Command::AddContact);
        assert_eq!(parse_command("3")?, Command::SearchContacts);
        assert_eq!(parse_command("4")?, Command::DeleteContact);
        assert_eq!(parse_command("5")?, Command::UpdateContact);
        assert_eq!(parse_command("6")?, Command::Exit);
        assert_eq!(parse_command("06")?, Command::Exit);
        Ok(())
    }

    #[test]
    fn rejects_everything_else() {
        for action in ["0", "7", "abc", "", "+1", "-1", "1.0", "99999999999999999999999"] {
            assert!(
                matches!(parse_command(action), Err(AppError::ParseCommand(_))),
                "{action:?} should be rejected"
            );
        }
    }

    #[test]
    fn phonebook_path_defaults() {
        let cli = Cli::parse_from(["phonebook"]);
        if std::env::var_os("PHONEBOOK_FILE").is_none() {
            assert_eq!(cli.phonebook, PathBuf::from("phonebook.json"));
        }

        let cli = Cli::parse_from(["phonebook", "friends.json"]);
        assert_eq!(cli.phonebook, PathBuf::from("friends.json"));
    }
}
