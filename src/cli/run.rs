use crate::{
    cli::{
        command::{Cli, Command},
        prompt::Prompter,
    },
    domain::{ContactStore, Field, SearchCriteria, SearchOutcome, search::non_blank},
    errors::AppError,
    helper::{display_record, to_pretty_json},
    storage::{Persistence, stores::JsonStorage},
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const NO_MATCHES: &str = "No matches found for your request!";

/// One interactive run: the phonebook is loaded when the session opens and
/// saved when the user picks exit.
pub struct Session<P, R, W> {
    pub storage: P,
    pub store: ContactStore,
    pub io: Prompter<R, W>,
}

impl<P: Persistence, R: BufRead, W: Write> Session<P, R, W> {
    pub fn open(storage: P, input: R, output: W) -> Result<Self, AppError> {
        let store = storage.load()?;
        let mut io = Prompter::new(input, output);

        io.say(&format!("Using phonebook {}", storage.location()))?;

        Ok(Self { storage, store, io })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            let command = self.io.get_command()?;
            debug!(?command, "menu choice");

            match command {
                Command::ListContacts => self.list_contacts()?,
                Command::AddContact => self.add_contact()?,
                Command::SearchContacts => self.search_contacts()?,
                Command::DeleteContact => self.delete_contact()?,
                Command::UpdateContact => self.update_contact()?,
                Command::Exit => break,
            }
        }

        self.storage.save(&self.store)?;
        info!(contacts = self.store.len(), "phonebook saved");
        self.io
            .say(&format!("Phonebook saved to {}. Bye!", self.storage.location()))
    }

    fn list_contacts(&mut self) -> Result<(), AppError> {
        let all = to_pretty_json(self.store.contacts())?;
        self.io.say(&all)
    }

    /// Prints the record for `number`, or the no-match message.
    fn show_number(&mut self, number: &str) -> Result<bool, AppError> {
        match self.store.lookup_by_number(number) {
            Some(record) => {
                let shown = display_record(number, record)?;
                self.io.say(&shown)?;
                Ok(true)
            }
            None => {
                self.io.say(NO_MATCHES)?;
                Ok(false)
            }
        }
    }

    fn add_contact(&mut self) -> Result<(), AppError> {
        self.io.say("Creating a new contact")?;
        let number = self.io.get_phone_number(false)?;

        if let Some(record) = self.store.lookup_by_number(&number) {
            let shown = display_record(&number, record)?;
            self.io.say(&shown)?;
            return self.io.say(
                "This number is already in the phonebook! To change it, use option \"5\"",
            );
        }

        let first_name = self.io.get_text(Field::FirstName, false)?;
        let last_name = self.io.get_text(Field::LastName, false)?;
        let city = self.io.get_text(Field::City, false)?;

        match self.store.add(&number, &first_name, &last_name, &city) {
            Ok(_) => self.io.say("Contact added successfully!"),
            Err(e) => self.io.say(&e.to_string()),
        }
    }

    fn search_contacts(&mut self) -> Result<(), AppError> {
        self.io
            .say("If you don't want to search by a parameter, press Enter")?;

        let mut criteria = SearchCriteria::new(&self.io.get_phone_number(true)?, "", "", "");

        if !criteria.has_number() {
            criteria.first_name = non_blank(&self.io.get_text(Field::FirstName, true)?);
            criteria.last_name = non_blank(&self.io.get_text(Field::LastName, true)?);

            // City is only asked for when no name was given
            if !criteria.has_name() {
                criteria.city = non_blank(&self.io.get_text(Field::City, true)?);
            }
        }

        let lines = match self.store.search(&criteria) {
            SearchOutcome::NoCriteria => Vec::new(),
            SearchOutcome::Number(Some((number, record))) => vec![display_record(number, record)?],
            SearchOutcome::Number(None) => vec![NO_MATCHES.to_string()],
            SearchOutcome::Matches(found) if found.is_empty() => vec![NO_MATCHES.to_string()],
            SearchOutcome::Matches(found) => found
                .into_iter()
                .map(|(number, record)| display_record(number, record))
                .collect::<Result<Vec<String>, AppError>>()?,
        };

        for line in lines {
            self.io.say(&line)?;
        }
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<(), AppError> {
        self.io.say("Press Enter to cancel the operation")?;
        let number = self.io.get_phone_number(true)?;

        if number.is_empty() {
            return self.io.say("Operation cancelled");
        }

        if self.show_number(&number)? {
            self.store.delete(&number)?;
            self.io.say("Contact deleted successfully!")?;
        }
        Ok(())
    }

    fn update_contact(&mut self) -> Result<(), AppError> {
        let number = self.io.get_phone_number(false)?;

        if !self.show_number(&number)? {
            return self.io.say("Use option \"2\" to create a new contact");
        }

        self.io
            .say("If you don't want to change a field, press Enter")?;

        let mut changed = false;
        for field in Field::ALL {
            let value = self.io.get_text(field, true)?;
            changed |= self.store.update_field(&number, field, &value)?;
        }

        if changed {
            self.io.say("Contact updated successfully!")?;
        }
        Ok(())
    }
}

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    debug!(phonebook = %cli.phonebook.display(), "starting");

    let storage = JsonStorage::new(cli.phonebook);
    let mut session = Session::open(storage, io::stdin().lock(), io::stdout().lock())?;

    session.run()
}
