use crate::cli::command::{Command, MENU, parse_command};
use crate::domain::Field;
use crate::errors::AppError;
use crate::validation::{ValidationReq, validate_phone_number, validate_text_field};
use std::io::{BufRead, Write};

/// Console input and output for the interactive session.
pub struct Prompter<R, W> {
    pub input: R,
    pub output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line.
    pub fn get_input(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(input.trim().to_string())
    }

    /// Asks until `valid` accepts the answer, printing `requirement` after
    /// every rejection. A blank answer is returned as is when `allow_blank`.
    pub fn retry<V>(
        &mut self,
        prompt: &str,
        allow_blank: bool,
        valid: V,
        requirement: &str,
    ) -> Result<String, AppError>
    where
        V: Fn(&str) -> Result<bool, AppError>,
    {
        loop {
            let input = self.get_input(prompt)?;

            if allow_blank && input.is_empty() {
                return Ok(input);
            }

            if valid(&input)? {
                return Ok(input);
            }
            self.say(requirement)?;
        }
    }

    pub fn get_phone_number(&mut self, allow_blank: bool) -> Result<String, AppError> {
        self.retry(
            "Phone number: ",
            allow_blank,
            |phone| Ok(validate_phone_number(phone, false)),
            &ValidationReq::phone_req(),
        )
    }

    pub fn get_text(&mut self, field: Field, allow_blank: bool) -> Result<String, AppError> {
        self.retry(
            &format!("{}: ", field.as_str()),
            allow_blank,
            |text| Ok(validate_text_field(text, false)),
            &ValidationReq::text_req(),
        )
    }

    pub fn get_command(&mut self) -> Result<Command, AppError> {
        loop {
            let action = self.get_input(MENU)?;

            match parse_command(&action) {
                Ok(command) => return Ok(command),
                Err(_) => self.say("This operation is not available! Try again!")?,
            }
        }
    }
}
