use serde::Serialize;

use crate::domain::contact::ContactRecord;
use crate::errors::AppError;

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Any non-letter character starts a new word, so `o'neil` becomes `O'Neil`.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                // `ß` upper-cases to `SS`; only the first letter stays capital
                let mut upper = c.to_uppercase();
                output.extend(upper.next());
                output.extend(upper.flat_map(char::to_lowercase));
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }
    output
}

/// Two-space indented JSON, non-ASCII characters kept as they are.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn display_record(number: &str, record: &ContactRecord) -> Result<String, AppError> {
    Ok(format!("Number: {}, {}", number, to_pretty_json(record)?))
}
