use super::*;

use super::contact::{ContactRecord, Field};
use super::manager::ContactStore;

/// What the user typed at the search prompts. Blank answers are `None`.
#[derive(Debug, Default, Clone)]
pub struct SearchCriteria {
    pub number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Nothing was supplied, no search was run.
    NoCriteria,
    Number(Option<(&'a str, &'a ContactRecord)>),
    Matches(Vec<(&'a str, &'a ContactRecord)>),
}

impl SearchCriteria {
    pub fn new(number: &str, first_name: &str, last_name: &str, city: &str) -> Self {
        Self {
            number: non_blank(number),
            first_name: non_blank(first_name),
            last_name: non_blank(last_name),
            city: non_blank(city),
        }
    }

    pub fn has_number(&self) -> bool {
        self.number.is_some()
    }

    pub fn has_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}

pub fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ContactStore {
    /// Runs the first applicable search: number, first+last name, first name,
    /// last name, then city. Later criteria are ignored once one applies,
    /// even when it finds nothing.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchOutcome<'_> {
        if let Some(number) = &criteria.number {
            let found = self
                .mem
                .get_key_value(number.as_str())
                .map(|(number, record)| (number.as_str(), record));
            return SearchOutcome::Number(found);
        }

        match (&criteria.first_name, &criteria.last_name) {
            (Some(first), Some(last)) => SearchOutcome::Matches(self.search_by_two_fields(
                Field::FirstName,
                first,
                Field::LastName,
                last,
            )),
            (Some(first), None) => {
                SearchOutcome::Matches(self.search_by_field(Field::FirstName, first))
            }
            (None, Some(last)) => SearchOutcome::Matches(self.search_by_field(Field::LastName, last)),
            (None, None) => match &criteria.city {
                Some(city) => SearchOutcome::Matches(self.search_by_field(Field::City, city)),
                None => SearchOutcome::NoCriteria,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Result<ContactStore, AppError> {
        let mut store = ContactStore::new();
        store.add("1112223333", "John", "Smith", "Paris")?;
        store.add("4445556666", "John", "Doe", "London")?;
        store.add("7778889999", "Mary", "Smith", "London")?;
        Ok(store)
    }

    fn numbers<'a>(outcome: &SearchOutcome<'a>) -> Vec<&'a str> {
        match outcome {
            SearchOutcome::Matches(found) => found.iter().map(|(n, _)| *n).collect(),
            SearchOutcome::Number(Some((n, _))) => vec![*n],
            _ => Vec::new(),
        }
    }

    #[test]
    fn number_wins_and_stops() -> Result<(), AppError> {
        let store = store()?;

        let hit = store.search(&SearchCriteria::new("4445556666", "Mary", "", ""));
        assert_eq!(numbers(&hit), ["4445556666"]);

        // No fall through to the name even though it would match
        let miss = store.search(&SearchCriteria::new("0000000000", "Mary", "", ""));
        assert_eq!(miss, SearchOutcome::Number(None));
        Ok(())
    }

    #[test]
    fn first_and_last_name_combined() -> Result<(), AppError> {
        let store = store()?;

        let outcome = store.search(&SearchCriteria::new("", "john", "smith", ""));
        assert_eq!(numbers(&outcome), ["1112223333"]);
        Ok(())
    }

    #[test]
    fn single_name_searches() -> Result<(), AppError> {
        let store = store()?;

        let by_first = store.search(&SearchCriteria::new("", "John", "", ""));
        assert_eq!(numbers(&by_first), ["1112223333", "4445556666"]);

        let by_last = store.search(&SearchCriteria::new("", "", "SMITH", "Paris"));
        assert_eq!(numbers(&by_last), ["1112223333", "7778889999"]);
        Ok(())
    }

    #[test]
    fn city_only_when_no_name() -> Result<(), AppError> {
        let store = store()?;

        let outcome = store.search(&SearchCriteria::new("", "", "", "london"));
        assert_eq!(numbers(&outcome), ["4445556666", "7778889999"]);

        let nobody = store.search(&SearchCriteria::new("", "", "", "Oslo"));
        assert_eq!(nobody, SearchOutcome::Matches(Vec::new()));
        Ok(())
    }

    #[test]
    fn blank_criteria_do_nothing() -> Result<(), AppError> {
        let store = store()?;

        assert_eq!(
            store.search(&SearchCriteria::new(" ", "", "", "")),
            SearchOutcome::NoCriteria
        );
        Ok(())
    }
}
