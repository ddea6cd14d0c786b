use regex::Regex;
use std::sync::LazyLock;

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone number pattern is valid"));

pub const MIN_TEXT_LEN: usize = 3;

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn phone_req() -> String {
        "Phone number must consist of 10 digits".to_string()
    }

    pub fn text_req() -> String {
        format!("Enter at least {MIN_TEXT_LEN} characters")
    }
}

pub fn validate_phone_number(phone: &str, allow_blank: bool) -> bool {
    // Exactly 10 ASCII digits, nothing else.
    // Blank only where the caller treats it as "skip" or "cancel".
    (allow_blank && phone.is_empty()) || PHONE_NUMBER.is_match(phone)
}

pub fn validate_text_field(text: &str, allow_blank: bool) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return allow_blank;
    }
    text.chars().count() >= MIN_TEXT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers() {
        assert!(validate_phone_number("1234567890", false));

        assert!(!validate_phone_number("12345", false)); // too short
        assert!(!validate_phone_number("12345678901", false)); // too long
        assert!(!validate_phone_number("123abc7890", false));
        assert!(!validate_phone_number("+123456789", false));
        assert!(!validate_phone_number("１２３４５６７８９０", false)); // full-width digits
        assert!(!validate_phone_number("", false));

        assert!(validate_phone_number("", true));
        assert!(!validate_phone_number(" ", true));
    }

    #[test]
    fn text_fields() {
        assert!(validate_text_field("Ann", false));
        assert!(validate_text_field("  Bob  ", false));
        assert!(validate_text_field("Щука", false));

        assert!(!validate_text_field("Al", false));
        assert!(!validate_text_field("", false));
        assert!(!validate_text_field("   ", false));
        assert!(!validate_text_field(" ab ", true));

        assert!(validate_text_field("", true));
        assert!(validate_text_field("   ", true));
    }
}
