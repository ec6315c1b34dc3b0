//! Password strength rules
//!
//! Four independent conditions a candidate password must all satisfy before
//! the account service will accept it. The same classifier runs on every
//! keystroke (for the live checklist) and again at submit time.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UPPERCASE: Regex = Regex::new("[A-Z]").expect("valid regex");
    static ref NUMBER: Regex = Regex::new("[0-9]").expect("valid regex");
    static ref SPECIAL_CHAR: Regex =
        Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid regex");
}

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordConditions {
    pub length: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special_char: bool,
}

impl PasswordConditions {
    /// Classify `password` against all four conditions.
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            uppercase: UPPERCASE.is_match(password),
            number: NUMBER.is_match(password),
            special_char: SPECIAL_CHAR.is_match(password),
        }
    }

    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.number && self.special_char
    }
}
