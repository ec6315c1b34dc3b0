//! Sign-up form state and validation
//!
//! `SignupForm` holds the in-progress values of the four input fields.
//! Values are stored exactly as typed: no trimming, no normalization.
//! Validation runs in a fixed order and stops at the first failure so the
//! user always sees a single, specific message.

use std::fmt;

use crate::api::SignupRequest;

use super::password::PasswordConditions;

/// The four input fields, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email",
            Field::Password => "Enter your password",
            Field::ConfirmPassword => "Confirm your password",
        }
    }

    /// Password fields render masked.
    pub fn is_masked(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    pub fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Password => 2,
            Field::ConfirmPassword => 3,
        }
    }

    pub fn next(&self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    pub fn prev(&self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    WeakPassword,
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::MissingFields => "All fields are required.",
            ValidationError::WeakPassword => "Please ensure your password meets all conditions.",
            ValidationError::PasswordMismatch => "Passwords do not match.",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for ValidationError {}

#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    conditions: PasswordConditions,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new value for `field`.
    ///
    /// The password checklist is recomputed before the value is stored, so
    /// `conditions()` never lags behind `value(Field::Password)`.
    pub fn set(&mut self, field: Field, value: String) {
        if field == Field::Password {
            self.conditions = PasswordConditions::check(&value);
        }
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Live checklist state for the current password value.
    pub fn conditions(&self) -> &PasswordConditions {
        &self.conditions
    }

    /// Run the ordered submit-time checks.
    ///
    /// The password conditions are re-evaluated here with the same
    /// classifier the keystroke path uses, rather than trusting the cached
    /// checklist.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if !PasswordConditions::check(&self.password).all_met() {
            return Err(ValidationError::WeakPassword);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        // confirm_password is a local check only; it never leaves the form
        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn filled_form(password: &str, confirm: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.set(Field::Name, "Ada Lovelace".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Password, password.into());
        form.set(Field::ConfirmPassword, confirm.into());
        form
    }

    #[rstest]
    #[case(Field::Name)]
    #[case(Field::Email)]
    #[case(Field::Password)]
    #[case(Field::ConfirmPassword)]
    fn any_empty_field_fails_first(#[case] emptied: Field) {
        let mut form = filled_form("Abcdef1!", "Abcdef1!");
        form.set(emptied, String::new());
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn empty_field_reported_before_weak_password() {
        let mut form = filled_form("weak", "weak");
        form.set(Field::Name, String::new());
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn weak_password_reported_before_mismatch() {
        // no uppercase, no special char, and the two entries differ
        let form = filled_form("abc12345", "abc123456");
        assert_eq!(form.validate(), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn mismatch_detected_after_conditions_pass() {
        let form = filled_form("Abcdef1!", "Abcdef1!!");
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn valid_form_yields_request_without_confirmation() {
        let form = filled_form("Abcdef1!", "Abcdef1!");
        let request = form.validate().expect("form should validate");
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, "Abcdef1!");
    }

    #[test]
    fn values_are_stored_verbatim() {
        let mut form = SignupForm::new();
        form.set(Field::Name, "  spaced  ".into());
        assert_eq!(form.value(Field::Name), "  spaced  ");
    }

    #[test]
    fn checklist_tracks_the_latest_password() {
        let mut form = SignupForm::new();
        form.set(Field::Password, "Abcdef1!".into());
        assert!(form.conditions().all_met());
        form.set(Field::Password, "abc".into());
        assert!(!form.conditions().all_met());
    }

    #[test]
    fn error_messages_match_the_ui_contract() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required."
        );
        assert_eq!(
            ValidationError::WeakPassword.to_string(),
            "Please ensure your password meets all conditions."
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn focus_order_wraps_in_both_directions() {
        assert_eq!(Field::ConfirmPassword.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::ConfirmPassword);
    }
}
