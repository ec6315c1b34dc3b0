//! Pure domain logic
//!
//! Everything in here is side-effect free: form state, password rules and
//! the ordered validation that gates a submission. The UI layer renders
//! these values, the app layer acts on them.

pub mod form;
pub mod password;

pub use form::{Field, SignupForm, ValidationError};
pub use password::PasswordConditions;
