use crossterm::event::KeyEvent;
use strum::Display;

use crate::{
    api::{SignupRequest, SubmitOutcome},
    mode::Mode,
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Key(KeyEvent),
    /// Move focus to the next / previous form field.
    FocusNext,
    FocusPrev,
    /// The user asked to submit the form.
    Submit,
    /// A validated payload ready to go to the account service.
    SendSignup(SignupRequest),
    /// The account service answered (or the request fell over).
    SubmitFinished(SubmitOutcome),
    /// An account was actually created; the login view may acknowledge it.
    SignupComplete,
    /// Switch the visible view.
    Navigate(Mode),
    SystemMessage(String),
}
