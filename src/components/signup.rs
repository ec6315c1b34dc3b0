//! Sign-up form component
//!
//! Four single-line inputs, a live password checklist, and a single inline
//! error slot. Validation is delegated to [`SignupForm`]; the network call
//! is delegated to the app loop via [`Action::SendSignup`] so this component
//! stays synchronous and testable.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use super::Component;
use crate::{
    action::Action,
    api::SubmitOutcome,
    config::Config,
    domain::{Field, SignupForm},
    mode::Mode,
    tui::Frame,
};

const FORM_WIDTH: u16 = 48;
const MASK_CHAR: char = '\u{2022}'; // '•'

pub struct SignUp<'a> {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    form: SignupForm,
    inputs: [TextArea<'a>; 4],
    focus: Field,
    error_message: Option<String>,
    submitting: bool,
    active: bool,
}

impl SignUp<'_> {
    pub fn new() -> Self {
        let inputs = Field::ALL.map(|field| {
            let mut input = TextArea::default();
            input.set_placeholder_text(field.placeholder());
            input.set_cursor_line_style(Style::default());
            if field.is_masked() {
                input.set_mask_char(MASK_CHAR);
            }
            input
        });
        Self {
            command_tx: None,
            config: Config::default(),
            form: SignupForm::new(),
            inputs,
            focus: Field::Name,
            error_message: None,
            submitting: false,
            active: true,
        }
    }

    pub fn focused(&self) -> Field {
        self.focus
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Feed a key into the focused input and mirror its content into the
    /// form state, recomputing the checklist before the value is visible.
    fn edit_focused(&mut self, key: KeyEvent) {
        let input = &mut self.inputs[self.focus.index()];
        if input.input(key) {
            let value = input.lines().join("\n");
            self.form.set(self.focus, value);
        }
    }

    fn on_submit(&mut self) -> Option<Action> {
        if self.submitting {
            log::debug!("submit ignored: a request is already in flight");
            return None;
        }
        match self.form.validate() {
            Ok(request) => {
                self.submitting = true;
                Some(Action::SendSignup(request))
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                None
            }
        }
    }

    fn on_submit_finished(&mut self, outcome: SubmitOutcome) -> Option<Action> {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Created => {
                self.error_message = None;
                if let Some(tx) = &self.command_tx {
                    let _ = tx.send(Action::SystemMessage(String::from(
                        "Registration successful!",
                    )));
                    let _ = tx.send(Action::SignupComplete);
                }
                Some(Action::Navigate(Mode::Login))
            }
            SubmitOutcome::Rejected { status } => {
                log::warn!("signup rejected with status {status}");
                self.error_message = Some(String::from("Registration failed."));
                None
            }
            SubmitOutcome::Failed { reason } => {
                log::error!("signup request failed: {reason}");
                self.error_message = Some(String::from("An error occurred."));
                None
            }
        }
    }

    fn checklist_line(&self, met: bool, label: &str) -> Line<'_> {
        let (mark, style) = if met {
            ("\u{2713}", Style::default().fg(Color::Green))
        } else {
            ("\u{2717}", Style::default().fg(Color::Red))
        };
        Line::from(vec![
            Span::styled(format!(" {mark} "), style),
            Span::styled(label.to_string(), style),
        ])
    }

    fn draw_field(&mut self, f: &mut Frame<'_>, field: Field, area: Rect) {
        let focused = self.focus == field;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label());
        self.inputs[field.index()].set_block(block);
        f.render_widget(&self.inputs[field.index()], area);
    }
}

impl Default for SignUp<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SignUp<'_> {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.active {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::F(2) => Some(Action::Navigate(Mode::Login)),
            _ => {
                self.edit_focused(key);
                None
            }
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let followup = match action {
            Action::FocusNext if self.active => {
                self.focus = self.focus.next();
                None
            }
            Action::FocusPrev if self.active => {
                self.focus = self.focus.prev();
                None
            }
            Action::Submit if self.active => self.on_submit(),
            Action::SubmitFinished(outcome) => self.on_submit_finished(outcome),
            Action::Navigate(mode) => {
                self.active = mode == Mode::SignUp;
                None
            }
            _ => None,
        };
        Ok(followup)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        // Leave the last row for the status bar.
        let outer = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(area);

        let column = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Min(0),
                Constraint::Length(FORM_WIDTH),
                Constraint::Min(0),
            ],
        )
        .split(outer[0])[1];

        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // title
                Constraint::Length(3), // name
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(4), // checklist
                Constraint::Length(3), // confirm password
                Constraint::Length(1), // error message
                Constraint::Length(1), // submit hint
                Constraint::Length(1), // login link
                Constraint::Length(1), // account service line
                Constraint::Min(0),
            ],
        )
        .split(column);

        let title = Paragraph::new("Sign Up").style(Style::default().bold());
        f.render_widget(title, rows[0]);

        self.draw_field(f, Field::Name, rows[1]);
        self.draw_field(f, Field::Email, rows[2]);
        self.draw_field(f, Field::Password, rows[3]);

        let conditions = *self.form.conditions();
        let checklist = Paragraph::new(vec![
            self.checklist_line(conditions.length, "Minimum 8 characters"),
            self.checklist_line(conditions.uppercase, "At least one uppercase letter"),
            self.checklist_line(conditions.number, "At least one number"),
            self.checklist_line(conditions.special_char, "At least one special character"),
        ]);
        f.render_widget(checklist, rows[4]);

        self.draw_field(f, Field::ConfirmPassword, rows[5]);

        if let Some(message) = &self.error_message {
            let error = Paragraph::new(message.clone()).style(Style::default().fg(Color::Red));
            f.render_widget(error, rows[6]);
        }

        let hint = if self.submitting {
            Paragraph::new("Submitting...").style(Style::default().fg(Color::Yellow))
        } else {
            Paragraph::new("Enter: Sign Up | Tab: Next field | Esc: Quit")
                .style(Style::default().fg(Color::DarkGray))
        };
        f.render_widget(hint, rows[7]);

        let link = Paragraph::new("Already have an account? Press F2 to log in.")
            .style(Style::default().fg(Color::Blue));
        f.render_widget(link, rows[8]);

        if !self.config.endpoint.is_empty() {
            let service = Paragraph::new(format!("Account service: {}", self.config.endpoint))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(service, rows[9]);
        }

        Ok(())
    }
}
