//! Login view
//!
//! The navigation target after a successful registration. Account sign-in
//! itself is out of scope; this view acknowledges the new account and offers
//! the way back.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{action::Action, mode::Mode, tui::Frame};

#[derive(Debug, Default)]
pub struct Login {
    active: bool,
    registration_complete: bool,
}

impl Login {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows_acknowledgment(&self) -> bool {
        self.registration_complete
    }
}

impl Component for Login {
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.active {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::F(2) => Some(Action::Navigate(Mode::SignUp)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // Only an actual account creation earns the acknowledgment;
            // plain navigation does not.
            Action::SignupComplete => self.registration_complete = true,
            Action::Navigate(mode) => {
                self.active = mode == Mode::Login;
                if !self.active {
                    self.registration_complete = false;
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        let outer = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(area);

        let column = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Min(0),
                Constraint::Length(48),
                Constraint::Min(0),
            ],
        )
        .split(outer[0])[1];

        let mut lines = vec![Line::from(Span::styled("Log In", Style::default().bold()))];
        if self.registration_complete {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Registration successful! Log in with your new account.",
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "F2: Back to sign-up | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        )));

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), column);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ignores_keys_until_navigated_to() {
        let mut login = Login::new();
        let action = login
            .handle_key_events(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .expect("key handled");
        assert_eq!(action, None);

        login.update(Action::Navigate(Mode::Login)).expect("update");
        let action = login
            .handle_key_events(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .expect("key handled");
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn navigating_back_to_signup_deactivates() {
        let mut login = Login::new();
        login.update(Action::Navigate(Mode::Login)).expect("update");
        login
            .update(Action::Navigate(Mode::SignUp))
            .expect("update");
        let action = login
            .handle_key_events(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE))
            .expect("key handled");
        assert_eq!(action, None);
    }

    fn rendered_text(login: &mut Login) -> String {
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = ratatui::Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| login.draw(f, f.area()).expect("draw"))
            .expect("frame");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn plain_navigation_renders_no_acknowledgment() {
        let mut login = Login::new();
        login.update(Action::Navigate(Mode::Login)).expect("update");
        assert!(!login.shows_acknowledgment());
        let text = rendered_text(&mut login);
        assert!(
            !text.contains("Registration successful"),
            "acknowledgment rendered without a completed registration"
        );
    }

    #[test]
    fn completed_registration_renders_the_acknowledgment() {
        let mut login = Login::new();
        login.update(Action::SignupComplete).expect("update");
        login.update(Action::Navigate(Mode::Login)).expect("update");
        assert!(login.shows_acknowledgment());
        let text = rendered_text(&mut login);
        assert!(text.contains("Registration successful"));
    }

    #[test]
    fn acknowledgment_clears_when_leaving_the_view() {
        let mut login = Login::new();
        login.update(Action::SignupComplete).expect("update");
        login.update(Action::Navigate(Mode::Login)).expect("update");
        login
            .update(Action::Navigate(Mode::SignUp))
            .expect("update");
        login.update(Action::Navigate(Mode::Login)).expect("update");
        assert!(!login.shows_acknowledgment());
    }
}
