//! Status bar
//!
//! One line at the bottom: crate name and version on the left, the current
//! view and the most recent system or error message on the right.

use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{action::Action, mode::Mode, tui::Frame};

#[derive(Debug)]
pub struct StatusBar {
    mode: Mode,
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            message: None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            Mode::SignUp => "Sign Up",
            Mode::Login => "Log In",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Navigate(mode) => self.mode = mode,
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(message),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(area);

        let left = format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let right = match &self.message {
            Some(message) => format!("{} | {message}", self.mode_label()),
            None => self.mode_label().to_string(),
        };

        f.render_widget(Clear, layout[1]);
        let bar = Line::from(vec![
            Span::styled(left, Style::default().fg(Color::Gray).italic()),
            Span::raw("  "),
            Span::raw(right),
        ]);
        f.render_widget(
            Paragraph::new(bar).style(Style::default().bg(Color::Black)),
            layout[1],
        );
        Ok(())
    }
}
