// ABOUTME: Login view with a masked password field shown until the session is authenticated

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{centered_rect, masked};
use crate::app::AppState;

pub struct LoginComponent;

impl LoginComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);

        let outer = Block::default()
            .title("Gemini Chat Login")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(popup);
        frame.render_widget(outer, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Password field
                Constraint::Length(2), // Hint
                Constraint::Min(0),    // About
            ])
            .split(inner);

        let password = Paragraph::new(masked(&state.password_input)).block(
            Block::default()
                .title("Password")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(password, chunks[0]);

        let hint = match &state.notification {
            Some(notification) => Line::from(Span::styled(
                notification.message.clone(),
                super::notification_style(notification.notification_type),
            )),
            None => Line::from(Span::styled(
                "Press Enter to log in, Esc to quit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[1]);

        let about = vec![
            Line::from(Span::styled(
                "About",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(
                "This is a password-protected chatbot powered by Google Gemini. Enter the password to access.",
            ),
        ];
        frame.render_widget(Paragraph::new(about).wrap(Wrap { trim: true }), chunks[2]);
    }
}

impl Default for LoginComponent {
    fn default() -> Self {
        Self::new()
    }
}
