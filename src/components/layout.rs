// ABOUTME: Main layout component switching between login and chat views with a bottom status bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::{AppState, View};
use super::{
    notification_style, ChatInputComponent, HelpComponent, LoginComponent,
    SettingsPanelComponent, TranscriptComponent,
};

const MENU_TEXT: &str = "[Enter]send [Tab]settings [Ctrl+R]reset [Ctrl+L]logout [F1]help [Ctrl+C]quit";

pub struct LayoutComponent {
    login: LoginComponent,
    settings: SettingsPanelComponent,
    transcript: TranscriptComponent,
    chat_input: ChatInputComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            login: LoginComponent::new(),
            settings: SettingsPanelComponent::new(),
            transcript: TranscriptComponent::new(),
            chat_input: ChatInputComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        if state.current_view() == View::Login {
            self.login.render(frame, frame.size(), state);
        } else {
            self.render_chat(frame, state);
        }

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    /// Furthest the transcript can scroll up at the last rendered size
    pub fn transcript_max_scroll(&self) -> u16 {
        self.transcript.max_scroll()
    }

    fn render_chat(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom status bar
            ])
            .split(frame.size());

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(36), // Settings panel
                Constraint::Min(0),     // Conversation
            ])
            .split(main_chunks[0]);

        let chat_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Transcript
                Constraint::Length(3), // Input
            ])
            .split(content_chunks[1]);

        self.settings.render(frame, content_chunks[0], state);
        self.transcript.render(frame, chat_chunks[0], state);
        self.chat_input.render(frame, chat_chunks[1], state);
        self.render_status_bar(frame, main_chunks[1], state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let (text, style) = match &state.notification {
            Some(notification) => (
                notification.message.as_str(),
                notification_style(notification.notification_type),
            ),
            None => (MENU_TEXT, Style::default().fg(Color::Yellow)),
        };

        let bar = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(style)
            .alignment(Alignment::Center);

        frame.render_widget(bar, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
