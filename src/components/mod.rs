// ABOUTME: UI components for the TUI interface including login, settings, transcript and help

pub mod chat_input;
pub mod help;
pub mod layout;
pub mod login;
pub mod settings_panel;
pub mod transcript;

pub use chat_input::ChatInputComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use login::LoginComponent;
pub use settings_panel::SettingsPanelComponent;
pub use transcript::TranscriptComponent;

use ratatui::prelude::*;

use crate::app::NotificationType;

/// Replace every character of a secret with an asterisk
pub fn masked(input: &str) -> String {
    "*".repeat(input.chars().count())
}

pub fn notification_style(notification_type: NotificationType) -> Style {
    match notification_type {
        NotificationType::Success => Style::default().fg(Color::Green),
        NotificationType::Error => Style::default().fg(Color::Red),
        NotificationType::Info => Style::default().fg(Color::Cyan),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
