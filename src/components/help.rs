// ABOUTME: Help overlay component displaying keyboard shortcuts and commands

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

use super::centered_rect;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let section = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Chat:").style(section),
            ListItem::new("  Enter       Send message"),
            ListItem::new("  PgUp/PgDn   Scroll transcript"),
            ListItem::new(""),
            ListItem::new("Settings:").style(section),
            ListItem::new("  Tab         Next field (message, API key, model)"),
            ListItem::new("  Shift+Tab   Previous field"),
            ListItem::new("  j/k ↑/↓     Choose model"),
            ListItem::new("  Esc         Back to message input"),
            ListItem::new(""),
            ListItem::new("Session Actions:").style(section),
            ListItem::new("  Ctrl+R      Reset chat"),
            ListItem::new("  Ctrl+L      Logout"),
            ListItem::new(""),
            ListItem::new("General:").style(section),
            ListItem::new("  F1          Toggle this help"),
            ListItem::new("  Ctrl+C      Quit application"),
        ];

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press F1 or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
