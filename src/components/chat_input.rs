// ABOUTME: Single-line prompt input box under the transcript

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppState, Focus};

pub struct ChatInputComponent;

impl ChatInputComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::ChatInput;
        let text = if state.chat_input.is_empty() {
            Line::from(Span::styled(
                "Type your message here...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(state.chat_input.as_str())
        };

        let (offset, cursor) =
            Self::viewport(text_width(&state.chat_input), area.width.saturating_sub(2));

        let input = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Message")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::Gray })),
            )
            .scroll((0, offset));
        frame.render_widget(input, area);

        if focused && !state.help_visible {
            frame.set_cursor(area.x.saturating_add(1).saturating_add(cursor), area.y + 1);
        }
    }

    /// Horizontal scroll offset and cursor column for input of `input_width`
    /// columns in a box `inner_width` wide. The tail of the input stays in
    /// view with one free column for the cursor.
    pub fn viewport(input_width: u16, inner_width: u16) -> (u16, u16) {
        let visible = inner_width.saturating_sub(1);
        let offset = input_width.saturating_sub(visible);
        (offset, input_width - offset)
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

impl Default for ChatInputComponent {
    fn default() -> Self {
        Self::new()
    }
}
