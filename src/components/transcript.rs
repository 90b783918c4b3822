// ABOUTME: Transcript renderer showing the session's messages oldest first with role tags
// Sticks to the bottom of the conversation unless the user has scrolled up

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;
use crate::models::{Message, Role};

pub struct TranscriptComponent {
    // Rows hidden above the viewport when stuck to the bottom, from the last render
    max_scroll: u16,
}

impl TranscriptComponent {
    pub fn new() -> Self {
        Self { max_scroll: 0 }
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(format!("Chat - {}", state.session.selected_model.display_name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let messages = state.session.messages();
        if messages.is_empty() && !state.awaiting_response {
            self.max_scroll = 0;
            let empty = Paragraph::new("No messages yet. Type a prompt below and press Enter.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // Rows are wrapped here rather than by the Paragraph so the row count
        // used for scrolling is exactly what gets drawn
        let inner = block.inner(area);
        let rows = Self::wrap_lines(
            Self::build_lines(messages, state.awaiting_response),
            inner.width,
        );
        let total = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        self.max_scroll = total.saturating_sub(inner.height);
        let top = self.max_scroll.saturating_sub(state.transcript_scroll);

        let paragraph = Paragraph::new(rows).block(block).scroll((top, 0));

        frame.render_widget(paragraph, area);
    }

    pub fn build_lines(messages: &[Message], awaiting_response: bool) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for message in messages {
            let color = match message.role() {
                Role::User => Color::Green,
                Role::Assistant => Color::Magenta,
            };
            lines.push(Line::from(Span::styled(
                format!("{}:", message.role().label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            for text_line in message.content().lines() {
                lines.push(Line::from(format!("  {}", text_line)));
            }
            lines.push(Line::from(""));
        }

        if awaiting_response {
            lines.push(Line::from(Span::styled(
                "Thinking...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )));
        }

        lines
    }

    /// Word-wraps every line to `width` columns, keeping each line's style.
    /// Words longer than a row are split across rows.
    pub fn wrap_lines(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(1));
        let mut rows = Vec::with_capacity(lines.len());

        for line in lines {
            if line.width() <= width {
                rows.push(line);
                continue;
            }
            let style = line.spans.first().map(|span| span.style).unwrap_or_default();
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            rows.extend(
                wrap_text(&text, width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, style))),
            );
        }

        rows
    }
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_inclusive(' ') {
        let word_text = word.trim_end_matches(' ');
        let visible = display_width(word_text);
        if row_width + visible > width {
            // Indentation alone is dropped rather than left as a blank row
            if row.trim_end().is_empty() {
                row.clear();
                row_width = 0;
            } else {
                push_row(&mut rows, &mut row, &mut row_width);
            }
        }

        if visible > width {
            let mut buf = [0u8; 4];
            for ch in word_text.chars() {
                let ch_width = display_width(ch.encode_utf8(&mut buf));
                if row_width + ch_width > width && !row.is_empty() {
                    push_row(&mut rows, &mut row, &mut row_width);
                }
                row.push(ch);
                row_width += ch_width;
            }
        } else {
            row.push_str(word_text);
            row_width += visible;
        }

        // Trailing spaces count towards the row but are trimmed when it is pushed
        let spaces = word.len() - word_text.len();
        row.extend(std::iter::repeat(' ').take(spaces));
        row_width += spaces;
    }

    if !row.trim_end().is_empty() || rows.is_empty() {
        push_row(&mut rows, &mut row, &mut row_width);
    }
    rows
}

fn push_row(rows: &mut Vec<String>, row: &mut String, row_width: &mut usize) {
    rows.push(row.trim_end().to_string());
    row.clear();
    *row_width = 0;
}

impl Default for TranscriptComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_messages_render_in_submission_order() {
        let messages = vec![
            Message::user("Hello"),
            Message::assistant("Hi!\nHow can I help?"),
        ];
        let lines = TranscriptComponent::build_lines(&messages, false);
        assert_eq!(
            plain(&lines),
            vec!["You:", "  Hello", "", "Gemini:", "  Hi!", "  How can I help?", ""]
        );
    }

    #[test]
    fn test_thinking_indicator_follows_transcript() {
        let lines = TranscriptComponent::build_lines(&[Message::user("Hello")], true);
        assert_eq!(plain(&lines).last().map(String::as_str), Some("Thinking..."));
    }

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        assert_eq!(wrap_text("alpha beta gamma", 11), vec!["alpha beta", "gamma"]);
        assert_eq!(wrap_text("  indented text", 10), vec!["  indented", "text"]);
    }

    #[test]
    fn test_wrap_splits_words_longer_than_a_row() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_keeps_empty_lines() {
        let rows = TranscriptComponent::wrap_lines(vec![Line::from(""), Line::from("x")], 10);
        assert_eq!(plain(&rows), vec!["", "x"]);
    }

    #[test]
    fn test_wrapped_rows_keep_style() {
        let lines = vec![Line::from(Span::styled(
            "Thinking about it",
            Style::default().fg(Color::Yellow),
        ))];
        let rows = TranscriptComponent::wrap_lines(lines, 9);
        assert_eq!(plain(&rows), vec!["Thinking", "about it"]);
        assert!(rows
            .iter()
            .all(|row| row.spans[0].style.fg == Some(Color::Yellow)));
    }

    #[test]
    fn test_rows_never_exceed_width() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
        for width in 1..20 {
            for row in wrap_text(text, width) {
                assert!(display_width(&row) <= width, "{:?} wider than {}", row, width);
            }
        }
    }
}
