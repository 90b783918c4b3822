// ABOUTME: Settings sidebar with the API key field, model selector and session action hints

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::masked;
use crate::app::{AppState, Focus};
use crate::models::ModelId;

pub struct SettingsPanelComponent {
    model_list_state: ListState,
}

impl Default for SettingsPanelComponent {
    fn default() -> Self {
        let mut model_list_state = ListState::default();
        model_list_state.select(Some(0));
        Self { model_list_state }
    }
}

impl SettingsPanelComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn border_color(focused: bool) -> Color {
        if focused {
            Color::Yellow
        } else {
            Color::Gray
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let outer = Block::default()
            .title("Settings")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let model_rows = u16::try_from(ModelId::ALL.len()).unwrap_or(4);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // API key
                Constraint::Length(model_rows + 2), // Models
                Constraint::Min(0),                 // Actions
            ])
            .split(inner);

        let key_text = if state.session.api_key.is_empty() {
            Span::styled("(not set)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(masked(&state.session.api_key))
        };
        let api_key = Paragraph::new(Line::from(key_text)).block(
            Block::default()
                .title("Google Gemini API Key")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Self::border_color(state.focus == Focus::ApiKey))),
        );
        frame.render_widget(api_key, chunks[0]);

        let items: Vec<ListItem> = ModelId::ALL
            .iter()
            .map(|model| ListItem::new(model.display_name()))
            .collect();
        let selected = ModelId::ALL
            .iter()
            .position(|m| *m == state.session.selected_model);
        self.model_list_state.select(selected);

        let models = List::new(items)
            .block(
                Block::default()
                    .title("Select Model")
                    .borders(Borders::ALL)
                    .border_style(
                        Style::default()
                            .fg(Self::border_color(state.focus == Focus::ModelSelector)),
                    ),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        frame.render_stateful_widget(models, chunks[1], &mut self.model_list_state);

        let actions = vec![
            Line::from(vec![
                Span::styled("Ctrl+R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" Reset Chat"),
            ]),
            Line::from(vec![
                Span::styled("Ctrl+L", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" Logout"),
            ]),
        ];
        frame.render_widget(Paragraph::new(actions), chunks[2]);
    }
}
