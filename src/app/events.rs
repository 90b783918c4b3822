// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{AppState, AsyncAction, Focus, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Text entry in whichever field has focus
    InputChar(char),
    Backspace,
    Submit,
    // Chat view navigation
    NextFocus,
    PreviousFocus,
    FocusChat,
    NextModel,
    PreviousModel,
    ScrollUp,
    ScrollDown,
    // Session actions
    ResetChat,
    Logout,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::F(1) | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if key_event.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }

        match state.current_view() {
            View::Login => Self::handle_login_keys(key_event, ctrl),
            View::Chat => Self::handle_chat_keys(key_event, ctrl, state.focus),
        }
    }

    fn handle_login_keys(key_event: KeyEvent, ctrl: bool) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char(ch) if !ctrl => Some(AppEvent::InputChar(ch)),
            _ => None,
        }
    }

    fn handle_chat_keys(key_event: KeyEvent, ctrl: bool, focus: Focus) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('r') if ctrl => return Some(AppEvent::ResetChat),
            KeyCode::Char('l') if ctrl => return Some(AppEvent::Logout),
            KeyCode::Tab => return Some(AppEvent::NextFocus),
            KeyCode::BackTab => return Some(AppEvent::PreviousFocus),
            KeyCode::Esc => return Some(AppEvent::FocusChat),
            KeyCode::PageUp => return Some(AppEvent::ScrollUp),
            KeyCode::PageDown => return Some(AppEvent::ScrollDown),
            _ => {}
        }

        match focus {
            Focus::ChatInput => match key_event.code {
                KeyCode::Enter => Some(AppEvent::Submit),
                KeyCode::Backspace => Some(AppEvent::Backspace),
                KeyCode::Char(ch) if !ctrl => Some(AppEvent::InputChar(ch)),
                _ => None,
            },
            Focus::ApiKey => match key_event.code {
                KeyCode::Enter => Some(AppEvent::FocusChat),
                KeyCode::Backspace => Some(AppEvent::Backspace),
                KeyCode::Char(ch) if !ctrl => Some(AppEvent::InputChar(ch)),
                _ => None,
            },
            Focus::ModelSelector => match key_event.code {
                KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousModel),
                KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextModel),
                KeyCode::Enter => Some(AppEvent::FocusChat),
                _ => None,
            },
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::InputChar(ch) => state.push_char(ch),
            AppEvent::Backspace => state.backspace(),
            AppEvent::Submit => {
                // Mark for async processing on the next tick
                let action = match state.current_view() {
                    View::Login => AsyncAction::Login,
                    View::Chat => AsyncAction::SubmitPrompt,
                };
                state.queue_action(action);
            }
            AppEvent::NextFocus => state.next_focus(),
            AppEvent::PreviousFocus => state.previous_focus(),
            AppEvent::FocusChat => state.focus = Focus::ChatInput,
            AppEvent::NextModel => state.select_next_model(),
            AppEvent::PreviousModel => state.select_previous_model(),
            AppEvent::ScrollUp => state.scroll_up(),
            AppEvent::ScrollDown => state.scroll_down(),
            AppEvent::ResetChat => state.queue_action(AsyncAction::ResetChat),
            AppEvent::Logout => state.queue_action(AsyncAction::Logout),
        }
    }
}
