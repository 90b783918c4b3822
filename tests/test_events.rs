// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gemini_chat::app::{AppEvent, AppState, AsyncAction, EventHandler, Focus};
use gemini_chat::models::ModelId;

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn logged_in_state() -> AppState {
    let mut state = AppState::default();
    state.session.authenticated = true;
    state
}

fn press(state: &mut AppState, key: KeyEvent) {
    if let Some(event) = EventHandler::handle_key_event(key, state) {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        press(state, create_key_event(KeyCode::Char(ch)));
    }
}

#[test]
fn test_ctrl_c_quits_from_every_view() {
    let mut state = AppState::default();
    assert_eq!(
        EventHandler::handle_key_event(ctrl('c'), &state),
        Some(AppEvent::Quit)
    );

    state.session.authenticated = true;
    assert_eq!(
        EventHandler::handle_key_event(ctrl('c'), &state),
        Some(AppEvent::Quit)
    );
}

#[test]
fn test_login_view_typing_fills_password() {
    let mut state = AppState::default();
    type_text(&mut state, "passwore");
    press(&mut state, create_key_event(KeyCode::Backspace));
    type_text(&mut state, "d");

    assert_eq!(state.password_input, "password");
    assert!(state.chat_input.is_empty());
}

#[test]
fn test_login_enter_queues_login() {
    let mut state = AppState::default();
    press(&mut state, create_key_event(KeyCode::Enter));
    assert_eq!(state.pending_async_action, Some(AsyncAction::Login));
}

#[test]
fn test_login_esc_quits() {
    let mut state = AppState::default();
    press(&mut state, create_key_event(KeyCode::Esc));
    assert!(state.should_quit);
}

#[test]
fn test_chat_enter_queues_prompt() {
    let mut state = logged_in_state();
    type_text(&mut state, "Hello");
    press(&mut state, create_key_event(KeyCode::Enter));

    assert_eq!(state.chat_input, "Hello");
    assert_eq!(state.pending_async_action, Some(AsyncAction::SubmitPrompt));
}

#[test]
fn test_tab_cycles_focus_and_api_key_is_editable() {
    let mut state = logged_in_state();
    assert_eq!(state.focus, Focus::ChatInput);

    press(&mut state, create_key_event(KeyCode::Tab));
    assert_eq!(state.focus, Focus::ApiKey);
    type_text(&mut state, "AIza-key");
    assert_eq!(state.session.api_key, "AIza-key");

    press(&mut state, create_key_event(KeyCode::Tab));
    assert_eq!(state.focus, Focus::ModelSelector);

    press(&mut state, create_key_event(KeyCode::Tab));
    assert_eq!(state.focus, Focus::ChatInput);

    press(&mut state, create_key_event(KeyCode::BackTab));
    assert_eq!(state.focus, Focus::ModelSelector);
}

#[test]
fn test_model_selector_navigation() {
    let mut state = logged_in_state();
    state.focus = Focus::ModelSelector;

    press(&mut state, create_key_event(KeyCode::Down));
    assert_eq!(state.session.selected_model, ModelId::Gemini10ProVision);

    press(&mut state, create_key_event(KeyCode::Char('j')));
    assert_eq!(state.session.selected_model, ModelId::Gemini15Pro);

    press(&mut state, create_key_event(KeyCode::Up));
    press(&mut state, create_key_event(KeyCode::Char('k')));
    press(&mut state, create_key_event(KeyCode::Char('k')));
    assert_eq!(state.session.selected_model, ModelId::Gemini15Flash);

    // Typing does not leak into any text field while the selector has focus
    assert!(state.chat_input.is_empty());
}

#[test]
fn test_reset_and_logout_shortcuts() {
    let state = logged_in_state();
    assert_eq!(
        EventHandler::handle_key_event(ctrl('r'), &state),
        Some(AppEvent::ResetChat)
    );
    assert_eq!(
        EventHandler::handle_key_event(ctrl('l'), &state),
        Some(AppEvent::Logout)
    );
}

#[test]
fn test_help_visible_only_responds_to_f1_and_esc() {
    let mut state = logged_in_state();
    state.help_visible = true;

    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::F(1)), &state).is_some());
    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &state).is_some());
    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::Char('j')), &state).is_none());
}

#[test]
fn test_process_help_toggle_event() {
    let mut state = AppState::default();
    assert!(!state.help_visible);

    press(&mut state, create_key_event(KeyCode::F(1)));
    assert!(state.help_visible);

    press(&mut state, create_key_event(KeyCode::Esc));
    assert!(!state.help_visible);
}

#[test]
fn test_page_keys_scroll_transcript() {
    let mut state = logged_in_state();
    state.set_transcript_max_scroll(12);
    press(&mut state, create_key_event(KeyCode::PageUp));
    press(&mut state, create_key_event(KeyCode::PageUp));
    assert_eq!(state.transcript_scroll, 10);

    press(&mut state, create_key_event(KeyCode::PageDown));
    press(&mut state, create_key_event(KeyCode::PageDown));
    press(&mut state, create_key_event(KeyCode::PageDown));
    assert_eq!(state.transcript_scroll, 0);
}

#[test]
fn test_scroll_up_stops_at_top_of_transcript() {
    let mut state = logged_in_state();
    state.set_transcript_max_scroll(7);
    for _ in 0..20 {
        press(&mut state, create_key_event(KeyCode::PageUp));
    }
    assert_eq!(state.transcript_scroll, 7);

    // A single PageDown moves the view again
    press(&mut state, create_key_event(KeyCode::PageDown));
    assert_eq!(state.transcript_scroll, 2);
}

#[test]
fn test_shrinking_scroll_limit_clamps_offset() {
    let mut state = logged_in_state();
    state.set_transcript_max_scroll(30);
    press(&mut state, create_key_event(KeyCode::PageUp));
    press(&mut state, create_key_event(KeyCode::PageUp));
    state.set_transcript_max_scroll(4);
    assert_eq!(state.transcript_scroll, 4);
}

#[test]
fn test_unknown_key_returns_none() {
    let state = logged_in_state();
    assert!(EventHandler::handle_key_event(create_key_event(KeyCode::F(5)), &state).is_none());
    assert!(EventHandler::handle_key_event(ctrl('x'), &state).is_none());
}
