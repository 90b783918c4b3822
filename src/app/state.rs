// ABOUTME: Application state management and view switching logic
// AppState is what components render; App owns the collaborators that mutate it

use tracing::{debug, info};

use crate::app::controller::{ConversationController, SubmitError};
use crate::app::notification::Notification;
use crate::auth::Authenticator;
use crate::config::AppConfig;
use crate::gemini::{GeminiClient, ModelClient};
use crate::models::ModelId;
use crate::session::Session;

const SCROLL_STEP: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ChatInput,
    ApiKey,
    ModelSelector,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::ChatInput => Focus::ApiKey,
            Focus::ApiKey => Focus::ModelSelector,
            Focus::ModelSelector => Focus::ChatInput,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::ChatInput => Focus::ModelSelector,
            Focus::ApiKey => Focus::ChatInput,
            Focus::ModelSelector => Focus::ApiKey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncAction {
    Login,
    SubmitPrompt,
    AwaitResponse,
    ResetChat,
    Logout,
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub focus: Focus,
    pub password_input: String,
    pub chat_input: String,
    pub notification: Option<Notification>,
    pub pending_async_action: Option<AsyncAction>,
    // Mirrors the controller phase so components can show a spinner
    pub awaiting_response: bool,
    /// Lines scrolled up from the bottom of the transcript
    pub transcript_scroll: u16,
    // Upper bound for transcript_scroll, refreshed after every draw
    pub transcript_max_scroll: u16,
    pub help_visible: bool,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ModelId::default())
    }
}

impl AppState {
    pub fn new(default_model: ModelId) -> Self {
        Self {
            session: Session::new(default_model),
            focus: Focus::ChatInput,
            password_input: String::new(),
            chat_input: String::new(),
            notification: None,
            pending_async_action: None,
            awaiting_response: false,
            transcript_scroll: 0,
            transcript_max_scroll: 0,
            help_visible: false,
            should_quit: false,
        }
    }

    pub fn current_view(&self) -> View {
        if self.session.authenticated {
            View::Chat
        } else {
            View::Login
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn clear_expired_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    /// Queue work for the next tick. A pending action is never overwritten,
    /// so an in-flight response cannot be dropped by a second submit.
    pub fn queue_action(&mut self, action: AsyncAction) {
        let pending = self.pending_async_action;
        match pending {
            None => self.pending_async_action = Some(action),
            Some(_) if self.awaiting_response => {
                self.notify(Notification::error(SubmitError::Busy.to_string()));
            }
            Some(pending) => debug!("Ignoring {:?}, {:?} already queued", action, pending),
        }
    }

    fn active_input(&mut self) -> Option<&mut String> {
        match (self.current_view(), self.focus) {
            (View::Login, _) => Some(&mut self.password_input),
            (View::Chat, Focus::ChatInput) => Some(&mut self.chat_input),
            (View::Chat, Focus::ApiKey) => Some(&mut self.session.api_key),
            (View::Chat, Focus::ModelSelector) => None,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if let Some(input) = self.active_input() {
            input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.active_input() {
            input.pop();
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn select_next_model(&mut self) {
        self.session.selected_model = self.session.selected_model.next();
        info!("Selected model {}", self.session.selected_model);
    }

    pub fn select_previous_model(&mut self) {
        self.session.selected_model = self.session.selected_model.previous();
        info!("Selected model {}", self.session.selected_model);
    }

    pub fn scroll_up(&mut self) {
        self.transcript_scroll = self
            .transcript_scroll
            .saturating_add(SCROLL_STEP)
            .min(self.transcript_max_scroll);
    }

    pub fn scroll_down(&mut self) {
        self.transcript_scroll = self.transcript_scroll.saturating_sub(SCROLL_STEP);
    }

    /// Records how far the rendered transcript can scroll; a resize that
    /// shrinks the limit pulls the current offset back with it
    pub fn set_transcript_max_scroll(&mut self, max_scroll: u16) {
        self.transcript_max_scroll = max_scroll;
        self.transcript_scroll = self.transcript_scroll.min(max_scroll);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

pub struct App {
    pub state: AppState,
    controller: ConversationController,
    authenticator: Authenticator,
    ui_refresh_needed: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(
            Box::new(GeminiClient::new(config.api_base_url.clone())),
            Authenticator::default(),
            config.default_model,
        )
    }

    pub fn with_parts(
        client: Box<dyn ModelClient>,
        authenticator: Authenticator,
        default_model: ModelId,
    ) -> Self {
        Self {
            state: AppState::new(default_model),
            controller: ConversationController::new(client),
            authenticator,
            ui_refresh_needed: false,
        }
    }

    pub fn controller(&self) -> &ConversationController {
        &self.controller
    }

    pub async fn tick(&mut self) {
        self.state.clear_expired_notification();
        self.process_async_action().await;
    }

    /// Returns true once after any controller transition; the caller redraws
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.ui_refresh_needed)
    }

    pub async fn process_async_action(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };

        match action {
            AsyncAction::Login => {
                let password = std::mem::take(&mut self.state.password_input);
                match self.authenticator.login(&mut self.state.session, &password) {
                    Ok(()) => {
                        self.state.focus = Focus::ChatInput;
                        self.state.notification = None;
                    }
                    Err(e) => self.state.notify(Notification::error(e.to_string())),
                }
            }
            AsyncAction::SubmitPrompt => {
                let prompt = self.state.chat_input.clone();
                match self.controller.begin(&mut self.state.session, &prompt) {
                    Ok(()) => {
                        self.state.chat_input.clear();
                        self.state.transcript_scroll = 0;
                        self.state.awaiting_response = true;
                        self.state.pending_async_action = Some(AsyncAction::AwaitResponse);
                    }
                    Err(SubmitError::EmptyPrompt) => {}
                    Err(e) => self.state.notify(Notification::error(e.to_string())),
                }
            }
            AsyncAction::AwaitResponse => {
                self.controller.complete(&mut self.state.session).await;
                self.state.awaiting_response = false;
                self.state.transcript_scroll = 0;
            }
            AsyncAction::ResetChat => match self.controller.reset(&mut self.state.session) {
                Ok(notice) => {
                    self.state.transcript_scroll = 0;
                    self.state.notify(Notification::success(notice));
                }
                Err(e) => self.state.notify(Notification::error(e.to_string())),
            },
            AsyncAction::Logout => {
                self.controller.logout(&mut self.state.session);
                self.state.password_input.clear();
                self.state.focus = Focus::ChatInput;
                self.state.help_visible = false;
                self.state.notify(Notification::info("Logged out."));
            }
        }

        self.ui_refresh_needed = true;
    }
}
