// ABOUTME: Per-session context object carrying auth flag, API key, selected model and transcript

use crate::models::{Message, ModelId};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    /// Only used to tag log lines
    pub id: Uuid,
    pub authenticated: bool,
    pub api_key: String,
    pub selected_model: ModelId,
    messages: Vec<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ModelId::default())
    }
}

impl Session {
    pub fn new(selected_model: ModelId) -> Self {
        Self {
            id: Uuid::new_v4(),
            authenticated: false,
            api_key: String::new(),
            selected_model,
            messages: Vec::new(),
        }
    }

    /// Transcript in submission order, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
