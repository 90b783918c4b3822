// ABOUTME: Conversation controller driving one prompt/response cycle against the model client
// Two phases: Idle and AwaitingResponse. Every failure ends back in Idle.

use thiserror::Error;
use tracing::{info, warn};

use crate::gemini::{ClientHandle, ConfigError, ModelClient};
use crate::models::{Message, ModelId};
use crate::session::Session;

pub const RESET_NOTICE: &str = "Chat has been reset!";
pub const GENERATION_ERROR_PREFIX: &str = "Error generating response: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter your Google Gemini API key in the settings panel.")]
    MissingApiKey,

    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Error configuring API: {0}")]
    Config(#[from] ConfigError),

    #[error("Still waiting for the previous response.")]
    Busy,
}

struct PendingRequest {
    handle: ClientHandle,
    model: ModelId,
    prompt: String,
}

pub struct ConversationController {
    client: Box<dyn ModelClient>,
    pending: Option<PendingRequest>,
}

impl ConversationController {
    pub fn new(client: Box<dyn ModelClient>) -> Self {
        Self {
            client,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::AwaitingResponse
        } else {
            Phase::Idle
        }
    }

    /// Validates preconditions, configures the client and appends the user message.
    /// On any error the transcript is left untouched and the phase stays Idle.
    pub fn begin(&mut self, session: &mut Session, prompt: &str) -> Result<(), SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::Busy);
        }
        if !session.has_api_key() {
            warn!("Session {}: prompt submitted without an API key", session.id);
            return Err(SubmitError::MissingApiKey);
        }
        if prompt.trim().is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }

        let handle = self.client.configure(&session.api_key).map_err(|e| {
            warn!("Session {}: client configuration failed: {}", session.id, e);
            SubmitError::Config(e)
        })?;

        session.push_message(Message::user(prompt));
        self.pending = Some(PendingRequest {
            handle,
            model: session.selected_model,
            prompt: prompt.to_string(),
        });
        info!(
            "Session {}: awaiting response from {}",
            session.id, session.selected_model
        );
        Ok(())
    }

    /// Runs the pending generation call and appends the assistant message,
    /// either the generated text or the formatted error. Returns false when
    /// nothing was pending.
    pub async fn complete(&mut self, session: &mut Session) -> bool {
        let Some(request) = self.pending.take() else {
            return false;
        };

        let content = match self
            .client
            .generate(&request.handle, request.model, &request.prompt)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Session {}: generation failed: {}", session.id, e);
                format!("{}{}", GENERATION_ERROR_PREFIX, e)
            }
        };

        session.push_message(Message::assistant(content));
        true
    }

    /// Full request cycle in one call
    pub async fn send(&mut self, session: &mut Session, prompt: &str) -> Result<(), SubmitError> {
        self.begin(session, prompt)?;
        self.complete(session).await;
        Ok(())
    }

    pub fn reset(&self, session: &mut Session) -> Result<&'static str, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::Busy);
        }
        session.clear_messages();
        info!("Session {}: transcript cleared", session.id);
        Ok(RESET_NOTICE)
    }

    /// Drops authentication only; transcript and API key survive
    pub fn logout(&self, session: &mut Session) {
        session.authenticated = false;
        info!("Session {} logged out", session.id);
    }
}
