// ABOUTME: Main application structure and state management for the TUI

pub mod controller;
pub mod events;
pub mod notification;
pub mod state;

pub use controller::{ConversationController, Phase, SubmitError};
pub use events::{AppEvent, EventHandler};
pub use notification::{Notification, NotificationType};
pub use state::{App, AppState, AsyncAction, Focus, View};
