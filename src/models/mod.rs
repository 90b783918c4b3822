// ABOUTME: Core data models for the chat transcript and the fixed set of selectable models

pub mod message;
pub mod model_id;

pub use message::{Message, Role};
pub use model_id::{ModelId, UnknownModel};
