// ABOUTME: Session store module holding per-user chat state for one interactive session
// Nothing here is persisted; a session lives exactly as long as the process

pub mod store;

pub use store::Session;
