// ABOUTME: Library crate for Gemini Chat exposing public API for testing and external use

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod gemini;
pub mod models;
pub mod session;
