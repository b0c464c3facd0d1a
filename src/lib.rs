//! Server-side chat proxy for the Chomp Chomp assistant.
//!
//! Accepts chat requests over HTTP, injects a fixed system instruction and
//! generation parameters, forwards the conversation to Gemini, and relays the
//! reply. Exists so the Gemini API key never reaches the client.

pub mod ai;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
