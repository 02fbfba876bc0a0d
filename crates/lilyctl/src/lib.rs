//! Lily Control - CLI host for the Lily shopping assistant.
//!
//! Owns everything the core treats as a collaborator: catalog file
//! loading, configuration, the LLM fallback client, and terminal
//! rendering of resolved intents.

pub mod config;
pub mod llm;
pub mod loader;
pub mod render;
