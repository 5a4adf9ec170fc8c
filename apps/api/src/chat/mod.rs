// Profile-primed chat assistant.
// Sessions are opened in the background after each successful generation;
// all model traffic goes through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;
