// Advisor: recommendations, roadmap synthesis and the generate sequence.
// All LLM calls go through llm_client — the gateway is the only caller here.

pub mod gateway;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod roadmap;
