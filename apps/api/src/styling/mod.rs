// Styling engine: request model, few-shot example bank and selector,
// prompt assembly per strategy, and generation with streaming fallback.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod assembly;
pub mod example_bank;
pub mod example_selector;
pub mod handlers;
pub mod models;
pub mod planner;
pub mod prompts;
