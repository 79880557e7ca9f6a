// AI recommendations: ranks the directory against a free-text query through
// the generative-language service, and polishes raw bios into summaries.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod requester;
pub mod summary;
