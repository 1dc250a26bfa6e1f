// Assistant endpoints: thin relays from HTTP requests to the generative-text provider.
// All provider calls go through llm_client::TextGenerator; prompts live in prompts.rs.

pub mod handlers;
pub mod markdown;
pub mod prompts;
