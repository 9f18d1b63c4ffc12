//! Chat-completion client module
//!
//! The itinerary core only needs `complete(prompt) -> text`; this module
//! provides that seam and its OpenAI-compatible implementation.

use async_trait::async_trait;

mod credential;
mod error;
mod openai;
pub mod types;

pub use credential::{API_KEY_ENV, Credential};
pub use error::LlmError;
pub use openai::OpenAiClient;

/// Stateless single-turn completion
///
/// Each call is independent; no conversation state is kept between calls.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` as a single user message and return the reply text
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
