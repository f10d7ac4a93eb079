use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single user prompt to a chat model and receiving
/// the reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::ExchangePromptUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as the only `user` message to `model` and return the text
    /// of the first completion choice, unmodified.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, DomainError>;
}
