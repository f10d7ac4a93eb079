use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{DomainError, Exchange};

/// Use case for a single prompt/reply round trip.
pub struct ExchangePromptUseCase {
    client: Arc<dyn ChatClient>,
}

impl ExchangePromptUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, exchange: Exchange) -> Result<Exchange, DomainError> {
        if exchange.prompt().trim().is_empty() {
            return Err(DomainError::invalid_input("prompt must not be empty"));
        }
        if exchange.model().trim().is_empty() {
            return Err(DomainError::invalid_input("model identifier must not be empty"));
        }

        info!("Sending prompt to model {}", exchange.model());
        debug!("Prompt: {}", exchange.prompt());

        let reply = self
            .client
            .complete(exchange.model(), exchange.prompt())
            .await?;

        debug!("Received reply ({} bytes)", reply.len());

        Ok(exchange.complete_with(reply))
    }
}
