use serde::{Deserialize, Serialize};

/// One prompt sent to a chat model, and the reply once it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    prompt: String,
    model: String,
    reply: Option<String>,
}

impl Exchange {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            reply: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// `None` until the remote call has completed.
    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.reply.is_some()
    }

    pub fn complete_with(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }
}
