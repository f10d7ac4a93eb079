pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ExchangePromptUseCase};

pub use connector::{ExchangerConfig, OpenAiChatClient};

pub use domain::{DomainError, Exchange, UsageEntry, UsageReport};
