mod exchange_prompt;

pub use exchange_prompt::*;
