use std::fmt;

/// Default target: the public OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Connection settings for the chat-completion endpoint.
///
/// Loaded once before the first request and never mutated afterwards; the
/// client takes its own copy at construction time.
#[derive(Clone, PartialEq, Eq)]
pub struct ExchangerConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl ExchangerConfig {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable          | Default                  | Purpose                  |
    /// |-------------------|--------------------------|--------------------------|
    /// | `OPENAI_API_KEY`  | none                     | Bearer credential        |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` | Any compatible server    |
    /// | `OPENAI_MODEL`    | `gpt-4`                  | Default model identifier |
    ///
    /// Blank values are treated as unset. A missing key is not an error here;
    /// the client reports it when a request is attempted.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let model = non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base = non_blank(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(non_blank(API_KEY_VAR), model, base)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ExchangerConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_MODEL, DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for ExchangerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
