use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::connector::config::{ExchangerConfig, API_KEY_VAR};
use crate::domain::DomainError;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API (and compatible endpoints
/// such as LM Studio or vLLM).
///
/// Implements [`ChatClient`] so [`crate::application::ExchangePromptUseCase`]
/// stays decoupled from transport and serialization details.
///
/// One call is one `POST {base_url}/v1/chat/completions`. There is no retry
/// and no request timeout. A missing credential fails the call before anything
/// is sent.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: Option<String>,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(config: &ExchangerConfig) -> Self {
        let url = format!(
            "{}{COMPLETIONS_PATH}",
            config.base_url().trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key().map(str::to_string),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_status(status: StatusCode, body: &str) -> DomainError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::authentication(
                format!("OpenAiChatClient: credential rejected ({status}): {body}"),
            ),
            _ => DomainError::service(format!("OpenAiChatClient: API returned {status}")),
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::authentication(format!("OpenAiChatClient: {API_KEY_VAR} is not set"))
        })?;

        let request = ApiRequest {
            model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("OpenAiChatClient: POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::service(format!("OpenAiChatClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(Self::map_status(status, &body));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::service(format!("OpenAiChatClient: failed to parse response: {e}"))
        })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::empty_response("OpenAiChatClient: response has no choices"))?;

        choice.message.content.ok_or_else(|| {
            DomainError::empty_response("OpenAiChatClient: first choice has no text content")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path_without_double_slash() {
        let config = ExchangerConfig::new(None, "gpt-4", "http://localhost:1234/");
        let client = OpenAiChatClient::new(&config);
        assert_eq!(client.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn request_serializes_single_user_message() {
        let request = ApiRequest {
            model: "gpt-4",
            messages: vec![ApiMessage {
                role: "user",
                content: "What is 2+2?",
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "What is 2+2?"}]
            })
        );
    }

    #[test]
    fn response_without_choices_field_parses_as_empty() {
        let parsed: ApiResponse = serde_json::from_str(r#"{"id": "chatcmpl-1"}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn map_401_and_403_to_authentication() {
        let err = OpenAiChatClient::map_status(StatusCode::UNAUTHORIZED, "Invalid API key");
        assert!(err.is_authentication_error());
        let err = OpenAiChatClient::map_status(StatusCode::FORBIDDEN, "Forbidden");
        assert!(err.is_authentication_error());
    }

    #[test]
    fn map_other_failures_to_service_error() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert!(
                OpenAiChatClient::map_status(status, "").is_service_error(),
                "{status} should map to a service error"
            );
        }
    }
}
