use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::prompt::ChatCompletionRequest;

/// A remote chat-completion capability. Returns the text of the first
/// choice, untouched.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, AnalysisError>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Pull the first choice's content out of a raw response body.
pub(crate) fn parse_completion(body: &str) -> Result<String, AnalysisError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(AnalysisError::EmptyCompletion)
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, AnalysisError> {
        let start = Instant::now();

        debug!(model = %request.model, max_tokens = request.max_tokens, "Sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            status = status.as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Completion endpoint responded"
        );

        if !status.is_success() {
            warn!(status = status.as_u16(), "Completion endpoint returned an error");
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_verbatim() {
        let body = r###"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "## 1. 도로 상태 분석\n  균열 있음  "}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }"###;
        assert_eq!(parse_completion(body).unwrap(), "## 1. 도로 상태 분석\n  균열 있음  ");
    }

    #[test]
    fn no_choices_is_empty_completion() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyCompletion));
    }

    #[test]
    fn null_content_is_empty_completion() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(matches!(parse_completion(body), Err(AnalysisError::EmptyCompletion)));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        assert!(matches!(parse_completion("<html>"), Err(AnalysisError::Decode(_))));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = OpenAiClient::new("sk-test", "http://localhost:1234/v1");
        assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
    }
}
