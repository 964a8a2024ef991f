use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{execute, parse_json};
use crate::config::NarrativeSettings;
use crate::data_source::SourceError;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest};
use crate::provider_policy::ProviderPolicy;
use crate::ProviderId;

const PROVIDER: ProviderId = ProviderId::Anthropic;
const API_VERSION: &str = "2023-06-01";

/// Anthropic Messages API adapter. One user turn in, first text block out.
#[derive(Clone)]
pub struct AnthropicAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    policy: ProviderPolicy,
}

impl AnthropicAdapter {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        api_key: impl Into<String>,
        policy: ProviderPolicy,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            policy,
        }
    }

    /// Send `prompt` as a single user message and return the trimmed text
    /// of the first text block. An empty answer is reported as
    /// insufficient data.
    pub fn complete(&self, prompt: &str, settings: &NarrativeSettings) -> Result<String, SourceError> {
        let body = MessagesRequest {
            model: &settings.model,
            max_tokens: settings.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };
        let body = serde_json::to_string(&body).map_err(|error| {
            SourceError::malformed(PROVIDER, format!("failed to encode anthropic request: {error}"))
        })?;

        let request = HttpRequest::post(format!("{}/v1/messages", self.policy.base_url))
            .with_auth(&HttpAuth::header("x-api-key", self.api_key.clone()))
            .with_header("anthropic-version", API_VERSION)
            .with_json_body(body)
            .with_timeout(self.policy.timeout);

        let response = execute(self.http_client.as_ref(), PROVIDER, request)?;
        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&response.body)
                .ok()
                .and_then(|body| body.error)
                .map(|error| error.message);
            let message = match detail {
                Some(detail) => format!("anthropic returned status {}: {detail}", response.status),
                None => format!("anthropic returned status {}", response.status),
            };
            return Err(match response.status {
                429 | 529 => SourceError::rate_limited(PROVIDER, message),
                400..=499 => SourceError::provider_error(PROVIDER, message),
                _ => SourceError::unavailable(PROVIDER, message),
            });
        }

        let payload: MessagesResponse = parse_json(PROVIDER, &response.body)?;
        payload
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| SourceError::insufficient_data(PROVIDER, "anthropic returned no text"))
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
