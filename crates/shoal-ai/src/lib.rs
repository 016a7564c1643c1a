//! Language-model collaborator for chat replies and alert text.
//!
//! Every failure of the upstream service — transport errors, bad status,
//! unparseable output, missing API key — is absorbed into deterministic
//! fallback text. Callers never see an error from this crate, so chat and
//! alert creation always succeed at the storage level.

use serde::{Deserialize, Serialize};
use tracing::warn;

use shoal_types::api::ChatReply;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4o";

const CHAT_SYSTEM_PROMPT: &str = "You are a multilingual AI assistant specialized in helping fishing communities worldwide. You provide information about:\n\
    1. Fishing regulations and laws\n\
    2. Weather and sea conditions\n\
    3. Sustainable fishing practices\n\
    4. Safety guidelines\n\
    5. Fish donation and food waste reduction\n\n\
    Be helpful, accurate, and culturally sensitive. If you don't know something, say so clearly.\n\n\
    Format your response as JSON with these fields:\n\
    - message: Your response to the user\n\
    - language: The language you're responding in\n\
    - intent: The main topic/intent of the user's question (weather, law, practice, donation, safety, general)";

const ALERT_SYSTEM_PROMPT: &str =
    "Generate a concise weather alert for fishing communities. Be specific about safety implications.";

const FALLBACK_REPLY: &str =
    "I'm experiencing technical difficulties. Please try again later.";

pub struct Assistant {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl Assistant {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        if api_key.is_none() {
            warn!("No API key configured; assistant will answer with fallback text");
        }
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Reads `OPENAI_API_KEY` and optional `OPENAI_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
        )
    }

    /// An assistant with no upstream: always takes the fallback branch.
    /// Used by tests exercising the degraded path.
    pub fn disabled() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Answer a chat message, preferring the hinted language.
    pub async fn reply(&self, message: &str, language_hint: &str) -> ChatReply {
        match self.try_reply(message, language_hint).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("Chat completion failed, using fallback: {err:#}");
                ChatReply {
                    message: FALLBACK_REPLY.to_string(),
                    language: language_hint.to_string(),
                    intent: "error".to_string(),
                }
            }
        }
    }

    /// Generate alert text for a weather condition at a location.
    pub async fn weather_alert(&self, location: &str, condition: &str) -> String {
        match self.try_weather_alert(location, condition).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Weather alert generation failed, using fallback: {err:#}");
                format!("Weather alert for {location}: {condition}")
            }
        }
    }

    async fn try_reply(
        &self,
        message: &str,
        language_hint: &str,
    ) -> Result<ChatReply, AssistantError> {
        let system = format!("{CHAT_SYSTEM_PROMPT}\n\nRespond in {language_hint} language.");
        let content = self
            .complete(CompletionRequest {
                model: MODEL,
                messages: vec![
                    Message { role: "system", content: system },
                    Message { role: "user", content: message.to_string() },
                ],
                response_format: Some(ResponseFormat { kind: "json_object" }),
                temperature: 0.7,
                max_tokens: 500,
            })
            .await?;

        Ok(parse_reply(&content, language_hint))
    }

    async fn try_weather_alert(
        &self,
        location: &str,
        condition: &str,
    ) -> Result<String, AssistantError> {
        self.complete(CompletionRequest {
            model: MODEL,
            messages: vec![
                Message { role: "system", content: ALERT_SYSTEM_PROMPT.to_string() },
                Message {
                    role: "user",
                    content: format!(
                        "Generate a weather alert for {location} with condition: {condition}"
                    ),
                },
            ],
            response_format: None,
            temperature: 0.3,
            max_tokens: 100,
        })
        .await
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_ref().ok_or(AssistantError::NotConfigured)?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: CompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AssistantError::EmptyResponse)
    }
}

/// Internal only — the public surface never returns this.
#[derive(Debug)]
enum AssistantError {
    NotConfigured,
    EmptyResponse,
    Http(reqwest::Error),
}

impl std::fmt::Display for AssistantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistantError::NotConfigured => write!(f, "no API key configured"),
            AssistantError::EmptyResponse => write!(f, "completion returned no choices"),
            AssistantError::Http(err) => write!(f, "request failed: {err}"),
        }
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::Http(err)
    }
}

/// The model is asked for a JSON object; tolerate missing fields the same
/// way a partially-filled object is tolerated upstream.
fn parse_reply(content: &str, language_hint: &str) -> ChatReply {
    let parsed: serde_json::Value = serde_json::from_str(content).unwrap_or_default();
    ChatReply {
        message: parsed["message"]
            .as_str()
            .unwrap_or("I'm sorry, I couldn't process your request. Please try again.")
            .to_string(),
        language: parsed["language"].as_str().unwrap_or(language_hint).to_string(),
        intent: parsed["intent"].as_str().unwrap_or("general").to_string(),
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: &'static str,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
