//! Chat-completion client
//!
//! Sends the document text and the user's prompt to an OpenAI-compatible
//! endpoint in forced-JSON mode and returns the model's JSON answer.
//! Failures never escape [`CompletionClient::complete`]: they come back as
//! error-shaped JSON so the caller always has something to print.

use crate::config::Config;
use crate::error::{CompletionError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// One message of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Forces the model to answer with a JSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request body for the chat completions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub response_format: ResponseFormat,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// System instruction with the user's prompt embedded
pub fn system_instruction(prompt: &str) -> String {
    format!(
        "You are a helpful assistant that extracts specific information from documents. \
         The user wants you to: {}\n\n\
         Please return your response as valid JSON only, with no additional text or formatting.",
        prompt
    )
}

/// User message carrying the document text
pub fn document_message(text: &str) -> String {
    format!("Here is the document text:\n\n{}", text)
}

/// Blocking client for a single chat-completion call
pub struct CompletionClient {
    http: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl CompletionClient {
    /// Create a client for `api_key` using the endpoint and model from `config`
    pub fn new(api_key: impl Into<String>, config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_key: api_key.into(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for `text` and `prompt`
    pub fn build_request(&self, text: &str, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction(prompt),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: document_message(text),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Send the request and return the model's JSON, or why it failed
    pub fn try_complete(&self, text: &str, prompt: &str) -> std::result::Result<Value, CompletionError> {
        let request = self.build_request(text, prompt);
        info!("Sending {} characters to {} ({})", text.chars().count(), self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!("Received HTTP {} with {} bytes", status, body.len());

        if status != StatusCode::OK {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Value = serde_json::from_str(&body).map_err(|e| CompletionError::Parse {
            reason: e.to_string(),
            raw_response: Value::String(body.clone()),
        })?;

        parse_envelope(&envelope).map_err(|reason| CompletionError::Parse {
            reason,
            raw_response: envelope,
        })
    }

    /// Like [`try_complete`](Self::try_complete), with failures folded into
    /// an `{"error": ...}` object
    pub fn complete(&self, text: &str, prompt: &str) -> Value {
        self.try_complete(text, prompt).unwrap_or_else(|err| {
            warn!("Completion failed: {}", err);
            err.to_json()
        })
    }
}

/// Pull `choices[0].message.content` out of the envelope and parse it as JSON
fn parse_envelope(envelope: &Value) -> std::result::Result<Value, String> {
    let response: ChatResponse =
        serde_json::from_value(envelope.clone()).map_err(|e| e.to_string())?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| "response contains no choices".to_string())?;

    serde_json::from_str(&choice.message.content).map_err(|e| e.to_string())
}
