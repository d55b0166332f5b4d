//! Outbound client for the Anthropic Messages API.
//!
//! Only the CV review endpoint talks to the model, and only through this
//! module. A reply is reduced to its first text block, unfenced and decoded as
//! JSON; checking the shape of that JSON is the caller's job.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2048;
/// One initial attempt plus two retries.
const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to the model failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("model reply is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("model reply has no text block")]
    NoText,
}

impl LlmError {
    /// Transport failures and retryable statuses are worth another attempt.
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Transport(_) => true,
            LlmError::Status { status, .. } => StatusCode::from_u16(*status)
                .map(|s| classify(s) == StatusClass::Retryable)
                .unwrap_or(false),
            LlmError::Decode(_) | LlmError::NoText => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Success,
    Retryable,
    Fatal,
}

/// 429 and every 5xx are retried; any other non-2xx is final.
fn classify(status: StatusCode) -> StatusClass {
    if status.is_success() {
        StatusClass::Success
    } else if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        StatusClass::Retryable
    } else {
        StatusClass::Fatal
    }
}

/// Delay before retry number `retry` (1-based): 1s, 2s, 4s, ...
fn backoff(retry: u32) -> Duration {
    Duration::from_secs(1 << retry.saturating_sub(1).min(6))
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesReply {
    content: Vec<ReplyBlock>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct ReplyBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct TokenUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessagesReply {
    fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.kind == "text")
            .and_then(|b| b.text.as_deref())
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or(body)
}

#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, api_key })
    }

    /// Sends one user turn and decodes the reply's text block as JSON.
    pub async fn complete_json(&self, system: &str, prompt: &str) -> Result<Value, LlmError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserTurn {
                role: "user",
                content: prompt,
            }],
        };

        let reply = self.send_with_retries(&request).await?;
        let text = reply.first_text().ok_or(LlmError::NoText)?;
        Ok(serde_json::from_str(strip_json_fences(text))?)
    }

    async fn send_with_retries(
        &self,
        request: &MessagesRequest<'_>,
    ) -> Result<MessagesReply, LlmError> {
        let mut attempt = 1;
        loop {
            match self.send_once(request).await {
                Ok(reply) => return Ok(reply),
                Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                    let delay = backoff(attempt);
                    warn!(attempt, delay_ms = delay.as_millis() as u64, error = %e, "Model call failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, request: &MessagesRequest<'_>) -> Result<MessagesReply, LlmError> {
        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if classify(status) != StatusClass::Success {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        let reply: MessagesReply = response.json().await?;
        if let Some(usage) = &reply.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Model call succeeded"
            );
        }
        Ok(reply)
    }
}

/// Strips a surrounding ```json / ``` fence; an unterminated fence is tolerated.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
