use crate::error::{Result, SummarizerError};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the completion endpoint
pub const ENDPOINT_ENV: &str = "GROQ_API_URL";

/// Environment variable overriding the model id
pub const MODEL_ENV: &str = "GROQ_MODEL";

/// Environment variable setting the HTTP timeout in seconds
pub const TIMEOUT_ENV: &str = "GROQ_TIMEOUT_SECS";

/// Groq's OpenAI-compatible chat completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used when nothing overrides it
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Configuration for the PDF summarizer
#[derive(Clone)]
pub struct Config {
    /// API key, looked up once at startup
    pub api_key: Option<String>,

    /// Chat completions URL
    pub endpoint: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Base name for the saved result
    pub output_file: PathBuf,

    /// HTTP timeout; `None` keeps the client default
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 2000,
            output_file: PathBuf::from("result.json"),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// Call after `.env` has been loaded so its values are visible here.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.api_key = lookup(API_KEY_ENV);

        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.model = model.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config.request_timeout = Some(Duration::from_secs(secs));
                }
                _ => warn!(
                    "Ignoring {}={:?}: expected a positive number of seconds",
                    TIMEOUT_ENV, raw
                ),
            }
        }

        config
    }

    /// The API key, or [`SummarizerError::MissingApiKey`] if absent or blank
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SummarizerError::MissingApiKey),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("output_file", &self.output_file)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
