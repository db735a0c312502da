use serde_json::{json, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for the PDF summarizer
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("PDF file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("GROQ_API_KEY not set in .env file")]
    MissingApiKey,

    #[error("Failed to extract PDF text: {0}")]
    Extraction(String),

    #[error("Failed to extract PDF text: PDF file contains no extractable text.")]
    EmptyDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience Result type with SummarizerError
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Ways a chat-completion call can fail.
///
/// These never abort the program; they are folded into the printed result
/// with [`CompletionError::to_json`].
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API call failed: {status}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {reason}")]
    Parse { reason: String, raw_response: Value },
}

impl CompletionError {
    /// Error-shaped JSON object, `"error"` first
    pub fn to_json(&self) -> Value {
        match self {
            CompletionError::Request(_) => json!({ "error": self.to_string() }),
            CompletionError::Status { body, .. } => json!({
                "error": self.to_string(),
                "message": body,
            }),
            CompletionError::Parse { raw_response, .. } => json!({
                "error": self.to_string(),
                "raw_response": raw_response,
            }),
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Request(err.to_string())
    }
}
