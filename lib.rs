//! PDF Summarizer Library
//!
//! Extracts text from a PDF, asks a hosted chat-completion model to turn it
//! into JSON according to a free-form prompt, and saves the answer without
//! overwriting earlier results.

#![warn(rust_2018_idioms)]

pub mod app;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod extractor;
pub mod file_namer;

pub use app::App;
pub use cli::{CliArgs, LogLevel};
pub use completion::{ChatMessage, ChatRequest, CompletionClient};
pub use config::Config;
pub use error::{CompletionError, Result, SummarizerError};
pub use extractor::PdfTextExtractor;
pub use file_namer::next_available_path;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        App, CliArgs, CompletionClient, CompletionError, Config, PdfTextExtractor, Result,
        SummarizerError, next_available_path,
    };

    pub use tracing::{debug, error, info, warn};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
