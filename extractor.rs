//! PDF text extraction
//!
//! Thin wrapper over `pdf-extract` that turns every failure into a
//! [`SummarizerError`] and rejects documents without any text.

use crate::error::{Result, SummarizerError};
use pdf_extract::extract_text_from_mem;
use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, info, warn};

/// PDF signature, `%PDF`
const PDF_MAGIC: &[u8] = b"%PDF";

/// How far into the file the signature may appear
const MAGIC_SEARCH_WINDOW: usize = 1024;

/// Extracts plain text from PDF documents
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new extractor instance
    pub fn new() -> Self {
        Self
    }

    /// Extract text from the PDF at `path`
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        info!("Extracting text from {}", path.display());

        let bytes = fs::read(path).map_err(|e| SummarizerError::Extraction(e.to_string()))?;
        self.extract_bytes(&bytes)
    }

    /// Extract text from in-memory PDF bytes.
    ///
    /// The text is returned exactly as `pdf-extract` produced it; only a
    /// whitespace-only result is rejected.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        debug!("Extracting text from PDF ({} bytes)", bytes.len());

        if !is_pdf(bytes) {
            return Err(SummarizerError::Extraction(
                "not a PDF document (missing %PDF header)".to_string(),
            ));
        }

        // pdf-extract panics on some malformed font and encoding dictionaries
        let text = panic::catch_unwind(AssertUnwindSafe(|| extract_text_from_mem(bytes)))
            .map_err(|payload| {
                let cause = panic_message(payload.as_ref());
                warn!("pdf-extract panicked: {}", cause);
                SummarizerError::Extraction(cause)
            })?
            .map_err(|e| SummarizerError::Extraction(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(SummarizerError::EmptyDocument);
        }

        info!("Extracted {} characters of text", text.chars().count());
        Ok(text)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "PDF parser aborted".to_string()
    }
}

/// Whether `bytes` carry a PDF signature near the start of the file
pub fn is_pdf(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(MAGIC_SEARCH_WINDOW)];
    window
        .windows(PDF_MAGIC.len())
        .any(|candidate| candidate == PDF_MAGIC)
}
