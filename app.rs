//! Interactive driver
//!
//! Asks for a PDF path and a prompt, runs extraction and the completion
//! call, prints the JSON result and optionally saves it. Streams are
//! generic so the whole flow can be driven from tests.

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::error::{Result, SummarizerError};
use crate::extractor::PdfTextExtractor;
use crate::file_namer::next_available_path;
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const BANNER: &str = "Программа PDF-Summarizer v.1.0";
pub const MODEL_NOTICE: &str = "Программа использует LLM llama4 с ограничением 30000";
pub const PATH_PROMPT: &str = "Введите путь к pdf файлу: ";
pub const QUERY_PROMPT: &str = "Введите запрос (promt): ";
pub const SAVE_PROMPT: &str = "Вы хотите сохранить результат? Y/N\n";

/// Exit status for a completed run
pub const EXIT_OK: u8 = 0;

/// Exit status for fatal errors
pub const EXIT_FAILURE: u8 = 1;

/// One interactive session over the given streams
pub struct App<R, W, E> {
    input: R,
    out: W,
    err: E,
    config: Config,
}

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    pub fn new(input: R, out: W, err: E, config: Config) -> Self {
        Self {
            input,
            out,
            err,
            config,
        }
    }

    /// Run the session and return the process exit code
    pub fn run(&mut self) -> u8 {
        match self.try_run() {
            Ok(()) => EXIT_OK,
            Err(e) => {
                debug!("Session aborted: {}", e);
                let _ = writeln!(self.err, "Error: {}", e);
                EXIT_FAILURE
            }
        }
    }

    fn try_run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "{}", MODEL_NOTICE)?;

        let pdf_path = PathBuf::from(self.ask(PATH_PROMPT)?);
        if !pdf_path.exists() {
            return Err(SummarizerError::FileNotFound(pdf_path));
        }

        let prompt = self.ask(QUERY_PROMPT)?;
        let api_key = self.config.api_key()?.to_string();

        let text = PdfTextExtractor::new().extract_file(&pdf_path)?;

        let client = CompletionClient::new(api_key, &self.config)?;
        let result = client.complete(&text, &prompt);

        let rendered = render(&result)?;
        writeln!(self.out, "{}", rendered)?;

        let answer = self.ask(SAVE_PROMPT)?;
        if answer.to_lowercase() == "y" {
            self.save(&rendered)?;
        } else {
            writeln!(self.out, "Работа программы завершена.")?;
        }

        Ok(())
    }

    /// Write the rendered result next to the configured base name.
    ///
    /// A failed write is reported on stderr and does not fail the run.
    fn save(&mut self, rendered: &str) -> Result<()> {
        let target = next_available_path(&self.config.output_file);
        match write_result(&target, rendered) {
            Ok(()) => {
                info!("Saved result to {}", target.display());
                writeln!(self.out, "Результат сохранён в файл: {}", target.display())?;
            }
            Err(e) => {
                debug!("Failed to save {}: {}", target.display(), e);
                writeln!(self.err, "Ошибка при сохранении файла: {}", e)?;
            }
        }
        Ok(())
    }

    /// Print `prompt` and read one trimmed line; EOF reads as empty
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            debug!("End of input while waiting for an answer");
        }
        Ok(line.trim().to_string())
    }
}

/// Pretty JSON with two-space indent, non-ASCII kept as is
pub fn render(result: &Value) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| SummarizerError::Io(io::Error::from(e)))
}

fn write_result(path: &Path, rendered: &str) -> io::Result<()> {
    fs::write(path, rendered.as_bytes())
}
