use crate::config::Config;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the PDF summarizer.
///
/// Every flag is optional; the file path and prompt are asked interactively.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pdf-summarizer",
    version,
    about = "Extract structured JSON from a PDF with a hosted LLM",
    long_about = "
PDF Summarizer reads a PDF, sends its text together with your request to the
Groq chat completions API and prints the JSON the model returns.

The API key is read from GROQ_API_KEY (a .env file in the working directory
is loaded first). GROQ_API_URL and GROQ_MODEL override the endpoint and model.

EXAMPLES:
    pdf-summarizer
    pdf-summarizer --output invoice.json --verbose
"
)]
pub struct CliArgs {
    /// Base file name used when saving the result
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "result.json",
        help = "Base file name for the saved result"
    )]
    pub output: PathBuf,

    /// Model identifier, overrides GROQ_MODEL
    #[arg(long = "model", value_name = "MODEL_ID", help = "Model to query")]
    pub model: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Log level
    #[arg(
        long = "log-level",
        value_enum,
        default_value_t = LogLevel::Warn,
        help = "Set the logging level"
    )]
    pub log_level: LogLevel,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Show error messages only
    Error,
    /// Show warnings and errors (default)
    Warn,
    /// Show info, warnings, and errors
    Info,
    /// Show debug information
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl CliArgs {
    /// Effective log level, `--verbose` wins over `--log-level`
    pub fn level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }

    /// Initialize logging based on CLI arguments.
    ///
    /// Logs go to stderr; stdout is reserved for prompts and the result.
    pub fn setup_logging(&self) -> Result<()> {
        let level = self.level();

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(format!(
                        "{}={}",
                        env!("CARGO_PKG_NAME").replace('-', "_"),
                        level
                    ))
                }),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        Ok(())
    }

    /// Fold the flags into `config`
    pub fn apply(&self, config: &mut Config) {
        config.output_file = self.output.clone();
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = CliArgs::try_parse_from(["pdf-summarizer"]).unwrap();
        assert_eq!(args.output, PathBuf::from("result.json"));
        assert_eq!(args.model, None);
        assert_eq!(args.level(), "warn");
    }

    #[test]
    fn test_verbose_overrides_level() {
        let args =
            CliArgs::try_parse_from(["pdf-summarizer", "--log-level", "error", "-v"]).unwrap();
        assert_eq!(args.log_level, LogLevel::Error);
        assert_eq!(args.level(), "debug");
    }

    #[test]
    fn test_apply() {
        let args = CliArgs::try_parse_from([
            "pdf-summarizer",
            "-o",
            "out/summary.json",
            "--model",
            "llama-3.3-70b-versatile",
        ])
        .unwrap();

        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.output_file, PathBuf::from("out/summary.json"));
        assert_eq!(config.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_command_metadata() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
        assert_eq!(CliArgs::command().get_name(), "pdf-summarizer");
    }
}
