use anyhow::Result;
use clap::Parser;
use pdf_summarizer::prelude::*;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // .env first, so logging and config both see its values
    let dotenv = dotenvy::dotenv();

    let args = CliArgs::parse();
    args.setup_logging()?;

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let mut config = Config::from_env();
    args.apply(&mut config);
    info!("Starting {} v{}", pdf_summarizer::APP_NAME, pdf_summarizer::VERSION);
    debug!("Configuration: {:?}", config);

    let stdin = io::stdin();
    let code = App::new(stdin.lock(), io::stdout(), io::stderr(), config).run();

    Ok(ExitCode::from(code))
}
