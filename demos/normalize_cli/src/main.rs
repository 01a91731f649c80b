// demos/normalize_cli/src/main.rs

// Declare modules for the application
mod cli;
mod config;
mod errors;
mod normalize;

use crate::cli::Cli;
use crate::config::{AppConfig, LogFormat};
use crate::errors::Result as AppResult;
use crate::normalize::{InputShape, OutputOptions};

use clap::Parser;
use std::io::Write;
use user_record::UserConstructor;

fn init_tracing(format: LogFormat) {
  // Logs go to stderr so stdout carries only records
  let builder = tracing_subscriber::fmt()
    .with_env_filter(config::log_filter())
    .with_writer(std::io::stderr);
  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<()> {
  let ctor = UserConstructor::new().with_presence_policy(config.policy);

  let raw = normalize::read_input(cli.input_path())?;
  let shape = if cli.ndjson { InputShape::Ndjson } else { InputShape::Document };

  let parsed = normalize::parse_inputs(&raw, shape)?;
  let records = normalize::normalize_all(&ctor, &parsed.values)?;

  let opts = OutputOptions {
    document_view: cli.document,
    pretty: config.pretty_output,
  };
  let rendered = normalize::render(&records, shape, parsed.was_array, opts)?;

  let mut stdout = std::io::stdout().lock();
  stdout.write_all(rendered.as_bytes())?;
  stdout.flush()?;
  Ok(())
}

fn main() {
  let cli = Cli::parse();

  let config = match AppConfig::from_env() {
    Ok(config) => config.with_cli_overrides(&cli),
    Err(e) => {
      init_tracing(cli.log_format.unwrap_or_default());
      tracing::error!(error = %e, "Failed to load application configuration.");
      std::process::exit(e.exit_code());
    }
  };
  init_tracing(config.log_format);
  tracing::debug!(policy = %config.policy, pretty = config.pretty_output, "Configuration loaded.");

  let result = run(&cli, &config);
  if let Err(e) = &result {
    tracing::error!(error = %e, "Normalization failed.");
  }
  std::process::exit(errors::exit_status(&result));
}
