// demos/normalize_cli/src/config.rs

use crate::cli::Cli;
use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use user_record::PresencePolicy;

pub const ENV_POLICY: &str = "USER_RECORD_POLICY";
pub const ENV_LOG_FORMAT: &str = "USER_RECORD_LOG_FORMAT";
pub const ENV_PRETTY: &str = "USER_RECORD_PRETTY";

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when it parses, `info` otherwise.
pub fn log_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid {} value: '{}'", ENV_LOG_FORMAT, other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub policy: PresencePolicy,
  pub log_format: LogFormat,
  pub pretty_output: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let policy = match get_env(ENV_POLICY) {
      Some(raw) => raw
        .parse::<PresencePolicy>()
        .map_err(|e| AppError::Config(format!("Invalid {}: {}", ENV_POLICY, e)))?,
      None => PresencePolicy::default(),
    };

    let log_format = match get_env(ENV_LOG_FORMAT) {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => LogFormat::default(),
    };

    let pretty_output = get_env(ENV_PRETTY)
      .unwrap_or_else(|| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid {} value: {}", ENV_PRETTY, e)))?;

    Ok(Self {
      policy,
      log_format,
      pretty_output,
    })
  }

  /// Command-line flags win over the environment.
  pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
    if let Some(policy) = cli.policy {
      self.policy = policy;
    }
    if let Some(format) = cli.log_format {
      self.log_format = format;
    }
    if cli.pretty {
      self.pretty_output = true;
    }
    self
  }
}
