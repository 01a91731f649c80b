// demos/normalize_cli/src/errors.rs

use thiserror::Error;
use user_record::RecordError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Input Error: {0}")]
  Input(String),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON Error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Record Error: {source}")]
  Record {
    #[from] // Allows conversion from user_record::RecordError
    source: RecordError,
  },
}

impl AppError {
  /// Process exit code for this error.
  pub fn exit_code(&self) -> i32 {
    match self {
      AppError::Config(_) => 78,
      AppError::Input(_) | AppError::Json(_) => 65,
      AppError::Io(_) => 74,
      AppError::Record { source } if source.is_source_failure() => 70,
      AppError::Record { .. } => 65,
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Process exit status for a finished run.
pub fn exit_status(result: &Result<()>) -> i32 {
  match result {
    Ok(()) => 0,
    Err(e) => e.exit_code(),
  }
}
