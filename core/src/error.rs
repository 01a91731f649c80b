// user_record/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
  #[error("Identifier generation failed: {message}")]
  IdGeneration { message: String },

  #[error("Clock source failed: {message}")]
  Clock { message: String },

  #[error("Record input must be a JSON object, found {found}")]
  InputNotObject { found: String },

  #[error("Invalid timestamp for field '{field}': {value}")]
  InvalidTimestamp { field: String, value: String },

  #[error("Unknown presence policy '{0}' (expected 'loose' or 'strict')")]
  UnknownPolicy(String),

  #[error("Malformed JSON input. Source: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Internal user-record error: {0}")]
  Internal(String),
}

impl RecordError {
  /// True for failures of an injected source (clock or identifier generator).
  /// These are fatal for the call; nothing retries them.
  pub fn is_source_failure(&self) -> bool {
    matches!(self, RecordError::IdGeneration { .. } | RecordError::Clock { .. })
  }
}

pub type RecordResult<T, E = RecordError> = std::result::Result<T, E>;
