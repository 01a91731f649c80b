// user_record/src/constructor/policy.rs
use crate::error::RecordError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Decides when a supplied `id` / `createdAt` counts as absent and gets
/// default-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresencePolicy {
  /// Falsy means absent: an empty `id`, a zero number, `false`, or an
  /// epoch-zero `createdAt` are all replaced.
  #[default]
  Loose,
  /// Only a missing key (or `null`) is absent. Whatever was supplied is kept.
  Strict,
}

impl PresencePolicy {
  pub fn id_is_absent(self, id: Option<&str>) -> bool {
    match (self, id) {
      (_, None) => true,
      (PresencePolicy::Loose, Some(id)) => id.is_empty(),
      (PresencePolicy::Strict, Some(_)) => false,
    }
  }

  pub fn timestamp_is_absent(self, ts: Option<&DateTime<Utc>>) -> bool {
    match (self, ts) {
      (_, None) => true,
      (PresencePolicy::Loose, Some(ts)) => ts.timestamp_millis() == 0,
      (PresencePolicy::Strict, Some(_)) => false,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      PresencePolicy::Loose => "loose",
      PresencePolicy::Strict => "strict",
    }
  }
}

impl fmt::Display for PresencePolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PresencePolicy {
  type Err = RecordError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "loose" => Ok(PresencePolicy::Loose),
      "strict" => Ok(PresencePolicy::Strict),
      other => Err(RecordError::UnknownPolicy(other.to_string())),
    }
  }
}
