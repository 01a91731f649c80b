// user_record/src/sources/id_gen.rs
use crate::error::{RecordError, RecordResult};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::{event, Level};
use uuid::{Uuid, Variant, Version};

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync {
  fn generate(&self) -> RecordResult<String>;
}

/// Random UUID v4 identifiers in canonical lowercase hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
  fn generate(&self) -> RecordResult<String> {
    Ok(Uuid::new_v4().hyphenated().to_string())
  }
}

/// Hands out a fixed list of identifiers, then fails.
///
/// Running dry is reported as `RecordError::IdGeneration`, the same way an
/// exhausted entropy source would surface.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
  remaining: Mutex<VecDeque<String>>,
}

impl SequenceIdGenerator {
  pub fn new<I, S>(ids: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      remaining: Mutex::new(ids.into_iter().map(Into::into).collect()),
    }
  }

  pub fn remaining(&self) -> usize {
    self.remaining.lock().len()
  }
}

impl IdGenerator for SequenceIdGenerator {
  fn generate(&self) -> RecordResult<String> {
    match self.remaining.lock().pop_front() {
      Some(id) => Ok(id),
      None => {
        event!(Level::ERROR, "Identifier sequence exhausted.");
        Err(RecordError::IdGeneration {
          message: "identifier sequence exhausted".to_string(),
        })
      }
    }
  }
}

/// Checks the canonical textual form `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`
/// (lowercase hex, `y` one of `8`, `9`, `a`, `b`).
pub fn is_uuid_v4(candidate: &str) -> bool {
  match Uuid::try_parse(candidate) {
    Ok(u) => {
      u.get_version() == Some(Version::Random)
        && u.get_variant() == Variant::RFC4122
        && u.hyphenated().to_string() == candidate
    }
    Err(_) => false,
  }
}
