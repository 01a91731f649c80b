// user_record/src/model/input.rs

//! Partial input for the record constructor, and the projection that turns an
//! untyped string-keyed mapping into it.

use crate::constructor::PresencePolicy;
use crate::error::{RecordError, RecordResult};
use crate::schema::{fields, FieldKind, USER_SCHEMA};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Partially populated User. Every field may be missing.
///
/// No `updated_at`: the constructor always stamps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
  pub id: Option<String>,
  pub name: Option<String>,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}

impl UserInput {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
    self.first_name = Some(first_name.into());
    self
  }

  pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
    self.last_name = Some(last_name.into());
    self
  }

  pub fn email(mut self, email: impl Into<String>) -> Self {
    self.email = Some(email.into());
    self
  }

  pub fn password(mut self, password: impl Into<String>) -> Self {
    self.password = Some(password.into());
    self
  }

  pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
    self.created_at = Some(created_at);
    self
  }

  /// Projects a string-keyed mapping onto the declared User fields.
  ///
  /// Undeclared keys are dropped. Values of the wrong JSON type are treated
  /// as undefined. The legacy `_id` column name is accepted when `id` is
  /// missing or null. Only an unparseable `createdAt` under the strict
  /// policy is an error.
  pub fn from_map(map: &Map<String, Value>, policy: PresencePolicy) -> RecordResult<Self> {
    let mut input = UserInput::default();
    let mut discarded = 0usize;

    for (key, value) in map {
      let descriptor = match USER_SCHEMA.field(key) {
        Some(d) => d,
        None => {
          discarded += 1;
          continue;
        }
      };
      if !descriptor.from_input {
        debug!(field = descriptor.name, "Ignoring output-only field supplied in input.");
        continue;
      }

      match descriptor.kind {
        FieldKind::Identifier => input.id = identifier_value(value, policy),
        FieldKind::Timestamp => input.created_at = timestamp_value(descriptor.name, value, policy)?,
        FieldKind::Text => {
          let text = text_value(descriptor.name, value);
          match descriptor.name {
            fields::NAME => input.name = text,
            fields::FIRST_NAME => input.first_name = text,
            fields::LAST_NAME => input.last_name = text,
            fields::EMAIL => input.email = text,
            fields::PASSWORD => input.password = text,
            other => {
              return Err(RecordError::Internal(format!(
                "declared text field '{}' has no input slot",
                other
              )))
            }
          }
        }
      }
    }

    if input.id.is_none() && map.get(fields::ID).map_or(true, Value::is_null) {
      if let Some(legacy) = USER_SCHEMA.column_for(fields::ID).and_then(|col| map.get(col)) {
        input.id = identifier_value(legacy, policy);
      }
    }

    if discarded > 0 {
      debug!(discarded, "Discarded undeclared input keys.");
    }
    Ok(input)
  }
}

fn text_value(field: &str, value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Null => None,
    other => {
      debug!(field, found = json_type_name(other), "Non-string value treated as undefined.");
      None
    }
  }
}

fn identifier_value(value: &Value, policy: PresencePolicy) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => {
      let is_zero = n.as_f64().map(|f| f == 0.0).unwrap_or(false);
      if is_zero && policy == PresencePolicy::Loose {
        None
      } else {
        Some(n.to_string())
      }
    }
    _ => None,
  }
}

fn timestamp_value(field: &str, value: &Value, policy: PresencePolicy) -> RecordResult<Option<DateTime<Utc>>> {
  let parsed = match value {
    Value::Null | Value::Bool(false) => return Ok(None),
    Value::String(s) if s.is_empty() && policy == PresencePolicy::Loose => return Ok(None),
    Value::String(s) => DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc)),
    Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
    _ => None,
  };

  match (parsed, policy) {
    (Some(ts), _) => Ok(Some(ts)),
    (None, PresencePolicy::Loose) => {
      warn!(field, value = %value, "Unparseable timestamp treated as absent.");
      Ok(None)
    }
    (None, PresencePolicy::Strict) => Err(RecordError::InvalidTimestamp {
      field: field.to_string(),
      value: value.to_string(),
    }),
  }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
