// user_record/src/model/user.rs

use crate::constructor::UserConstructor;
use crate::error::{RecordError, RecordResult};
use crate::model::input::UserInput;
use crate::schema::USER_SCHEMA;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A normalized User record.
///
/// Only [`UserConstructor`] produces these: `id`, `created_at` and
/// `updated_at` are always populated. Deserializing goes through the
/// default constructor as well, so a supplied `updatedAt` is discarded and
/// an empty `id` is replaced.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct User {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Builds a record with the system clock and random UUID v4 identifiers.
  pub fn from_input(input: UserInput) -> RecordResult<Self> {
    UserConstructor::new().construct(input)
  }

  /// Everything except the managed `updated_at`, for feeding back into the
  /// constructor.
  pub fn to_input(&self) -> UserInput {
    UserInput {
      id: Some(self.id.clone()),
      name: self.name.clone(),
      first_name: self.first_name.clone(),
      last_name: self.last_name.clone(),
      email: self.email.clone(),
      password: self.password.clone(),
      created_at: Some(self.created_at),
    }
  }

  /// The record keyed by persisted column names (`_id` for the identifier),
  /// in schema declaration order. Undefined fields are left out.
  pub fn to_document(&self) -> RecordResult<Map<String, Value>> {
    let by_name = match serde_json::to_value(self)? {
      Value::Object(map) => map,
      other => {
        return Err(RecordError::Internal(format!(
          "User serialized to {} instead of an object",
          crate::model::input::json_type_name(&other)
        )))
      }
    };

    let mut document = Map::new();
    for field in USER_SCHEMA.fields {
      if let Some(value) = by_name.get(field.name) {
        document.insert(field.column.to_string(), value.clone());
      }
    }
    Ok(document)
  }
}

impl TryFrom<Map<String, Value>> for User {
  type Error = RecordError;

  fn try_from(map: Map<String, Value>) -> RecordResult<Self> {
    UserConstructor::new().construct_from_map(&map)
  }
}

impl fmt::Debug for User {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let password = self.password.as_ref().map(|_| "[REDACTED]");
    f.debug_struct("User")
      .field("id", &self.id)
      .field("name", &self.name)
      .field("first_name", &self.first_name)
      .field("last_name", &self.last_name)
      .field("email", &self.email)
      .field("password", &password)
      .field("created_at", &self.created_at)
      .field("updated_at", &self.updated_at)
      .finish()
  }
}
