// demos/normalize_cli/src/normalize.rs

//! Turns raw JSON text into normalized records and renders them back out.

use crate::errors::{AppError, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};
use user_record::{User, UserConstructor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
  /// A single JSON document: one object or an array of objects.
  Document,
  /// One JSON object per non-blank line.
  Ndjson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
  pub document_view: bool,
  pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
  pub values: Vec<Value>,
  /// The document was a JSON array, so output is rendered as one too.
  pub was_array: bool,
}

/// Reads the whole input, from `path` or from stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(path) => std::fs::read_to_string(path)
      .map_err(|e| AppError::Input(format!("cannot read {}: {}", path.display(), e))),
    None => {
      let mut raw = String::new();
      std::io::stdin().read_to_string(&mut raw)?;
      Ok(raw)
    }
  }
}

/// Splits raw input into the values to normalize.
pub fn parse_inputs(raw: &str, shape: InputShape) -> Result<ParsedInput> {
  match shape {
    InputShape::Document => match serde_json::from_str::<Value>(raw)? {
      Value::Array(values) => Ok(ParsedInput { values, was_array: true }),
      single => Ok(ParsedInput {
        values: vec![single],
        was_array: false,
      }),
    },
    InputShape::Ndjson => {
      let values = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
          serde_json::from_str::<Value>(line).map_err(|e| AppError::Input(format!("line {}: {}", idx + 1, e)))
        })
        .collect::<Result<Vec<_>>>()?;
      Ok(ParsedInput {
        values,
        was_array: false,
      })
    }
  }
}

#[instrument(name = "normalize::normalize_all", skip_all, fields(count = inputs.len()), err(Display))]
pub fn normalize_all(ctor: &UserConstructor, inputs: &[Value]) -> Result<Vec<User>> {
  let mut records = Vec::with_capacity(inputs.len());
  for (idx, value) in inputs.iter().enumerate() {
    let user = ctor.construct_from_value(value).map_err(|source| {
      debug!(index = idx, error = %source, "Record construction failed.");
      AppError::from(source)
    })?;
    records.push(user);
  }
  info!(count = records.len(), policy = %ctor.presence_policy(), "Normalized records.");
  Ok(records)
}

fn to_output_value(user: &User, opts: OutputOptions) -> Result<Value> {
  if opts.document_view {
    Ok(Value::Object(user.to_document()?))
  } else {
    Ok(serde_json::to_value(user)?)
  }
}

/// Renders records in the same shape they came in: NDJSON stays one per line,
/// a single object stays an object, an array stays an array.
pub fn render(records: &[User], shape: InputShape, was_array: bool, opts: OutputOptions) -> Result<String> {
  let values = records
    .iter()
    .map(|u| to_output_value(u, opts))
    .collect::<Result<Vec<_>>>()?;

  let encode = |v: &Value| -> Result<String> {
    if opts.pretty {
      Ok(serde_json::to_string_pretty(v)?)
    } else {
      Ok(serde_json::to_string(v)?)
    }
  };

  match shape {
    InputShape::Ndjson => {
      let mut out = String::new();
      for v in &values {
        // NDJSON lines are never indented
        out.push_str(&serde_json::to_string(v)?);
        out.push('\n');
      }
      Ok(out)
    }
    InputShape::Document if was_array => Ok(encode(&Value::Array(values))? + "\n"),
    InputShape::Document => match values.into_iter().next() {
      Some(single) => Ok(encode(&single)? + "\n"),
      None => Err(AppError::Input("no records to render".to_string())),
    },
  }
}
