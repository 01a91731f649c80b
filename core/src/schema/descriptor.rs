// user_record/src/schema/descriptor.rs

//! Static, framework-free description of an entity's fields.
//!
//! Persistence and schema-exposure layers read these tables instead of
//! annotations on the record type itself.

/// Value shape of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  /// Opaque unique identifier string.
  Identifier,
  /// Opaque string.
  Text,
  /// Point in time, `DateTime<Utc>` in memory.
  Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
  /// Name used on the input and output boundaries (camelCase).
  pub name: &'static str,
  /// Name the persistence layer stores the field under.
  pub column: &'static str,
  pub kind: FieldKind,
  /// Always present on a constructed record (never undefined in output).
  pub required: bool,
  /// Whether a value supplied in the input survives projection.
  pub from_input: bool,
  /// Never rendered by `Debug` or logs.
  pub sensitive: bool,
}

impl FieldDescriptor {
  pub const fn text(name: &'static str) -> Self {
    Self {
      name,
      column: name,
      kind: FieldKind::Text,
      required: false,
      from_input: true,
      sensitive: false,
    }
  }

  pub const fn timestamp(name: &'static str) -> Self {
    Self {
      name,
      column: name,
      kind: FieldKind::Timestamp,
      required: false,
      from_input: true,
      sensitive: false,
    }
  }

  pub const fn identifier(name: &'static str, column: &'static str) -> Self {
    Self {
      name,
      column,
      kind: FieldKind::Identifier,
      required: true,
      from_input: true,
      sensitive: false,
    }
  }

  pub const fn required(mut self) -> Self {
    self.required = true;
    self
  }

  pub const fn sensitive(mut self) -> Self {
    self.sensitive = true;
    self
  }

  pub const fn output_only(mut self) -> Self {
    self.from_input = false;
    self
  }
}

#[derive(Debug)]
pub struct EntitySchema {
  pub entity_name: &'static str,
  /// Collection/table the persistence layer maps the entity to.
  pub collection: &'static str,
  /// Name of the identifier field (points at an entry in `fields`).
  pub primary_key: &'static str,
  /// Declaration order is the serialization order.
  pub fields: &'static [FieldDescriptor],
}

impl EntitySchema {
  pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
    self.fields.iter().find(|f| f.name == name)
  }

  pub fn is_declared(&self, name: &str) -> bool {
    self.field(name).is_some()
  }

  /// Declared field for a persisted column name, e.g. `_id` -> `id`.
  pub fn field_for_column(&self, column: &str) -> Option<&FieldDescriptor> {
    self.fields.iter().find(|f| f.column == column)
  }

  pub fn column_for(&self, name: &str) -> Option<&'static str> {
    self.field(name).map(|f| f.column)
  }

  pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.fields.iter().map(|f| f.name)
  }

  pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
    self.fields.iter().filter(|f| f.required)
  }

  pub fn primary_key_field(&self) -> Option<&FieldDescriptor> {
    self.field(self.primary_key)
  }
}
