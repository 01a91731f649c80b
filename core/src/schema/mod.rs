// user_record/src/schema/mod.rs

pub mod descriptor;

pub use descriptor::{EntitySchema, FieldDescriptor, FieldKind};

pub mod fields {
  pub const ID: &str = "id";
  pub const NAME: &str = "name";
  pub const FIRST_NAME: &str = "firstName";
  pub const LAST_NAME: &str = "lastName";
  pub const EMAIL: &str = "email";
  pub const PASSWORD: &str = "password";
  pub const CREATED_AT: &str = "createdAt";
  pub const UPDATED_AT: &str = "updatedAt";
}

/// The declared shape of a User record.
pub static USER_SCHEMA: EntitySchema = EntitySchema {
  entity_name: "User",
  collection: "users",
  primary_key: fields::ID,
  fields: &[
    FieldDescriptor::identifier(fields::ID, "_id"),
    FieldDescriptor::text(fields::NAME),
    FieldDescriptor::text(fields::FIRST_NAME),
    FieldDescriptor::text(fields::LAST_NAME),
    FieldDescriptor::text(fields::EMAIL),
    FieldDescriptor::text(fields::PASSWORD).sensitive(),
    FieldDescriptor::timestamp(fields::CREATED_AT).required(),
    FieldDescriptor::timestamp(fields::UPDATED_AT).required().output_only(),
  ],
};
