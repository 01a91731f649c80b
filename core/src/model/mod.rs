// user_record/src/model/mod.rs

//! The User record and its partial input.

pub mod input;
pub mod user;

pub use input::UserInput;
pub use user::User;
