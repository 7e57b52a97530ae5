//! Helpers shared by the services: password hashing, form coercion and the built-in
//! catalog/demo data.

pub mod defaults;
pub mod parse;
pub mod password;
