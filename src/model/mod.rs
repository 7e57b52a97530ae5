//! Data transfer types exchanged between the core and its callers.

pub mod account;
pub mod bulk;
pub mod catalog;
pub mod db;
pub mod public;
pub mod store;
