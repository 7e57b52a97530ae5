//! Business services.
//!
//! Services borrow the application's [`sea_orm::DatabaseConnection`], compose repositories from
//! [`crate::data`] and open transactions where an operation spans several tables.

pub mod account;
pub mod auth;
pub mod bulk;
pub mod catalog;
pub mod inventory;
pub mod match_history;
pub mod profile;
pub mod public;
pub mod retry;
pub mod store;
pub mod valuation;
