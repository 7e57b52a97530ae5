//! Database repositories.
//!
//! Each repository wraps one table (or one closely related pair) and is generic over
//! [`sea_orm::ConnectionTrait`], so the same methods run against a pooled connection or inside
//! a transaction opened by a service.

pub mod catalog;
pub mod inventory;
pub mod match_history;
pub mod profile;
pub mod user;
pub mod wallet;
