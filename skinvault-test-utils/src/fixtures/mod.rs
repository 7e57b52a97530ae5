//! Test fixture modules for database record creation.
//!
//! - `user` - Credential rows with their profile and wallet, plus moderation changes
//! - `inventory` - Owned items and match records
//! - `catalog` - Store bundles and skins
//! - `factory` - In-memory models for unit tests that never touch the database

pub mod catalog;
pub mod factory;
pub mod inventory;
pub mod user;
