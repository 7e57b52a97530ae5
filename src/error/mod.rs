//! Error types for the skinvault core.
//!
//! Business rejections (registration collisions, gated logins, refused purchases, invalid form
//! input) each have their own domain enum so callers can match on them directly. They are
//! aggregated together with infrastructure failures into the crate-wide [`Error`] type using
//! `thiserror`'s `#[from]` conversions, which lets every layer propagate with `?`.

pub mod auth;
pub mod config;
pub mod purchase;
pub mod registration;
pub mod retry;
pub mod validation;

use thiserror::Error;

use crate::error::{
    auth::AuthError, config::ConfigError, purchase::PurchaseError,
    registration::RegistrationError, validation::ValidationError,
};

/// Main error type for the skinvault core.
///
/// # Error Categories
/// - Business rules: registration, login gate, purchase and validation rejections
/// - Missing records on write paths
/// - Configuration errors (missing/invalid environment variables)
/// - Infrastructure errors (database, password hashing, exhausted optimistic retries)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Login was refused by the credential check or the moderation gate.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Registration was refused.
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// A skin or bundle purchase was refused.
    #[error(transparent)]
    PurchaseError(#[from] PurchaseError),
    /// Raw caller input could not be coerced into a typed value.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A write targeted a record that does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// The password hasher rejected its input or a stored hash could not be parsed.
    #[error("Failed to hash or verify password: {0}")]
    PasswordHashError(String),
    /// A row changed between being read and being written inside the same transaction.
    ///
    /// Raised by the optimistic wallet debit; the purchase is retried when this occurs.
    #[error("Concurrent update detected for {0}")]
    ConcurrentUpdate(String),
    /// Internal error indicating a bug in skinvault's code.
    #[error("Internal error with skinvault's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Returns true for rejections defined by the account and store rules.
    ///
    /// Everything else is an infrastructure failure that should abort the calling operation.
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            Self::AuthError(_)
                | Self::RegistrationError(_)
                | Self::PurchaseError(_)
                | Self::ValidationError(_)
                | Self::NotFound(_)
        )
    }
}
