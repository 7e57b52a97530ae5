use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query errors, constraint violations, type conversion and schema errors
                // won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Another transaction moved the row we read, the whole operation is re-run against
            // fresh state
            Self::ConcurrentUpdate(_) => ErrorRetryStrategy::Retry,

            // Business rejections are final for the state they were evaluated against
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::RegistrationError(_) => ErrorRetryStrategy::Fail,
            Self::PurchaseError(_) => ErrorRetryStrategy::Fail,
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,
            Self::NotFound(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::PasswordHashError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
