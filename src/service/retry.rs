//! Retry logic with exponential backoff for service operations.
//!
//! This module provides the `RetryContext` for executing operations with automatic retry
//! logic and exponential backoff. It supports caching between retry attempts to prevent
//! redundant catalog lookups, and integrates with the error system to determine which errors
//! are retryable.

use std::time::Duration;

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic and caching.
///
/// Provides exponential backoff retry behavior with configurable max attempts and initial
/// backoff duration. The generic cache type `T` persists data between retry attempts.
///
/// # Type Parameters
///
/// - `T` - Cache type that must implement `Clone + Default`. `PurchaseCache` for store
///   purchases or `()` for operations without caching needs.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 50 milliseconds (50ms, 100ms, 200ms, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let mut ctx: RetryContext<PurchaseCache> = RetryContext::new();
/// let db = db.clone();
///
/// ctx.execute_with_retry("purchase of Ion Sheriff for user ID 1", |cache| {
///     let db = db.clone();
///
///     Box::pin(async move {
///         let txn = db.begin().await?;
///         let receipt = purchase_skin(&txn, 1, "Ion Sheriff", cache).await?;
///         txn.commit().await?;
///
///         Ok(receipt)
///     })
/// }).await?;
/// ```
pub struct RetryContext<T> {
    /// Cache to be used between retries to prevent unnecessary additional lookups
    cache: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in milliseconds (doubles with each retry)
    initial_backoff_ms: u64,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_MS: u64 = 50;

    /// Creates a new retry context with default configuration.
    ///
    /// Initializes a retry context with 3 max attempts and 50 millisecond initial backoff.
    /// The cache is initialized using its `Default` implementation.
    pub fn new() -> Self {
        Self {
            cache: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: Self::DEFAULT_INITIAL_BACKOFF_MS,
        }
    }

    /// Overrides the maximum number of attempts, at least 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// Runs the provided async operation up to `max_attempts` times, retrying on transient
    /// failures with exponential backoff. The cache persists between retry attempts.
    ///
    /// Errors are evaluated using `to_retry_strategy()` to determine if they are retryable or
    /// permanent failures. Business rejections are logged at debug level since they are an
    /// expected outcome, other permanent failures at error level.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "purchase of bundle ID 2")
    /// - `operation` - Async function that receives mutable cache reference and returns `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = operation(&mut self.cache).await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        if e.is_business() {
                            tracing::debug!("Rejected {}: {}", description, e);
                        } else {
                            tracing::error!("Permanent error for {}: {:?}", description, e);
                        }
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_ms = self.initial_backoff_ms * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_millis(backoff_ms);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T> Default for RetryContext<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
