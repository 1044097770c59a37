//! Retry policy and predicates for handling transient failures.
//!
//! A failed request is retried when the [`RetryPredicate`] accepts the error,
//! the request is idempotent, and the [`RetryPolicy`] still has attempts
//! left. Once retries run out the last error is returned as-is.

use crate::Error;
use rand::Rng;
use std::time::Duration;

/// Defines how many times and how long to wait between retries.
///
/// Delays grow exponentially: `initial_delay * 2^(retry - 1)`, capped at
/// `max_delay`. With `jitter` enabled each delay is scaled by a random
/// factor between 50% and 100%.
///
/// # Examples
///
/// ```
/// use scryfall_api::RetryPolicy;
/// use std::time::Duration;
///
/// // 100ms, 200ms, 400ms
/// let policy = RetryPolicy {
///     max_retries: 3,
///     initial_delay: Duration::from_millis(100),
///     max_delay: Duration::from_secs(10),
///     jitter: false,
/// };
/// assert_eq!(policy.delay_for_attempt(3), Some(Duration::from_millis(400)));
/// assert_eq!(policy.delay_for_attempt(4), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// The maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// The delay before the first retry.
    pub initial_delay: Duration,
    /// The maximum delay between retries.
    pub max_delay: Duration,
    /// Whether to add random jitter to delays.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// The default policy with a different retry count.
    pub fn with_max_retries(max_retries: usize) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Returns the delay before the given retry, or `None` if retries are exhausted.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The retry number (1-indexed, so 1 = first retry)
    pub fn delay_for_attempt(&self, attempt: usize) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_retries {
            return None;
        }

        let multiplier = 2u32.saturating_pow(attempt.saturating_sub(1) as u32);
        let delay = self
            .initial_delay
            .saturating_mul(multiplier)
            .min(self.max_delay);

        if self.jitter {
            let jitter_factor = rand::thread_rng().gen_range(0.5..=1.0);
            // Float rounding can overshoot near Duration::MAX
            Some(Duration::try_from_secs_f64(delay.as_secs_f64() * jitter_factor).unwrap_or(delay))
        } else {
            Some(delay)
        }
    }
}

/// Trait for determining whether a failed request should be retried.
///
/// # Examples
///
/// ```
/// use scryfall_api::{Error, RetryPredicate};
///
/// struct RetryOnlyRateLimits;
///
/// impl RetryPredicate for RetryOnlyRateLimits {
///     fn should_retry(&self, error: &Error, _attempt: usize) -> bool {
///         matches!(error, Error::RateLimited { .. })
///     }
/// }
/// ```
pub trait RetryPredicate: Send + Sync {
    /// Determines whether the request should be retried based on the error.
    ///
    /// # Arguments
    ///
    /// * `error` - The classified error of the failed attempt
    /// * `attempt` - The attempt number that failed (1-indexed)
    fn should_retry(&self, error: &Error, attempt: usize) -> bool;
}

/// Retry rate limiting, server errors and network failures.
///
/// This uses [`Error::is_retryable`] and is the default predicate.
#[derive(Debug, Clone, Copy)]
pub struct RetryOnTransient;

impl RetryPredicate for RetryOnTransient {
    fn should_retry(&self, error: &Error, _attempt: usize) -> bool {
        error.is_retryable()
    }
}
