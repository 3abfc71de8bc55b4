//! Retry policy.

use std::time::Duration;

/// How many times to try an operation and how long to wait in between.
///
/// The wait after failed attempt `n` (1-indexed) is
/// `initial_delay * 2^(n-1)`. Every failure is retried the same way; there
/// is no filtering by error type.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use eventdesk_lib::retry::RetryPolicy;
///
/// // 3 attempts, 1s initial delay
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.delay_after(2), Duration::from_secs(2));
///
/// let quick = RetryPolicy::default()
///     .max_attempts(5)
///     .initial_delay(Duration::from_millis(100));
///
/// let once = RetryPolicy::no_retry();
/// assert_eq!(once.max_attempts, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero behaves like one.
    pub max_attempts: u32,
    /// Wait after the first failed attempt (doubles each attempt).
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// A policy that makes a single attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Sets the total number of attempts.
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    /// Sets the wait after the first failed attempt.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Returns the wait that follows failed attempt `attempt` (1-indexed).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u32
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.initial_delay.saturating_mul(factor)
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
