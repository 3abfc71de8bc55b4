use std::fmt::Display;
use std::future::Future;

use log::warn;

use super::RetryPolicy;
use super::Sleeper;
use super::TokioSleeper;

/// Runs `operation` until it succeeds or the policy's attempts run out.
///
/// Returns the last failure unchanged once attempts are exhausted.
///
/// # Example
///
/// ```ignore
/// let events = with_retry(&RetryPolicy::default(), || client.list_events()).await?;
/// ```
pub async fn with_retry<T, E, F, Fut>(policy: &RetryPolicy, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    with_retry_using(policy, &TokioSleeper, operation).await
}

/// Like [`with_retry`], waiting through the given sleeper.
pub async fn with_retry_using<T, E, F, Fut, S>(
    policy: &RetryPolicy,
    sleeper: &S,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    S: Sleeper + ?Sized,
{
    let max_attempts = policy.attempts();
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Attempt {attempt}/{max_attempts} failed: {e}");
                if attempt >= max_attempts {
                    return Err(e);
                }
                sleeper.sleep(policy.delay_after(attempt)).await;
                attempt += 1;
            }
        }
    }
}
