//! Collapses failures into a single user-facing message.

use std::fmt::Debug;
use std::future::Future;

use log::error;
use serde::Serialize;

use crate::error::Failure;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// What the user sees when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedFailure {
    pub message: String,
}

impl std::fmt::Display for NormalizedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Maps a failure to its user-facing message.
///
/// Application messages are surfaced verbatim, then any other message the
/// failure carries, then [`FALLBACK_MESSAGE`]. The failure is logged in
/// every case.
pub fn normalize(failure: &Failure) -> NormalizedFailure {
    error!("API error: {failure:?}");

    let message = match failure {
        Failure::Application(app) => app.message.clone(),
        Failure::Transport { message } | Failure::Generic { message } => message.clone(),
        Failure::Unknown => FALLBACK_MESSAGE.to_string(),
    };

    NormalizedFailure { message }
}

impl From<&Failure> for NormalizedFailure {
    fn from(failure: &Failure) -> Self {
        normalize(failure)
    }
}

impl From<Failure> for NormalizedFailure {
    fn from(failure: Failure) -> Self {
        normalize(&failure)
    }
}

/// Runs `operation`, logging a failure under `context` before passing it on.
///
/// ```ignore
/// let events = with_error_handling("list events", || client.list_events()).await?;
/// ```
pub async fn with_error_handling<T, E, F, Fut>(context: &str, operation: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Debug,
{
    operation().await.inspect_err(|e| error!("Error in {context}: {e:?}"))
}
