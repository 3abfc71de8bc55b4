//! Retry with exponential backoff.

mod policy;
mod run;
mod sleep;

pub use policy::RetryPolicy;
pub use run::with_retry;
pub use run::with_retry_using;
pub use sleep::Sleeper;
pub use sleep::TokioSleeper;
