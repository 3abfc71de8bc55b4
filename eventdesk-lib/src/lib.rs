//! EventDesk client library
//!
//! Validation, failure normalization and retry policy for the EventDesk
//! events API, plus the async HTTP client and form glue built on top of them.

pub mod clock;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod normalize;
pub mod retry;
pub mod validation;

mod client;

pub use client::*;
pub use normalize::NormalizedFailure;
pub use normalize::normalize;
pub use normalize::with_error_handling;
pub use retry::with_retry;
pub use validation::validate_attendee;
pub use validation::validate_event;
