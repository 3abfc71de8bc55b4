//! Error types

mod api;
mod failure;

pub use api::*;
pub use failure::*;
