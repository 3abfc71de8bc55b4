//! Wire and draft types for events and attendees.

mod attendee;
mod event;

pub use attendee::*;
pub use event::*;
