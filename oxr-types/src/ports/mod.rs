//! Port traits (interfaces for adapters).
//!
//! The client depends on these traits, not on a concrete HTTP stack or
//! the wall clock, so both can be swapped in tests.

mod clock;
mod transport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use transport::{HttpResponse, HttpTransport};
