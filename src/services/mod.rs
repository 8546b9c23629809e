//! Business logic services

pub mod clock;
pub mod library;

pub use clock::{Clock, SystemClock};
pub use library::{LibraryManager, LoadOutcome};
