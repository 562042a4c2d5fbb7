//! Ports - the seams a session is wired through.
//!
//! The derivation functions need none of these; they only serve the session
//! layer (timestamps, ids, event reporting).

pub mod clock;
pub mod event_sink;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
