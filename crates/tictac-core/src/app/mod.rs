//! App - the session layer that records moves and feeds the derivations.

pub mod builder;
pub mod session;

pub use self::builder::{BuildError, SessionBuilder};
pub use self::session::GameSession;
