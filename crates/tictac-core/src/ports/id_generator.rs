//! IdGenerator port - session id allocation.
//!
//! Rounds need no generator: they are numbered inside their session
//! (see [`RoundId::next`](crate::domain::RoundId::next)).

use crate::domain::ids::SessionId;
use crate::ports::Clock;
use ulid::Ulid;

pub trait IdGenerator: Send + Sync {
    fn generate_session_id(&self) -> SessionId;
}

/// Session ids whose ULID timestamp comes from a [`Clock`].
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_session_id(&self) -> SessionId {
        // 時刻部分だけ Clock から取る。FixedClock でも乱数部分で区別できる
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        SessionId::from_ulid(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
