//! EventSink implementations.
//!
//! - [`NoopEventSink`]: drops everything.
//! - [`TracingEventSink`]: one structured `tracing` event per game event.
//! - [`InMemoryEventSink`]: keeps events for later inspection.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::GameEvent;
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &GameEvent) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &GameEvent) {
        let meta = event.meta();
        match event {
            GameEvent::MovePlayed {
                mv, move_number, ..
            } => info!(
                session_id = %meta.session_id,
                round_id = %meta.round_id,
                symbol = %mv.symbol,
                position = %mv.position,
                move_number,
                "move played"
            ),
            GameEvent::PlayerRenamed {
                symbol, from, to, ..
            } => info!(
                session_id = %meta.session_id,
                %symbol,
                from = from.as_str(),
                to = to.as_str(),
                "player renamed"
            ),
            GameEvent::RoundRestarted { previous_round, .. } => info!(
                session_id = %meta.session_id,
                round_id = %meta.round_id,
                %previous_round,
                "round restarted"
            ),
            GameEvent::RoundFinished { outcome, .. } => info!(
                session_id = %meta.session_id,
                round_id = %meta.round_id,
                outcome = ?outcome,
                "round finished"
            ),
        }
    }
}

/// Collects events behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    events: Mutex<Vec<GameEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything emitted so far, oldest first.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(GameEvent::name).collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn emit(&self, event: &GameEvent) {
        // 記録中に panic したテストがあっても、それまでのイベントは残す
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
