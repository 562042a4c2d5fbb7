//! EventSink port - where a session reports what happened.

use crate::domain::GameEvent;

/// Receives session events.
///
/// Delivery is fire-and-forget: a sink must not fail the operation that
/// produced the event.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event: &GameEvent) {
        (**self).emit(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    fn emit(&self, event: &GameEvent) {
        (**self).emit(event)
    }
}
