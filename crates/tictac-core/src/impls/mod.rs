//! Impls - port implementations shipped with the core.

pub mod event_sinks;

pub use self::event_sinks::{InMemoryEventSink, NoopEventSink, TracingEventSink};
