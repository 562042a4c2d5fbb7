//! SessionBuilder - wiring and start-up validation for a [`GameSession`].
//!
//! # 学習ポイント
//! - Builder パターン: 設定とポート（Clock / IdGenerator / EventSink）を差し替え可能にする
//! - `build()` で設定を検証し、不正な名前は起動時に弾く（fail-fast）
//! - IdGenerator を指定しなければ、builder の Clock を使う `UlidGenerator` になる

use std::sync::Arc;

use super::session::GameSession;
use crate::config::{ConfigError, GameConfig};
use crate::impls::TracingEventSink;
use crate::ports::{Clock, EventSink, IdGenerator, SystemClock, UlidGenerator};

/// Builds a session from a config plus optional port overrides.
///
/// ```ignore
/// let session = SessionBuilder::new()
///     .config(GameConfig::load("tictac.json")?)
///     .event_sink(InMemoryEventSink::new())
///     .build()?;
/// ```
///
/// Defaults: [`SystemClock`] and [`TracingEventSink`]. `build()` validates
/// the configured names and fails fast on a blank one.
pub struct SessionBuilder {
    config: GameConfig,
    clock: Arc<dyn Clock>,
    ids: Option<Box<dyn IdGenerator>>,
    sink: Arc<dyn EventSink>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            clock: Arc::new(SystemClock),
            ids: None,
            sink: Arc::new(TracingEventSink),
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn build(self) -> Result<GameSession, BuildError> {
        self.config.validate()?;
        let session_id = match &self.ids {
            Some(ids) => ids.generate_session_id(),
            None => UlidGenerator::new(self.clock.clone()).generate_session_id(),
        };
        Ok(GameSession::new(
            session_id,
            self.config.players,
            self.clock,
            self.sink,
        ))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
