//! GameSession - records moves and owns the two pieces of state.
//!
//! The session is the only place that changes anything. It holds the current
//! `MoveHistory` and `PlayerRegistry` and swaps each for a new value on every
//! write; all observable state is derived from them through [`GameView`].
//!
//! # 学習ポイント
//! - 書き込みは「新しい値を作って丸ごと差し替える」だけ。`&mut` で中身をいじらない
//! - 終局後の手は `MoveError::GameOver` で拒否する。導出関数の側では検査しない
//! - イベントは EventSink に投げっぱなし。sink の失敗で操作を失敗させない
//!
//! # ラウンド
//! `restart()` は履歴を空にし、`RoundId::next` で局番号を進める。
//! プレイヤー名はラウンドをまたいで残る。

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::derive::{GameView, next_turn};
use crate::domain::{
    EventMeta, GameEvent, Move, MoveError, MoveHistory, PlayerRegistry, Position, RoundId,
    SessionError, SessionId, Symbol,
};
use crate::ports::{Clock, EventSink};

pub struct GameSession {
    session_id: SessionId,
    round_id: RoundId,
    history: MoveHistory,
    players: PlayerRegistry,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl GameSession {
    pub(crate) fn new(
        session_id: SessionId,
        players: PlayerRegistry,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let round_id = RoundId::first(session_id);
        info!(%session_id, %round_id, "session opened");
        Self {
            session_id,
            round_id,
            history: MoveHistory::empty(),
            players,
            clock,
            sink,
        }
    }

    /// Everything a renderer needs, derived from the current state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.history, &self.players)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Places the active symbol on `position`.
    ///
    /// Rejects the move once the round has a winner or is drawn, and when the
    /// square is already taken. On success the history is replaced by one
    /// with the new move at its head.
    #[instrument(skip(self), fields(session_id = %self.session_id, round_id = %self.round_id))]
    pub fn select_square(&mut self, position: Position) -> Result<GameView, SessionError> {
        if self.view().is_over() {
            warn!(%position, "move after the round ended");
            return Err(MoveError::GameOver.into());
        }

        let mv = Move::new(position, next_turn(&self.history));
        let next = self.history.with_move(mv).inspect_err(|err| {
            warn!(%position, error = %err, "move rejected");
        })?;
        self.history = next;
        debug!(symbol = %mv.symbol, %position, "move recorded");

        self.emit(|meta| GameEvent::MovePlayed {
            meta,
            mv,
            move_number: self.history.len(),
        });

        let view = self.view();
        if view.is_over() {
            info!(outcome = ?view.outcome, "round finished");
            let outcome = view.outcome.clone();
            self.emit(|meta| GameEvent::RoundFinished { meta, outcome });
        }
        Ok(view)
    }

    /// `select_square` with raw coordinates.
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameView, SessionError> {
        let position = Position::new(row, col)?;
        self.select_square(position)
    }

    /// Replaces one display name. History and the other name are untouched.
    #[instrument(skip(self, name), fields(session_id = %self.session_id))]
    pub fn rename_player(&mut self, symbol: Symbol, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName(symbol));
        }

        let from = self.players.name(symbol).to_string();
        if from == name {
            return Ok(());
        }
        self.players = self.players.with_name(symbol, name);
        debug!(%symbol, from = from.as_str(), to = name, "player renamed");

        let to = name.to_string();
        self.emit(|meta| GameEvent::PlayerRenamed {
            meta,
            symbol,
            from,
            to,
        });
        Ok(())
    }

    /// Empties the history and opens the next round. Names carry over.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn restart(&mut self) -> RoundId {
        let previous_round = self.round_id;
        self.round_id = self.round_id.next();
        self.history = MoveHistory::empty();
        info!(%previous_round, round_id = %self.round_id, "round restarted");

        self.emit(|meta| GameEvent::RoundRestarted {
            meta,
            previous_round,
        });
        self.round_id
    }

    fn emit(&self, make: impl FnOnce(EventMeta) -> GameEvent) {
        let meta = EventMeta {
            session_id: self.session_id,
            round_id: self.round_id,
            at: self.clock.now(),
        };
        self.sink.emit(&make(meta));
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("session_id", &self.session_id)
            .field("round_id", &self.round_id)
            .field("history", &self.history)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}
