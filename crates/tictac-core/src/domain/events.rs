//! Events - what a session reports to its [`EventSink`](crate::ports::EventSink).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{RoundId, SessionId};
use super::moves::Move;
use super::outcome::Outcome;
use super::symbol::Symbol;

/// Where and when an event happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    pub session_id: SessionId,
    pub round_id: RoundId,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A move was appended; `move_number` is 1-based.
    MovePlayed {
        meta: EventMeta,
        #[serde(rename = "move")]
        mv: Move,
        move_number: usize,
    },

    PlayerRenamed {
        meta: EventMeta,
        symbol: Symbol,
        from: String,
        to: String,
    },

    /// History reset; `meta.round_id` is the new round.
    RoundRestarted {
        meta: EventMeta,
        previous_round: RoundId,
    },

    /// The round reached a terminal outcome.
    RoundFinished { meta: EventMeta, outcome: Outcome },
}

impl GameEvent {
    pub fn meta(&self) -> &EventMeta {
        match self {
            GameEvent::MovePlayed { meta, .. }
            | GameEvent::PlayerRenamed { meta, .. }
            | GameEvent::RoundRestarted { meta, .. }
            | GameEvent::RoundFinished { meta, .. } => meta,
        }
    }

    /// Short machine name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::MovePlayed { .. } => "move_played",
            GameEvent::PlayerRenamed { .. } => "player_renamed",
            GameEvent::RoundRestarted { .. } => "round_restarted",
            GameEvent::RoundFinished { .. } => "round_finished",
        }
    }
}
