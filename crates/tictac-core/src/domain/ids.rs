//! Session and round identifiers.
//!
//! # 学習ポイント
//! - `SessionId` は ULID の newtype。1 つの卓（名前の登録簿を共有する対局の並び）を表す
//! - `RoundId` は「どのセッションの何局目か」。restart のたびに番号が 1 つ進む
//! - 局番号は 1 始まり。`NonZeroU32` にして 0 局目を表現できないようにしている
//!
//! ULID が必要なのはセッションだけ。ラウンドはセッション内の通し番号で一意になる。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use ulid::Ulid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Ulid);

impl SessionId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(self) -> Ulid {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// The `number`-th round played in `session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundId {
    session: SessionId,
    number: NonZeroU32,
}

impl RoundId {
    pub fn first(session: SessionId) -> Self {
        Self {
            session,
            number: NonZeroU32::MIN,
        }
    }

    /// The round a restart opens.
    pub fn next(self) -> Self {
        Self {
            session: self.session,
            number: self.number.saturating_add(1),
        }
    }

    pub fn session(self) -> SessionId {
        self.session
    }

    pub fn number(self) -> u32 {
        self.number.get()
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round-{}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_count_up_within_a_session() {
        let session = SessionId::from_ulid(Ulid::new());
        let first = RoundId::first(session);
        let third = first.next().next();

        assert_eq!(first.number(), 1);
        assert_eq!(third.number(), 3);
        assert_eq!(third.session(), session);
        assert_eq!(third.to_string(), "round-3");
    }

    #[test]
    fn same_number_in_another_session_is_another_round() {
        let a = RoundId::first(SessionId::from_ulid(Ulid::new()));
        let b = RoundId::first(SessionId::from_ulid(Ulid::new()));
        assert_ne!(a, b);
    }

    #[test]
    fn json_shape() {
        let ulid = Ulid::new();
        let session = SessionId::from_ulid(ulid);
        let round = RoundId::first(session).next();

        assert_eq!(serde_json::to_value(session).unwrap(), ulid.to_string());
        let json = serde_json::to_value(round).unwrap();
        assert_eq!(json["session"], ulid.to_string());
        assert_eq!(json["number"], 2);

        let back: RoundId = serde_json::from_value(json).unwrap();
        assert_eq!(back, round);
    }

    #[test]
    fn round_zero_is_rejected_on_load() {
        let json = serde_json::json!({ "session": Ulid::new().to_string(), "number": 0 });
        assert!(serde_json::from_value::<RoundId>(json).is_err());
    }
}
