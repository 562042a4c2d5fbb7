//! Derivation pipeline: history -> turn, history -> board -> outcome.
//!
//! Every function here is pure and total. Nothing is cached; callers derive
//! again from the current history and registry whenever either changes.
//!
//! # 学習ポイント
//! - 状態を持たない: 入力は `&MoveHistory` と `&PlayerRegistry` だけ。盤面も勝敗も毎回計算し直す
//! - 手番は「直前の手の反対」で決める。手数を数えて偶奇で決めるやり方はしない
//! - 盤面の復元は古い手から順に書き込む（`MoveHistory::chronological`）
//! - 勝者を先に求めてから引き分けを判定する。9 手目で列が揃えば勝ちであって引き分けではない
//!
//! # パイプライン
//! ```text
//! MoveHistory ──> next_turn ─────────────────────────> active
//!      │
//!      └──────> reconstruct_board ──> evaluate_winner ──> is_draw ──> Outcome
//!                                          ▲
//!                             PlayerRegistry (勝者の名前)
//! ```

pub mod board;
pub mod outcome;
pub mod turn;
pub mod view;

pub use self::board::reconstruct_board;
pub use self::outcome::{derive_outcome, evaluate_winner, is_draw};
pub use self::turn::next_turn;
pub use self::view::{GameView, PlayerView};
