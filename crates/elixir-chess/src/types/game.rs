//! Game-level records: move requests, the last-move record and snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use crate::ledger::ElixirLedger;

/// A move as submitted by a client, after coordinates were parsed as integers.
///
/// Coordinates are not bounds-checked yet; that is the first validation step
/// of a move transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Claimed player tag (`"1"` or `"2"` for a real player).
    pub player: String,
    /// Source `(row, col)`.
    pub from: (i64, i64),
    /// Destination `(row, col)`.
    pub to: (i64, i64),
}

impl MoveRequest {
    /// Create a move request.
    #[must_use]
    pub fn new(player: impl Into<String>, from: (i64, i64), to: (i64, i64)) -> Self {
        Self {
            player: player.into(),
            from,
            to,
        }
    }
}

/// The most recently applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    /// Source cell.
    pub from: Cell,
    /// Destination cell (the attacked cell for strikes).
    pub to: Cell,
    /// Tag of the acting player.
    pub player: String,
    /// When the move was applied.
    pub at: DateTime<Utc>,
}

/// An immutable copy of the game state, as pushed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Elixir balances, keyed `"1"` and `"2"`.
    pub elixir: ElixirLedger,
    /// The last applied move, if any move was made yet.
    pub last_move: Option<LastMove>,
}
