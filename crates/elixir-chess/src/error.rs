use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Why a move request was rejected.
///
/// Every rejection is reported to the requesting client only and leaves the
/// game state untouched. Serialized as its snake_case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum MoveError {
    #[error("Bad coords")]
    BadCoordinates,

    #[error("Out of bounds")]
    OutOfBounds,

    #[error("No piece at source")]
    NoPieceAtSource,

    #[error("You do not own this piece")]
    NotOwner,

    #[error("Not enough elixir")]
    InsufficientResource,

    #[error("Invalid move")]
    IllegalMove,
}

impl MoveError {
    /// Stable machine-readable code sent to clients.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BadCoordinates => "bad_coordinates",
            Self::OutOfBounds => "out_of_bounds",
            Self::NoPieceAtSource => "no_piece_at_source",
            Self::NotOwner => "not_owner",
            Self::InsufficientResource => "insufficient_resource",
            Self::IllegalMove => "illegal_move",
        }
    }
}

/// Misuse of [`ElixirLedger`](crate::ledger::ElixirLedger).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("player {player} cannot pay {cost} elixir with a balance of {balance}")]
    Overdraft { player: Player, balance: u8, cost: u8 },
}

/// Errors that stop the server process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
