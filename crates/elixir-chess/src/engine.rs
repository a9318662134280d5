//! The move transaction over board and ledger.
//!
//! [`GameState`] is plain data with no interior locking. It is only ever
//! mutated through [`Arena`](crate::arena::Arena), which serializes access.

use chrono::Utc;

use crate::error::MoveError;
use crate::ledger::ElixirLedger;
use crate::rules::{is_legal_destination, legal_destinations};
use crate::types::{Board, Cell, LastMove, MoveRequest, Player, Snapshot};

/// Health removed from the target of an attack.
pub const COMBAT_DAMAGE: u16 = 5;

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved onto an empty cell.
    Moved,
    /// The target survived the attack with `remaining` health.
    Struck { remaining: u16 },
    /// The target was destroyed and removed.
    Destroyed,
}

/// Board, ledger and last-move record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    ledger: ElixirLedger,
    last_move: Option<LastMove>,
}

impl GameState {
    /// The starting layout with both players at zero elixir.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Board::starting(), ElixirLedger::new())
    }

    /// Build a state from an arbitrary board and ledger.
    #[must_use]
    pub fn from_parts(board: Board, ledger: ElixirLedger) -> Self {
        Self {
            board,
            ledger,
            last_move: None,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current balances.
    #[must_use]
    pub fn ledger(&self) -> &ElixirLedger {
        &self.ledger
    }

    /// The most recent accepted move.
    #[must_use]
    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    /// Validate `request` and apply it.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// bounds, source occupancy, ownership, elixir, movement rules. Nothing is
    /// mutated unless every check passes.
    ///
    /// An accepted move always costs the piece's elixir. Onto an empty cell
    /// the piece relocates. Onto an opponent the target takes
    /// [`COMBAT_DAMAGE`] and is removed at zero health, while the attacker
    /// stays where it is either way.
    pub fn apply_move(&mut self, request: &MoveRequest) -> Result<MoveOutcome, MoveError> {
        let (Some(from), Some(to)) = (
            Cell::from_coords(request.from.0, request.from.1),
            Cell::from_coords(request.to.0, request.to.1),
        ) else {
            return Err(MoveError::OutOfBounds);
        };

        let piece = *self.board.get(from).ok_or(MoveError::NoPieceAtSource)?;

        let player = piece.owner();
        if Player::from_tag(&request.player) != Some(player) {
            return Err(MoveError::NotOwner);
        }

        if !self.ledger.can_afford(player, piece.cost()) {
            return Err(MoveError::InsufficientResource);
        }

        if !is_legal_destination(&piece, from, to, &self.board) {
            return Err(MoveError::IllegalMove);
        }

        self.ledger
            .debit(player, piece.cost())
            .map_err(|_| MoveError::InsufficientResource)?;

        let strike = self
            .board
            .get_mut(to)
            .map(|target| (target.take_damage(COMBAT_DAMAGE), target.health()));

        let outcome = match strike {
            Some((true, _)) => {
                self.board.take(to);
                MoveOutcome::Destroyed
            }
            Some((false, remaining)) => MoveOutcome::Struck { remaining },
            None => {
                self.board.take(from);
                self.board.place(to, piece);
                MoveOutcome::Moved
            }
        };

        self.last_move = Some(LastMove {
            from,
            to,
            player: request.player.clone(),
            at: Utc::now(),
        });

        Ok(outcome)
    }

    /// Add one elixir to each player, up to the cap.
    pub fn regenerate(&mut self) {
        self.ledger.regenerate();
    }

    /// Legal destinations of whatever stands on `(row, col)`.
    pub fn destinations_from(&self, row: i64, col: i64) -> Result<Vec<Cell>, MoveError> {
        let from = Cell::from_coords(row, col).ok_or(MoveError::OutOfBounds)?;
        let piece = self.board.get(from).ok_or(MoveError::NoPieceAtSource)?;
        Ok(legal_destinations(piece, from, &self.board))
    }

    /// Copy the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            elixir: self.ledger,
            last_move: self.last_move.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
