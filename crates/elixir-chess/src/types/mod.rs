//! Type definitions for the game.
//!
//! ## Modules
//!
//! - `piece` - Players, piece archetypes and pieces
//! - `board` - Cells and the 8x8 board
//! - `game` - Move requests, last-move record and snapshots

pub mod board;
pub mod game;
pub mod piece;

// Re-export commonly used types
pub use board::{Board, Cell, BOARD_SIZE};
pub use game::{LastMove, MoveRequest, Snapshot};
pub use piece::{Piece, PieceType, Player};
