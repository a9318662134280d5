//! # Elixir Chess
//!
//! A real-time two-player chess variant. There are no turns: any piece may act
//! whenever its owner has the elixir to pay for it, and elixir regenerates on a
//! fixed clock.
//!
//! ## Rules in short
//!
//! - Pieces move like chess pieces, minus every special rule.
//! - Acting costs the piece's elixir; balances cap at 10.
//! - Moving onto an empty cell relocates the piece.
//! - Moving onto an enemy attacks it for 5 damage instead. The attacker stays
//!   put, and the target is removed once its health reaches zero.
//!
//! ## Layout
//!
//! - `types` - board, pieces and snapshots
//! - `rules` - legal destinations per archetype
//! - `ledger` - elixir balances
//! - `engine` - the validate-then-apply move transaction
//! - `arena` - the shared game behind one lock, with snapshot publishing
//! - `scheduler` - background regeneration
//! - `gateway` - axum routes and the WebSocket channel
//! - `server` - wiring everything into a running process

pub mod arena;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod rules;
pub mod scheduler;
pub mod server;
pub mod types;

pub use arena::Arena;
pub use config::ServerConfig;
pub use engine::{GameState, MoveOutcome, COMBAT_DAMAGE};
pub use error::{LedgerError, MoveError, ServerError};
pub use ledger::{ElixirLedger, MAX_ELIXIR};
