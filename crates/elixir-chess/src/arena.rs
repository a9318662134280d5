//! Shared ownership of the one game.
//!
//! `Arena` is the only way to touch [`GameState`] once the server runs. Every
//! mutation takes the state lock for its whole validate-and-apply sequence,
//! then publishes a fresh [`Snapshot`] while still holding it:
//!
//! - into an `ArcSwap`, so readers get the latest complete state without
//!   taking the lock, and
//! - onto a broadcast channel, so subscribers see snapshots in exactly the
//!   order the transactions committed.
//!
//! The lock is a `parking_lot::Mutex` and is never held across an `.await`.
//! Work under it is bounded by a board scan.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info, trace};

use crate::engine::{GameState, MoveOutcome};
use crate::error::MoveError;
use crate::types::{Cell, MoveRequest, Snapshot};

/// The shared game: state behind one lock plus its published snapshot.
#[derive(Debug)]
pub struct Arena {
    state: Mutex<GameState>,
    published: ArcSwap<Snapshot>,
    updates: broadcast::Sender<Arc<Snapshot>>,
}

impl Arena {
    /// A fresh game in the starting layout.
    ///
    /// `capacity` bounds how many snapshots a subscriber may fall behind
    /// before it starts skipping. Must be at least 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_state(GameState::new(), capacity)
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn with_state(state: GameState, capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(capacity);
        let published = ArcSwap::from_pointee(state.snapshot());
        Self {
            state: Mutex::new(state),
            published,
            updates,
        }
    }

    /// Run one move transaction.
    ///
    /// On success the new snapshot has already been published and broadcast
    /// when this returns. On rejection nothing changed and nothing is sent.
    pub fn apply_move(&self, request: &MoveRequest) -> Result<Arc<Snapshot>, MoveError> {
        let mut state = self.state.lock();
        match state.apply_move(request) {
            Ok(outcome) => {
                let snapshot = self.publish(&state);
                drop(state);
                match outcome {
                    MoveOutcome::Moved => info!(
                        player = %request.player,
                        from = ?request.from,
                        to = ?request.to,
                        "piece moved"
                    ),
                    MoveOutcome::Struck { remaining } => info!(
                        player = %request.player,
                        from = ?request.from,
                        to = ?request.to,
                        remaining,
                        "piece struck"
                    ),
                    MoveOutcome::Destroyed => info!(
                        player = %request.player,
                        from = ?request.from,
                        to = ?request.to,
                        "piece destroyed"
                    ),
                }
                Ok(snapshot)
            }
            Err(err) => {
                drop(state);
                debug!(
                    player = %request.player,
                    from = ?request.from,
                    to = ?request.to,
                    code = err.code(),
                    "move rejected"
                );
                Err(err)
            }
        }
    }

    /// Run one regeneration tick and publish the result, changed or not.
    pub fn regenerate(&self) -> Arc<Snapshot> {
        let mut state = self.state.lock();
        state.regenerate();
        let snapshot = self.publish(&state);
        drop(state);
        trace!(elixir = ?snapshot.elixir, "elixir regenerated");
        snapshot
    }

    /// The latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.published.load_full()
    }

    /// Legal destinations of the piece on `(row, col)` in the current state.
    pub fn destinations_from(&self, row: i64, col: i64) -> Result<Vec<Cell>, MoveError> {
        self.state.lock().destinations_from(row, col)
    }

    /// Receive every snapshot published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Snapshot>> {
        self.updates.subscribe()
    }

    /// Must be called with the state lock held.
    fn publish(&self, state: &GameState) -> Arc<Snapshot> {
        let snapshot = Arc::new(state.snapshot());
        self.published.store(Arc::clone(&snapshot));
        // No subscribers is not an error.
        let _ = self.updates.send(Arc::clone(&snapshot));
        snapshot
    }
}
