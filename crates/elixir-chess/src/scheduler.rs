//! Background elixir regeneration.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::arena::Arena;

/// Ticks the arena's ledgers at a fixed period until cancelled.
///
/// Each tick is one [`Arena::regenerate`] transaction, which also pushes the
/// resulting snapshot to every subscriber.
#[derive(Debug, Clone)]
pub struct RegenScheduler {
    arena: Arc<Arena>,
    period: Duration,
    cancel: CancellationToken,
}

impl RegenScheduler {
    /// Create a scheduler. `period` must be non-zero.
    #[must_use]
    pub fn new(arena: Arc<Arena>, period: Duration, cancel: CancellationToken) -> Self {
        Self {
            arena,
            period,
            cancel,
        }
    }

    /// Spawn [`RegenScheduler::run`] on the current runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    /// Run the tick loop. Returns once the cancellation token is cancelled.
    ///
    /// The first tick fires immediately. Late ticks are not bunched up: after
    /// a stall the next tick comes one full period later.
    #[instrument(skip_all)]
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(period = ?self.period, "regeneration started");

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {
                    self.arena.regenerate();
                }
            }
        }

        debug!("regeneration stopped");
    }
}
