//! HTTP and WebSocket surface in front of the [`Arena`].
//!
//! - `router` - route table
//! - `handlers` - page, health, state and move-hint endpoints
//! - `ws` - the persistent channel
//! - `protocol` - WebSocket frame types
//! - `sessions` - live connection registry

use std::sync::Arc;

use crate::arena::Arena;

pub mod handlers;
pub mod protocol;
pub mod router;
pub mod sessions;
pub mod ws;

pub use router::build_router;
pub use sessions::{SessionId, SessionRegistry};

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// The game.
    pub arena: Arc<Arena>,
    /// Connected clients.
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Create the gateway state around `arena`.
    #[must_use]
    pub fn new(arena: Arc<Arena>) -> Self {
        Self {
            arena,
            sessions: SessionRegistry::new(),
        }
    }
}
