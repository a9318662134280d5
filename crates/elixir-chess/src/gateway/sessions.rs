//! Registry of live client connections.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one client connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connected sessions and the player tag each one joined as, if any.
///
/// Purely informational: ownership checks never consult it.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Option<String>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection.
    pub fn open(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, None);
        id
    }

    /// Record the tag `id` claims. Returns the previously claimed tag.
    pub fn join(&self, id: SessionId, tag: impl Into<String>) -> Option<String> {
        self.sessions
            .get_mut(&id)
            .and_then(|mut entry| entry.value_mut().replace(tag.into()))
    }

    /// The tag `id` joined as.
    #[must_use]
    pub fn player_of(&self, id: SessionId) -> Option<String> {
        self.sessions.get(&id).and_then(|entry| entry.value().clone())
    }

    /// Forget a connection. Returns the tag it had joined as.
    pub fn close(&self, id: SessionId) -> Option<String> {
        self.sessions.remove(&id).and_then(|(_, tag)| tag)
    }

    /// Number of live connections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if nobody is connected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
