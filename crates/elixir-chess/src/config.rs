use crate::error::ServerError;
use std::time::Duration;

/// Configuration for the game server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP/WebSocket gateway listens on. Default: 0.0.0.0:5000.
    pub listen_addr: String,
    /// Time between elixir regeneration ticks. Default: 1.5s.
    pub regen_interval: Duration,
    /// Snapshots buffered per subscriber before a slow client starts
    /// skipping ahead. Default: 64.
    pub broadcast_capacity: usize,
}

impl ServerConfig {
    /// Validate configuration values.
    ///
    /// Checks:
    /// - `listen_addr` is not empty
    /// - `regen_interval > 0` (a zero period would spin the scheduler)
    /// - `broadcast_capacity >= 1` (the broadcast channel rejects zero)
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.listen_addr.trim().is_empty() {
            return Err(ServerError::InvalidConfig {
                reason: "listen_addr must not be empty".to_string(),
            });
        }
        if self.regen_interval.is_zero() {
            return Err(ServerError::InvalidConfig {
                reason: "regen_interval must be > 0".to_string(),
            });
        }
        if self.broadcast_capacity == 0 {
            return Err(ServerError::InvalidConfig {
                reason: "broadcast_capacity must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            regen_interval: Duration::from_millis(1500),
            broadcast_capacity: 64,
        }
    }
}
