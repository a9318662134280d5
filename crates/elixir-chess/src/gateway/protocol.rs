//! JSON frames exchanged over the WebSocket channel.
//!
//! Frames are objects tagged by `"type"`. Inbound frames are decoded
//! leniently: player tags may be strings or numbers, and coordinates may be
//! integers or integer strings. Anything else in a coordinate slot is
//! reported as [`MoveError::BadCoordinates`] before the move reaches the
//! arena.

use std::num::IntErrorKind;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MoveError;
use crate::types::{MoveRequest, Snapshot};

/// A frame sent by a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Announce which player this connection plays as.
    Join {
        #[serde(default)]
        player: Value,
    },
    /// Submit a move.
    Move {
        #[serde(default)]
        player: Value,
        #[serde(default)]
        from_row: Value,
        #[serde(default)]
        from_col: Value,
        #[serde(default)]
        to_row: Value,
        #[serde(default)]
        to_col: Value,
    },
}

impl ClientMessage {
    /// Decode a text frame.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Turn the raw fields of a move frame into a [`MoveRequest`].
pub fn move_request(
    player: &Value,
    from_row: &Value,
    from_col: &Value,
    to_row: &Value,
    to_col: &Value,
) -> Result<MoveRequest, MoveError> {
    let coord = |v: &Value| integer(v).ok_or(MoveError::BadCoordinates);
    Ok(MoveRequest::new(
        player_tag(player),
        (coord(from_row)?, coord(from_col)?),
        (coord(to_row)?, coord(to_col)?),
    ))
}

/// Render a claimed player identity as a tag.
///
/// Strings are used as-is and numbers by their decimal form, so `1` and
/// `"1"` claim the same player. Anything else yields a tag no piece matches.
#[must_use]
pub fn player_tag(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
        Value::String(s) => parse_coordinate(s),
        _ => None,
    }
}

/// Parse a decimal coordinate, tolerating surrounding whitespace.
///
/// Integers too large for `i64` saturate, so they fail the bounds check as
/// [`MoveError::OutOfBounds`] instead of being mistaken for non-numbers.
pub(crate) fn parse_coordinate(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Status of a move result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveStatus {
    Ok,
    Error,
}

/// A frame sent by the server.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full state push.
    State {
        #[serde(flatten)]
        state: Arc<Snapshot>,
    },
    /// Reply to a join.
    Joined { player: String, state: Arc<Snapshot> },
    /// Reply to a move, sent to the requester only.
    MoveResult {
        status: MoveStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        game_state: Option<Arc<Snapshot>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<MoveError>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// The frame could not be understood at all.
    Error { message: String },
}

impl ServerMessage {
    /// Full state push.
    #[must_use]
    pub fn state(state: Arc<Snapshot>) -> Self {
        Self::State { state }
    }

    /// Successful move reply.
    #[must_use]
    pub fn move_accepted(state: Arc<Snapshot>) -> Self {
        Self::MoveResult {
            status: MoveStatus::Ok,
            game_state: Some(state),
            code: None,
            message: None,
        }
    }

    /// Rejected move reply.
    #[must_use]
    pub fn move_rejected(err: MoveError) -> Self {
        Self::MoveResult {
            status: MoveStatus::Error,
            game_state: None,
            code: Some(err),
            message: Some(err.to_string()),
        }
    }

    /// Encode as a text frame.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
