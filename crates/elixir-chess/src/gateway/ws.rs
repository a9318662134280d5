//! The persistent client channel.
//!
//! Each connection gets the current snapshot on connect, then every snapshot
//! the arena publishes, interleaved with replies to its own frames. Replies to
//! moves go to the requester only; the resulting state reaches everybody
//! through the broadcast.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::{debug, info, warn};

use super::protocol::{move_request, player_tag, ClientMessage, ServerMessage};
use super::sessions::SessionId;
use super::AppState;

/// Upgrade `GET /ws` to a WebSocket.
pub async fn ws_upgrade(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let session = state.sessions.open();
    info!(%session, connected = state.sessions.len(), "client connected");

    // Subscribe before reading the snapshot so no update slips in between.
    let mut updates = BroadcastStream::new(state.arena.subscribe());

    if send(&mut socket, &ServerMessage::state(state.arena.snapshot()))
        .await
        .is_ok()
    {
        loop {
            tokio::select! {
                frame = socket.recv() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        let reply = dispatch(&state, session, &text);
                        if send(&mut socket, &reply).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        debug!(%session, error = %err, "websocket receive failed");
                        break;
                    }
                },
                update = updates.next() => match update {
                    Some(Ok(snapshot)) => {
                        if send(&mut socket, &ServerMessage::state(snapshot)).await.is_err() {
                            break;
                        }
                    }
                    // Every push is a full state, so skipping ahead loses nothing.
                    Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                        warn!(%session, skipped, "client lagging, skipped snapshots");
                    }
                    None => break,
                },
            }
        }
    }

    let player = state.sessions.close(session);
    info!(%session, player = ?player, "client disconnected");
}

/// Handle one inbound text frame and produce the reply for its sender.
pub fn dispatch(state: &AppState, session: SessionId, text: &str) -> ServerMessage {
    let message = match ClientMessage::parse(text) {
        Ok(message) => message,
        Err(err) => {
            debug!(%session, error = %err, "unreadable frame");
            return ServerMessage::Error {
                message: format!("unreadable frame: {err}"),
            };
        }
    };

    match message {
        ClientMessage::Join { player } => {
            let player = player_tag(&player);
            state.sessions.join(session, player.clone());
            info!(%session, %player, "player joined");
            ServerMessage::Joined {
                player,
                state: state.arena.snapshot(),
            }
        }
        ClientMessage::Move {
            player,
            from_row,
            from_col,
            to_row,
            to_col,
        } => {
            let result = move_request(&player, &from_row, &from_col, &to_row, &to_col)
                .and_then(|request| state.arena.apply_move(&request));
            match result {
                Ok(snapshot) => ServerMessage::move_accepted(snapshot),
                Err(err) => ServerMessage::move_rejected(err),
            }
        }
    }
}

async fn send(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), axum::Error> {
    let text = match message.to_json() {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "failed to encode frame");
            return Ok(());
        }
    };
    socket.send(Message::Text(text)).await
}
