//! WebSocket session for one room.
//!
//! The socket task is the bridge between the server's message stream
//! and the Leptos UI state. Message semantics live in
//! [`apply_server_message`], which is pure and tested natively; the
//! async plumbing around it is gated behind `#[cfg(feature =
//! "hydrate")]` since it requires a browser environment.
//!
//! There is no reconnection. When the socket closes for any reason the
//! session state is wiped and the user starts over from the lobby bar.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use protocol::{ChatLine, ServerMessage};

use crate::state::chat::ChatState;
use crate::state::room::{ConnectionStatus, RoomState, SeatAssignment};

/// Fold one server message into the room and chat state.
///
/// `STATE` replaces the snapshot wholesale; the server already filtered
/// it for this seat, so nothing here inspects card ownership.
/// `ROOM_ERROR` is non-fatal: it lands in `last_error` and as a system
/// chat line while the connection stays open.
pub fn apply_server_message(message: ServerMessage, room: &mut RoomState, chat: &mut ChatState) {
    match message {
        ServerMessage::RoomJoined {
            player_id,
            color_hex,
            color_name,
            room_id,
            seat_index,
        } => {
            room.room_id = Some(room_id);
            room.seat = Some(SeatAssignment { player_id, color_hex, color_name, seat_index });
            room.last_error = None;
        }
        ServerMessage::RoomError { message } => {
            chat.push(ChatLine::system(message.clone()));
            room.last_error = Some(message);
        }
        ServerMessage::State(snapshot) => {
            room.snapshot = Some(snapshot);
        }
        ServerMessage::Chat(line) => {
            chat.push(line);
        }
    }
}

/// Open a websocket to the game server and run the session until the
/// socket closes or a newer [`connect`] call supersedes it.
#[cfg(feature = "hydrate")]
pub fn connect(
    room_code: String,
    mode: protocol::JoinMode,
    room: leptos::prelude::RwSignal<RoomState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    sender: leptos::prelude::RwSignal<crate::app::IntentSender>,
) {
    use leptos::prelude::{Set, Update};

    // Supersede any running session; its task sees the new generation
    // and exits without touching state.
    let generation = {
        let mut next = 0;
        room.update(|r| {
            r.generation += 1;
            r.status = ConnectionStatus::Connecting;
            r.room_id = Some(room_code.clone());
            r.seat = None;
            r.snapshot = None;
            r.last_error = None;
            next = r.generation;
        });
        next
    };
    sender.set(crate::app::IntentSender::default());

    leptos::task::spawn_local(session_task(generation, room_code, mode, room, chat, sender));
}

/// One connection lifecycle: open, join, pump, tear down.
#[cfg(feature = "hydrate")]
async fn session_task(
    generation: u64,
    room_code: String,
    mode: protocol::JoinMode,
    room: leptos::prelude::RwSignal<RoomState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    sender: leptos::prelude::RwSignal<crate::app::IntentSender>,
) {
    use futures::StreamExt;
    use futures::channel::mpsc;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::{GetUntracked, Set, Update};
    use protocol::ClientMessage;

    let url = websocket_url();
    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("WS open failed: {e}");
            if room.get_untracked().generation == generation {
                room.update(RoomState::mark_disconnected);
                chat.update(|c| c.push_system("Could not reach the server"));
            }
            return;
        }
    };
    let (mut ws_write, mut ws_read) = ws.split();

    let (tx, mut rx) = mpsc::unbounded::<String>();
    room.update(|r| r.status = ConnectionStatus::Connected);
    sender.set(crate::app::IntentSender::connected(tx));

    let join = ClientMessage::RoomJoin {
        room_id: room_code,
        mode,
        name: crate::util::room_code::guest_name(),
    };
    let _ = sender.get_untracked().send(&join);

    // Forward outgoing messages from the channel to the socket.
    let send_task = async {
        use futures::SinkExt;
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and fold incoming messages.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            if room.get_untracked().generation != generation {
                break;
            }
            match msg {
                Ok(Message::Text(text)) => match protocol::decode_server_message(&text) {
                    Ok(message) => {
                        if let ServerMessage::RoomJoined { ref room_id, .. } = message {
                            set_url_fragment(room_id);
                        }
                        room.update(|r| {
                            chat.update(|c| apply_server_message(message.clone(), r, c));
                        });
                    }
                    Err(e) => log::debug!("unreadable server message: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    if room.get_untracked().generation == generation {
        room.update(RoomState::mark_disconnected);
        chat.update(|c| c.push_system("Disconnected from room"));
        sender.set(crate::app::IntentSender::default());
    }
}

/// Websocket endpoint derived from the page origin.
#[cfg(feature = "hydrate")]
fn websocket_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{proto}://{host}/ws")
}

/// Record the joined room in the URL fragment so the link is shareable.
#[cfg(feature = "hydrate")]
fn set_url_fragment(room_id: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(room_id);
    }
}

/// Room code from the URL fragment, if one is present and well formed.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn room_code_from_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let code = hash.trim_start_matches('#').to_ascii_uppercase();
    crate::util::room_code::is_valid_room_code(&code).then_some(code)
}
