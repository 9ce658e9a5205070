//! Room-session state for the joined table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of one room: the connection
//! lifecycle, this client's seat assignment, and the latest snapshot.
//! A `ROOM_ERROR` is non-fatal and lands in `last_error` while the
//! connection stays open; a transport loss clears everything.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use protocol::Snapshot;
use protocol::snapshot::SEAT_CAPACITY;

/// Room-level state: connection, seat assignment, and the live snapshot.
#[derive(Clone, Debug, Default)]
pub struct RoomState {
    /// Monotonic connection generation; a stale socket task compares
    /// against this and exits quietly when superseded.
    pub generation: u64,
    /// Current websocket lifecycle state.
    pub status: ConnectionStatus,
    /// Room code being joined or joined.
    pub room_id: Option<String>,
    /// Seat assignment from `ROOM_JOINED`, if the join succeeded.
    pub seat: Option<SeatAssignment>,
    /// Latest snapshot; `None` before the first `STATE` message and
    /// after disconnect.
    pub snapshot: Option<Snapshot>,
    /// Most recent non-fatal room error, if any.
    pub last_error: Option<String>,
}

/// This client's identity at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatAssignment {
    pub player_id: String,
    pub color_hex: String,
    pub color_name: String,
    pub seat_index: u8,
}

/// Websocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// Websocket handshake is in progress.
    Connecting,
    /// Websocket is open and the join handshake has been sent.
    Connected,
}

impl RoomState {
    /// Human-readable status line for the status bar.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status {
            ConnectionStatus::Disconnected => "Not connected".to_owned(),
            ConnectionStatus::Connecting => "Joining...".to_owned(),
            ConnectionStatus::Connected => match (&self.room_id, &self.seat) {
                (Some(room), Some(seat)) => {
                    format!("In room {room} (seat {}/{SEAT_CAPACITY})", seat.seat_index + 1)
                }
                (Some(room), None) => format!("Joining room {room}..."),
                _ => "Connected".to_owned(),
            },
        }
    }

    /// The room code to share, once a join has succeeded.
    #[must_use]
    pub fn share_code(&self) -> Option<&str> {
        self.seat.as_ref()?;
        self.room_id.as_deref()
    }

    /// Wipe everything tied to the dead connection, keeping `generation`.
    pub fn mark_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.seat = None;
        self.snapshot = None;
        self.last_error = None;
    }
}
