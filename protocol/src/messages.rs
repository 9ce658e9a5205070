//! Tagged message envelopes and action intents.
//!
//! Outbound messages carry a `type` tag (`ROOM_JOIN`, `ACTION`, `CHAT`);
//! action payloads carry a nested `kind` tag. Inbound messages dispatch
//! on `type` into exactly four kinds; anything else fails decoding and
//! is dropped by the caller.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// How the client wants to enter a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Create the room, claiming the supplied code.
    Create,
    /// Join an existing room by code.
    Join,
}

/// What kind of thing an intent or pointer interaction is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Card,
    Stack,
}

/// A card or stack reference, used for hover, selection, and intents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub kind: TargetKind,
    pub id: String,
}

impl Target {
    #[must_use]
    pub fn card(id: impl Into<String>) -> Self {
        Self { kind: TargetKind::Card, id: id.into() }
    }

    #[must_use]
    pub fn stack(id: impl Into<String>) -> Self {
        Self { kind: TargetKind::Stack, id: id.into() }
    }
}

/// A discrete action intent. Fire-and-forget: the server validates and
/// the result, if any, arrives as the next snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameAction {
    /// Draw one card from the deck into the player's hand.
    #[serde(rename = "DRAW")]
    Draw,
    /// Shuffle the draw deck.
    #[serde(rename = "SHUFFLE_DECK")]
    ShuffleDeck,
    /// Flip a card or the top card of a stack.
    #[serde(rename = "FLIP")]
    Flip { target: Target },
    /// Place card `a` onto card `b`, forming or growing a stack.
    #[serde(rename = "STACK", rename_all = "camelCase")]
    Stack { a_card_id: String, b_card_id: String },
    /// Pop the top card off a stack.
    #[serde(rename = "UNSTACK_TOP")]
    UnstackTop { target: Target },
    /// Begin dragging a target.
    #[serde(rename = "PICKUP")]
    Pickup { target: Target },
    /// Throttled drag position update.
    #[serde(rename = "MOVE")]
    Move { target: Target, x: f64, y: f64 },
    /// End of drag. Always carries the latest computed position, even if
    /// that position never went out in a throttled `MOVE`.
    #[serde(rename = "DROP")]
    Drop { target: Target, x: f64, y: f64 },
}

/// Client → server messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Join handshake, sent once per connection right after open.
    #[serde(rename = "ROOM_JOIN", rename_all = "camelCase")]
    RoomJoin {
        room_id: String,
        mode: JoinMode,
        name: String,
    },
    /// An action intent.
    #[serde(rename = "ACTION")]
    Action { action: GameAction },
    /// A chat line.
    #[serde(rename = "CHAT")]
    Chat { text: String },
}

/// Server → client messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Successful join: this client's seat assignment.
    #[serde(rename = "ROOM_JOINED", rename_all = "camelCase")]
    RoomJoined {
        player_id: String,
        color_hex: String,
        color_name: String,
        room_id: String,
        seat_index: u8,
    },
    /// Non-fatal room-level failure; the connection stays open.
    #[serde(rename = "ROOM_ERROR")]
    RoomError { message: String },
    /// Complete snapshot replacement.
    #[serde(rename = "STATE")]
    State(Snapshot),
    /// A chat line from a player or the system.
    #[serde(rename = "CHAT")]
    Chat(ChatLine),
}

/// One chat line. Player lines carry `name`/`color_hex`; system lines
/// carry `system: true` and no author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLine {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
    pub text: String,
    #[serde(default)]
    pub system: bool,
}

impl ChatLine {
    /// Build a locally generated system line.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self { name: None, color_hex: None, text: text.into(), system: true }
    }
}
