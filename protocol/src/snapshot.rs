//! Privacy-filtered room snapshot pushed by the server.
//!
//! DESIGN
//! ======
//! A snapshot is always complete: the server re-sends the whole filtered
//! board on every change and the client replaces its copy wholesale —
//! there is no field-level merging anywhere. The privacy filtering has
//! already happened server-side, so a card can arrive with
//! `face_up == true` and no front image; the client renders the back in
//! that case and never infers face content.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed number of seats at the table.
pub const SEAT_CAPACITY: u8 = 4;

/// Complete filtered room state as delivered by a `STATE` message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Room code this snapshot belongs to.
    pub room_id: String,
    /// Seated players in seat order.
    pub players: Vec<Player>,
    /// Every card visible to this client, loose or stacked.
    pub cards: Vec<Card>,
    /// Card piles; each card id appears in at most one stack.
    pub stacks: Vec<Stack>,
    /// Hidden-hand card counts keyed by player id.
    #[serde(default)]
    pub hands: HashMap<String, u32>,
    /// Layout geometry, absent until the server has computed it.
    #[serde(default)]
    pub zones: Option<Zones>,
    /// Number of cards remaining in the draw deck.
    pub deck_count: u32,
    /// Number of cards in the discard pile.
    pub discard_count: u32,
    /// Server clock in milliseconds since the Unix epoch.
    pub server_time: f64,
}

/// A single card on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card id, unique within one snapshot.
    pub id: String,
    /// Left edge of the card in table coordinates.
    pub x: f64,
    /// Top edge of the card in table coordinates.
    pub y: f64,
    /// Logical face-up flag. Does not imply the front image is visible
    /// to this client; see `front_image`.
    pub face_up: bool,
    /// Front-art reference. Withheld by the server for cards this client
    /// is not entitled to see, independent of `face_up`.
    #[serde(default)]
    pub front_image: Option<String>,
    /// Back-art reference, always present.
    pub back_image: String,
}

/// An ordered pile of cards. Only the top card is drawn or targetable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    /// Stack id, unique within one snapshot.
    pub stack_id: String,
    /// Left edge of the pile in table coordinates.
    pub x: f64,
    /// Top edge of the pile in table coordinates.
    pub y: f64,
    /// Member card ids, bottom first. Every id also exists in
    /// [`Snapshot::cards`].
    pub card_ids: Vec<String>,
}

impl Stack {
    /// Id of the top card, the only individually rendered/targeted one.
    #[must_use]
    pub fn top_card_id(&self) -> Option<&str> {
        self.card_ids.last().map(String::as_str)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Server-assigned player id.
    pub player_id: String,
    /// Display name given at join time; servers may omit it.
    #[serde(default)]
    pub name: String,
    /// Presence color as a hex string (e.g. `"#ff0000"`).
    pub color_hex: String,
    /// Human-readable color name (e.g. `"Red"`).
    pub color_name: String,
    /// 0-based seat index; capacity is [`SEAT_CAPACITY`].
    pub seat_index: u8,
}

/// Named layout regions. Visual grouping only; irrelevant to hit-testing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zones {
    pub table: Rect,
    pub deck: Rect,
    pub discard: Rect,
    pub hand: Rect,
}

/// An axis-aligned rectangle in table coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}
