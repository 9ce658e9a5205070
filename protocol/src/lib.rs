//! Shared wire model and JSON codec for the realtime table transport.
//!
//! This crate owns the message shapes exchanged between the card-table
//! client and the authoritative game server. Every message is a UTF-8
//! JSON object tagged by a `type` field; action intents nest a second
//! `kind` tag. Payload field names are camelCase on the wire to match
//! the server's schema.
//!
//! The server is authoritative for all game state: the client only ever
//! receives complete [`snapshot::Snapshot`] replacements and sends
//! discrete [`messages::GameAction`] intents with no delivery guarantee.

use serde::Serialize;

pub mod messages;
pub mod snapshot;

pub use messages::{ChatLine, ClientMessage, GameAction, JoinMode, ServerMessage, Target, TargetKind};
pub use snapshot::{Card, Player, Rect, Snapshot, Stack, Zones};

/// Error returned by [`decode_server_message`].
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The text was not valid JSON, or carried an unknown `type` tag.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Encode an outbound message as a JSON text frame.
#[must_use]
pub fn encode_client_message(message: &ClientMessage) -> String {
    to_json_text(message)
}

/// Decode an inbound text frame into a server message.
///
/// # Errors
///
/// Returns [`WireError::Malformed`] for invalid JSON and for unknown
/// `type` tags. Callers are expected to ignore such frames and keep the
/// prior state intact.
pub fn decode_server_message(text: &str) -> Result<ServerMessage, WireError> {
    Ok(serde_json::from_str(text)?)
}

fn to_json_text<T: Serialize>(value: &T) -> String {
    // Serializing these message types cannot fail: they contain no
    // non-string map keys and no non-finite floats sourced from the wire.
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
