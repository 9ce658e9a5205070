//! Room code and guest name generation.

#[cfg(test)]
#[path = "room_code_test.rs"]
mod room_code_test;

use rand::Rng;

/// Code alphabet with the ambiguous glyphs I, O, 0 and 1 removed.
pub const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a shareable room code.
pub const ROOM_CODE_LEN: usize = 6;

/// Generate a random code of `len` characters from the room alphabet.
#[must_use]
pub fn room_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..ROOM_CODE_ALPHABET.len());
            ROOM_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Default display name for a player who never picked one.
#[must_use]
pub fn guest_name() -> String {
    format!("Guest-{}", room_code(4))
}

/// True if `code` could have been produced by [`room_code`] at the
/// standard length. Used to gate joins typed or pasted by the user.
#[must_use]
pub fn is_valid_room_code(code: &str) -> bool {
    code.len() == ROOM_CODE_LEN
        && code.bytes().all(|b| ROOM_CODE_ALPHABET.contains(&b))
}
