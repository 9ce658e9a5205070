//! UI command plumbing between the command bar and the engine host.
//!
//! Targeted commands (flip, unstack, stack) need the engine's selection
//! and hover, which live inside the `TableHost` component. Buttons
//! therefore publish a command with a bumped sequence number, and a
//! host effect watches the sequence and routes the command into the
//! engine — the same seq-counter handshake the rest of the UI uses for
//! cross-component triggers.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A command-bar request for the engine host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Draw,
    ShuffleDeck,
    FlipSelected,
    UnstackSelected,
    StackSelectedOnHover,
}

/// UI-level state shared across components.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Last requested command; meaningful only when `command_seq` moved.
    pub command: Option<Command>,
    /// Bumped once per request so repeated identical commands re-fire.
    pub command_seq: u64,
}

impl UiState {
    /// Publish a command for the engine host to pick up.
    pub fn trigger(&mut self, command: Command) {
        self.command = Some(command);
        self.command_seq = self.command_seq.wrapping_add(1);
    }
}
