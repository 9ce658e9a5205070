#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use protocol::ChatLine;

/// Bounded history so a long session cannot grow the DOM forever.
const MAX_LINES: usize = 200;

/// State for the room chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub lines: Vec<ChatLine>,
}

impl ChatState {
    /// Append a line, dropping the oldest once the cap is reached.
    pub fn push(&mut self, line: ChatLine) {
        self.lines.push(line);
        if self.lines.len() > MAX_LINES {
            self.lines.remove(0);
        }
    }

    /// Append a locally generated system line.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(ChatLine::system(text));
    }
}
