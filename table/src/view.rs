//! In-memory mirror of the server's snapshot.
//!
//! DESIGN
//! ======
//! The server re-sends the complete filtered room state on every change,
//! so reconciliation is a single move: [`ViewModel::apply`] swaps the
//! whole snapshot and consumers never observe a partial update. The
//! stacked/loose partition helpers here are the single source of truth
//! shared by hit-testing and rendering.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::collections::HashSet;

use protocol::{Card, Snapshot, Stack, Target, TargetKind};

/// Holder for the current snapshot, absent before the first `STATE`
/// message and after disconnect.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    snapshot: Option<Snapshot>,
}

impl ViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale.
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Discard the snapshot (transport closed).
    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.snapshot.as_ref()?.cards.iter().find(|c| c.id == id)
    }

    /// Look up a stack by id.
    #[must_use]
    pub fn stack(&self, id: &str) -> Option<&Stack> {
        self.snapshot.as_ref()?.stacks.iter().find(|s| s.stack_id == id)
    }

    /// Whether the target's id still exists in the current snapshot.
    #[must_use]
    pub fn contains(&self, target: &Target) -> bool {
        match target.kind {
            TargetKind::Card => self.card(&target.id).is_some(),
            TargetKind::Stack => self.stack(&target.id).is_some(),
        }
    }

    /// Table-coordinate position of a target, if it exists.
    #[must_use]
    pub fn position_of(&self, target: &Target) -> Option<(f64, f64)> {
        match target.kind {
            TargetKind::Card => self.card(&target.id).map(|c| (c.x, c.y)),
            TargetKind::Stack => self.stack(&target.id).map(|s| (s.x, s.y)),
        }
    }
}

/// Ids of every card that belongs to some stack.
#[must_use]
pub fn stacked_ids(snapshot: &Snapshot) -> HashSet<&str> {
    snapshot
        .stacks
        .iter()
        .flat_map(|s| s.card_ids.iter().map(String::as_str))
        .collect()
}

/// Cards not claimed by any stack, in snapshot order.
pub fn loose_cards<'a>(snapshot: &'a Snapshot, stacked: &'a HashSet<&str>) -> impl Iterator<Item = &'a Card> {
    snapshot.cards.iter().filter(move |c| !stacked.contains(c.id.as_str()))
}

/// The card drawn for a stack: its top member, resolved in the card list.
#[must_use]
pub fn stack_top_card<'a>(snapshot: &'a Snapshot, stack: &Stack) -> Option<&'a Card> {
    let top_id = stack.top_card_id()?;
    snapshot.cards.iter().find(|c| c.id == top_id)
}
