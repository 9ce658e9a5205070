//! Hit-testing against the snapshot's stacks and loose cards.
//!
//! Stacks are tested before loose cards because a pile's bounding box is
//! meant to dominate whatever sits underneath it. Within each group the
//! lists are walked in reverse: the server appends most-recently-moved
//! objects last, so reverse order approximates "topmost first" without a
//! true z-index.

#[cfg(test)]
#[path = "hit_testing.rs"]
mod hit_testing;

use protocol::{Snapshot, Target};

use crate::consts::{CARD_H, CARD_W};
use crate::input::Point;
use crate::view::{loose_cards, stacked_ids};

/// Test what sits under `pt`, a point in CSS-pixel table coordinates.
///
/// Deterministic: the same partition rule drives rendering, so whatever
/// this returns is exactly what the user sees on top.
#[must_use]
pub fn hit_test(pt: Point, snapshot: &Snapshot) -> Option<Target> {
    for stack in snapshot.stacks.iter().rev() {
        if in_card_box(pt, stack.x, stack.y) {
            return Some(Target::stack(stack.stack_id.clone()));
        }
    }

    let stacked = stacked_ids(snapshot);
    let loose: Vec<_> = loose_cards(snapshot, &stacked).collect();
    for card in loose.iter().rev() {
        if in_card_box(pt, card.x, card.y) {
            return Some(Target::card(card.id.clone()));
        }
    }

    None
}

fn in_card_box(pt: Point, x: f64, y: f64) -> bool {
    pt.x >= x && pt.x <= x + CARD_W && pt.y >= y && pt.y <= y + CARD_H
}
