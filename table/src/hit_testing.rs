use std::collections::HashMap;

use protocol::{Card, Snapshot, Stack, Target};

use super::*;

fn card(id: &str, x: f64, y: f64) -> Card {
    Card {
        id: id.to_owned(),
        x,
        y,
        face_up: false,
        front_image: None,
        back_image: "back.png".to_owned(),
    }
}

fn stack(id: &str, x: f64, y: f64, card_ids: &[&str]) -> Stack {
    Stack {
        stack_id: id.to_owned(),
        x,
        y,
        card_ids: card_ids.iter().map(|&s| s.to_owned()).collect(),
    }
}

fn snapshot(cards: Vec<Card>, stacks: Vec<Stack>) -> Snapshot {
    Snapshot {
        room_id: "ABC123".to_owned(),
        players: vec![],
        cards,
        stacks,
        hands: HashMap::new(),
        zones: None,
        deck_count: 0,
        discard_count: 0,
        server_time: 0.0,
    }
}

#[test]
fn empty_space_hits_nothing() {
    let snap = snapshot(vec![card("c1", 100.0, 100.0)], vec![]);
    assert_eq!(hit_test(Point::new(500.0, 500.0), &snap), None);
}

#[test]
fn loose_card_box_is_card_sized() {
    let snap = snapshot(vec![card("c1", 100.0, 100.0)], vec![]);
    assert_eq!(hit_test(Point::new(100.0, 100.0), &snap), Some(Target::card("c1")));
    assert_eq!(hit_test(Point::new(100.0 + CARD_W, 100.0 + CARD_H), &snap), Some(Target::card("c1")));
    assert_eq!(hit_test(Point::new(100.0 + CARD_W + 1.0, 100.0), &snap), None);
}

#[test]
fn stack_wins_over_an_overlapping_loose_card() {
    // The loose card sits exactly under the stack's box.
    let snap = snapshot(
        vec![card("loose", 110.0, 110.0), card("c1", 100.0, 100.0)],
        vec![stack("s1", 100.0, 100.0, &["c1"])],
    );
    assert_eq!(hit_test(Point::new(120.0, 120.0), &snap), Some(Target::stack("s1")));
}

#[test]
fn later_stack_wins_when_stacks_overlap() {
    let snap = snapshot(
        vec![card("c1", 0.0, 0.0), card("c2", 0.0, 0.0)],
        vec![stack("s1", 100.0, 100.0, &["c1"]), stack("s2", 130.0, 100.0, &["c2"])],
    );
    // Point inside both boxes; the later (topmost) stack takes it.
    assert_eq!(hit_test(Point::new(140.0, 120.0), &snap), Some(Target::stack("s2")));
}

#[test]
fn later_loose_card_wins_when_cards_overlap() {
    let snap = snapshot(vec![card("under", 100.0, 100.0), card("over", 120.0, 100.0)], vec![]);
    assert_eq!(hit_test(Point::new(130.0, 120.0), &snap), Some(Target::card("over")));
}

#[test]
fn stacked_cards_are_not_individually_targetable() {
    // "c1" is stacked far away from the stack's own position; pointing at
    // the card's coordinates must not hit it.
    let snap = snapshot(vec![card("c1", 400.0, 400.0)], vec![stack("s1", 100.0, 100.0, &["c1"])]);
    assert_eq!(hit_test(Point::new(410.0, 410.0), &snap), None);
    assert_eq!(hit_test(Point::new(110.0, 110.0), &snap), Some(Target::stack("s1")));
}
