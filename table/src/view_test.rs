use std::collections::HashSet;

use protocol::{Card, Player, Snapshot, Stack, Target};

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
        players: vec![Player {
            player_id: "p1".to_owned(),
            name: "Guest-AB12".to_owned(),
            color_hex: "#ff0000".to_owned(),
            color_name: "Red".to_owned(),
            seat_index: 0,
        }],
        cards,
        stacks,
        hands: std::collections::HashMap::new(),
        zones: None,
        deck_count: 0,
        discard_count: 0,
        server_time: 0.0,
    }
}

// =============================================================
// Wholesale replacement
// =============================================================

#[test]
fn apply_replaces_the_whole_snapshot() {
    let mut view = ViewModel::new();
    assert!(view.snapshot().is_none());

    view.apply(snapshot(vec![card("c1", 0.0, 0.0)], vec![]));
    assert!(view.card("c1").is_some());

    // The second snapshot does not merge: c1 is gone, c2 is the world.
    view.apply(snapshot(vec![card("c2", 5.0, 5.0)], vec![]));
    assert!(view.card("c1").is_none());
    assert!(view.card("c2").is_some());
}

#[test]
fn clear_discards_the_snapshot() {
    let mut view = ViewModel::new();
    view.apply(snapshot(vec![card("c1", 0.0, 0.0)], vec![]));
    view.clear();
    assert!(view.snapshot().is_none());
    assert!(view.card("c1").is_none());
}

// =============================================================
// Partitioning
// =============================================================

#[test]
fn loose_set_is_all_cards_minus_every_stacked_id() {
    let snap = snapshot(
        vec![card("c1", 0.0, 0.0), card("c2", 0.0, 0.0), card("c3", 0.0, 0.0), card("c4", 0.0, 0.0)],
        vec![stack("s1", 0.0, 0.0, &["c1", "c2"]), stack("s2", 0.0, 0.0, &["c4"])],
    );

    let stacked = stacked_ids(&snap);
    assert_eq!(stacked, HashSet::from(["c1", "c2", "c4"]));

    let loose: Vec<&str> = loose_cards(&snap, &stacked).map(|c| c.id.as_str()).collect();
    assert_eq!(loose, vec!["c3"]);
}

#[test]
fn stack_top_card_resolves_in_the_card_list() {
    let snap = snapshot(
        vec![card("c1", 0.0, 0.0), card("c2", 0.0, 0.0)],
        vec![stack("s1", 100.0, 100.0, &["c1", "c2"])],
    );
    let top = stack_top_card(&snap, &snap.stacks[0]).unwrap();
    assert_eq!(top.id, "c2");
}

// =============================================================
// Target lookups
// =============================================================

#[test]
fn contains_distinguishes_target_kinds() {
    let mut view = ViewModel::new();
    view.apply(snapshot(vec![card("c1", 0.0, 0.0)], vec![stack("s1", 0.0, 0.0, &["c1"])]));

    assert!(view.contains(&Target::card("c1")));
    assert!(view.contains(&Target::stack("s1")));
    // A card id is not a stack id and vice versa.
    assert!(!view.contains(&Target::stack("c1")));
    assert!(!view.contains(&Target::card("s1")));
}

#[test]
fn position_of_reads_target_coordinates() {
    let mut view = ViewModel::new();
    view.apply(snapshot(vec![card("c1", 30.0, 40.0)], vec![stack("s1", 70.0, 80.0, &["c1"])]));

    assert_eq!(view.position_of(&Target::card("c1")), Some((30.0, 40.0)));
    assert_eq!(view.position_of(&Target::stack("s1")), Some((70.0, 80.0)));
    assert_eq!(view.position_of(&Target::card("nope")), None);
}
