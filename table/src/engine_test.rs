#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use protocol::{Card, GameAction, Player, Snapshot, Stack, Target};

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
        hands: HashMap::new(),
        zones: None,
        deck_count: 10,
        discard_count: 0,
        server_time: 0.0,
    }
}

fn core_with(cards: Vec<Card>, stacks: Vec<Stack>) -> TableCore {
    let mut core = TableCore::new();
    core.apply_snapshot(snapshot(cards, stacks));
    core
}

// =============================================================
// Pickup / drag / drop
// =============================================================

#[test]
fn pointer_down_on_card_selects_and_picks_up() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    let intents = core.on_pointer_down(Point::new(110.0, 130.0), Button::Primary, 0.0);
    assert_eq!(intents, vec![GameAction::Pickup { target: Target::card("c1") }]);
    assert_eq!(core.selection(), Some(&Target::card("c1")));
    assert!(core.interaction.drag.is_some());
}

#[test]
fn pickup_then_drop_inside_throttle_window_emits_no_move() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    let mut emitted = core.on_pointer_down(Point::new(110.0, 130.0), Button::Primary, 0.0);
    emitted.extend(core.on_pointer_move(Point::new(115.0, 135.0), 10.0));
    emitted.extend(core.on_pointer_up(Point::new(115.0, 135.0)));

    assert_eq!(
        emitted,
        vec![
            GameAction::Pickup { target: Target::card("c1") },
            // Grab offset was (10, 30), so the drop lands at pointer - grab.
            GameAction::Drop { target: Target::card("c1"), x: 105.0, y: 105.0 },
        ]
    );
}

#[test]
fn at_most_one_move_per_throttle_window() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, 0.0);

    let mut moves = 0;
    for (t, x) in [(10.0, 101.0), (20.0, 102.0), (40.0, 103.0), (50.0, 104.0), (60.0, 105.0), (80.0, 106.0)] {
        moves += core.on_pointer_move(Point::new(x, 100.0), t).len();
    }
    // Windows starting at 0 ms: emissions land at t=40 and t=80 only.
    assert_eq!(moves, 2);
}

#[test]
fn move_carries_candidate_position_not_pointer_position() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 120.0), Button::Primary, 0.0);

    let intents = core.on_pointer_move(Point::new(200.0, 220.0), 100.0);
    assert_eq!(
        intents,
        vec![GameAction::Move { target: Target::card("c1"), x: 190.0, y: 200.0 }]
    );
}

#[test]
fn drop_carries_latest_position_even_when_final_move_was_throttled() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, 0.0);

    let sent = core.on_pointer_move(Point::new(180.0, 100.0), 50.0);
    assert_eq!(sent.len(), 1);
    // This sample falls inside the throttle window and is never sent...
    assert!(core.on_pointer_move(Point::new(260.0, 100.0), 60.0).is_empty());
    // ...but the drop still reports it.
    let dropped = core.on_pointer_up(Point::new(260.0, 100.0));
    assert_eq!(dropped, vec![GameAction::Drop { target: Target::card("c1"), x: 260.0, y: 100.0 }]);
}

#[test]
fn drag_does_not_move_the_card_locally() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Primary, 0.0);
    core.on_pointer_move(Point::new(300.0, 300.0), 100.0);
    // Visual motion is snapshot-driven; the mirrored card has not moved.
    let c1 = core.view.card("c1").unwrap();
    assert_eq!((c1.x, c1.y), (100.0, 100.0));
}

#[test]
fn selection_survives_drop() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    core.on_pointer_up(Point::new(150.0, 150.0));
    assert_eq!(core.selection(), Some(&Target::card("c1")));
    assert!(core.interaction.drag.is_none());
}

#[test]
fn pointer_down_on_empty_space_clears_selection_only() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    let intents = core.on_pointer_down(Point::new(600.0, 600.0), Button::Primary, 5.0);
    assert!(intents.is_empty());
    assert_eq!(core.selection(), None);
    // The drag from the first press is unaffected.
    assert!(core.interaction.drag.is_some());
}

#[test]
fn non_primary_pointer_down_is_ignored() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    assert!(core.on_pointer_down(Point::new(110.0, 110.0), Button::Middle, 0.0).is_empty());
    assert_eq!(core.selection(), None);
}

// =============================================================
// Hover
// =============================================================

#[test]
fn pointer_move_tracks_hover_when_not_dragging() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_move(Point::new(110.0, 110.0), 0.0);
    assert_eq!(core.interaction.hover, Some(Target::card("c1")));

    core.on_pointer_move(Point::new(600.0, 600.0), 10.0);
    assert_eq!(core.interaction.hover, None);
}

#[test]
fn hover_clears_on_pointer_up() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_move(Point::new(110.0, 110.0), 0.0);
    core.on_pointer_up(Point::new(110.0, 110.0));
    assert_eq!(core.interaction.hover, None);
}

#[test]
fn hover_coexists_with_selection() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0), card("c2", 300.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    core.on_pointer_up(Point::new(110.0, 110.0));
    core.on_pointer_move(Point::new(310.0, 110.0), 100.0);
    assert_eq!(core.selection(), Some(&Target::card("c1")));
    assert_eq!(core.interaction.hover, Some(Target::card("c2")));
}

// =============================================================
// Flip / unstack gestures
// =============================================================

#[test]
fn double_click_flips_the_hit_target() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    let intents = core.on_double_click(Point::new(110.0, 110.0));
    assert_eq!(intents, vec![GameAction::Flip { target: Target::card("c1") }]);

    assert!(core.on_double_click(Point::new(600.0, 600.0)).is_empty());
}

#[test]
fn secondary_click_unstacks_only_stacks() {
    let mut core = core_with(
        vec![card("c1", 100.0, 100.0), card("loose", 300.0, 100.0)],
        vec![stack("s1", 100.0, 100.0, &["c1"])],
    );
    let intents = core.on_secondary_down(Point::new(110.0, 110.0));
    assert_eq!(intents, vec![GameAction::UnstackTop { target: Target::stack("s1") }]);

    assert!(core.on_secondary_down(Point::new(310.0, 110.0)).is_empty());
    assert!(core.on_secondary_down(Point::new(600.0, 600.0)).is_empty());
}

// =============================================================
// Explicit commands
// =============================================================

#[test]
fn deck_commands_need_no_target() {
    let core = TableCore::new();
    assert_eq!(core.draw_from_deck(), vec![GameAction::Draw]);
    assert_eq!(core.shuffle_deck(), vec![GameAction::ShuffleDeck]);
}

#[test]
fn flip_and_unstack_require_a_selection() {
    let mut core = core_with(
        vec![card("c1", 100.0, 100.0), card("c2", 500.0, 100.0)],
        vec![stack("s1", 500.0, 100.0, &["c2"])],
    );
    assert!(core.flip_selected().is_empty());
    assert!(core.unstack_selected().is_empty());

    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    assert_eq!(core.flip_selected(), vec![GameAction::Flip { target: Target::card("c1") }]);
    // Unstack only applies to a selected stack, not a loose card.
    assert!(core.unstack_selected().is_empty());

    core.on_pointer_down(Point::new(510.0, 110.0), Button::Primary, 100.0);
    assert_eq!(core.unstack_selected(), vec![GameAction::UnstackTop { target: Target::stack("s1") }]);
}

#[test]
fn stack_requires_two_distinct_hovered_and_selected_cards() {
    // c1 and c2 are loose; c3 only exists as the member of stack s1.
    let mut core = core_with(
        vec![card("c1", 100.0, 100.0), card("c2", 300.0, 100.0), card("c3", 500.0, 100.0)],
        vec![stack("s1", 500.0, 100.0, &["c3"])],
    );

    // No selection, no hover.
    assert!(core.stack_selected_on_hover().is_empty());

    // Selection only.
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    core.on_pointer_up(Point::new(110.0, 110.0));
    assert!(core.stack_selected_on_hover().is_empty());

    // Hovering the selected card itself: ids match, still nothing.
    core.on_pointer_move(Point::new(110.0, 110.0), 100.0);
    assert!(core.stack_selected_on_hover().is_empty());

    // Hovering a stack is not a card target.
    core.on_pointer_move(Point::new(510.0, 110.0), 200.0);
    assert!(core.stack_selected_on_hover().is_empty());

    // Hovering a different loose card arms the command.
    core.on_pointer_move(Point::new(310.0, 110.0), 300.0);
    assert_eq!(
        core.stack_selected_on_hover(),
        vec![GameAction::Stack { a_card_id: "c1".to_owned(), b_card_id: "c2".to_owned() }]
    );
}

// =============================================================
// Snapshot replacement and disconnect
// =============================================================

#[test]
fn vanished_selection_is_pruned_on_snapshot_apply() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    core.on_pointer_up(Point::new(110.0, 110.0));

    core.apply_snapshot(snapshot(vec![card("c2", 0.0, 0.0)], vec![]));
    assert_eq!(core.selection(), None);
}

#[test]
fn surviving_selection_persists_across_snapshots() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);
    core.on_pointer_up(Point::new(110.0, 110.0));

    core.apply_snapshot(snapshot(vec![card("c1", 250.0, 250.0)], vec![]));
    assert_eq!(core.selection(), Some(&Target::card("c1")));
}

#[test]
fn drag_of_vanished_target_is_dropped_on_snapshot_apply() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 0.0);

    core.apply_snapshot(snapshot(vec![], vec![]));
    assert!(core.interaction.drag.is_none());
    // And pointer-up on a dead drag emits nothing.
    assert!(core.on_pointer_up(Point::new(120.0, 120.0)).is_empty());
}

#[test]
fn reset_connection_goes_fully_idle() {
    let mut core = core_with(vec![card("c1", 100.0, 100.0)], vec![]);
    core.on_pointer_move(Point::new(110.0, 110.0), 0.0);
    core.on_pointer_down(Point::new(110.0, 110.0), Button::Primary, 10.0);

    core.reset_connection();
    assert!(core.view.snapshot().is_none());
    assert_eq!(core.selection(), None);
    assert_eq!(core.interaction.hover, None);
    assert!(core.interaction.drag.is_none());
}

#[test]
fn events_before_first_snapshot_are_harmless() {
    let mut core = TableCore::new();
    assert!(core.on_pointer_down(Point::new(10.0, 10.0), Button::Primary, 0.0).is_empty());
    assert!(core.on_pointer_move(Point::new(10.0, 10.0), 5.0).is_empty());
    assert!(core.on_pointer_up(Point::new(10.0, 10.0)).is_empty());
    assert!(core.on_double_click(Point::new(10.0, 10.0)).is_empty());
    assert!(core.on_secondary_down(Point::new(10.0, 10.0)).is_empty());
}
