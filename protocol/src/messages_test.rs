use serde_json::json;

use super::*;

// =============================================================
// Outbound envelopes
// =============================================================

#[test]
fn room_join_wire_shape() {
    let msg = ClientMessage::RoomJoin {
        room_id: "ABC123".to_owned(),
        mode: JoinMode::Create,
        name: "Guest-7Q2F".to_owned(),
    };
    let value: serde_json::Value = serde_json::from_str(&crate::encode_client_message(&msg)).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "ROOM_JOIN",
            "roomId": "ABC123",
            "mode": "create",
            "name": "Guest-7Q2F",
        })
    );
}

#[test]
fn chat_wire_shape() {
    let msg = ClientMessage::Chat { text: "gg".to_owned() };
    let value: serde_json::Value = serde_json::from_str(&crate::encode_client_message(&msg)).unwrap();
    assert_eq!(value, json!({"type": "CHAT", "text": "gg"}));
}

// =============================================================
// Action kinds
// =============================================================

#[test]
fn targetless_actions_serialize_as_bare_kinds() {
    let draw = serde_json::to_value(ClientMessage::Action { action: GameAction::Draw }).unwrap();
    assert_eq!(draw, json!({"type": "ACTION", "action": {"kind": "DRAW"}}));

    let shuffle = serde_json::to_value(GameAction::ShuffleDeck).unwrap();
    assert_eq!(shuffle, json!({"kind": "SHUFFLE_DECK"}));
}

#[test]
fn move_action_carries_target_and_position() {
    let action = GameAction::Move { target: Target::card("c1"), x: 120.5, y: 44.0 };
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "MOVE",
            "target": {"kind": "card", "id": "c1"},
            "x": 120.5,
            "y": 44.0,
        })
    );
}

#[test]
fn drop_action_carries_position() {
    let action = GameAction::Drop { target: Target::card("c1"), x: 10.0, y: 20.0 };
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value["kind"], "DROP");
    assert_eq!(value["x"], 10.0);
    assert_eq!(value["y"], 20.0);
}

#[test]
fn stack_action_uses_camel_case_card_ids() {
    let action = GameAction::Stack { a_card_id: "c1".to_owned(), b_card_id: "c2".to_owned() };
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value, json!({"kind": "STACK", "aCardId": "c1", "bCardId": "c2"}));
}

#[test]
fn unstack_top_targets_a_stack() {
    let action = GameAction::UnstackTop { target: Target::stack("s1") };
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value["target"], json!({"kind": "stack", "id": "s1"}));
}

// =============================================================
// Inbound envelopes
// =============================================================

#[test]
fn room_joined_decodes_seat_assignment() {
    let msg = crate::decode_server_message(
        r##"{"type":"ROOM_JOINED","playerId":"p1","colorHex":"#ff0000","colorName":"Red","roomId":"ABC123","seatIndex":0}"##,
    )
    .unwrap();
    let ServerMessage::RoomJoined { player_id, color_hex, color_name, room_id, seat_index } = msg else {
        panic!("expected ROOM_JOINED, got {msg:?}");
    };
    assert_eq!(player_id, "p1");
    assert_eq!(color_hex, "#ff0000");
    assert_eq!(color_name, "Red");
    assert_eq!(room_id, "ABC123");
    assert_eq!(seat_index, 0);
}

#[test]
fn room_error_decodes_message() {
    let msg = crate::decode_server_message(r#"{"type":"ROOM_ERROR","message":"room full"}"#).unwrap();
    assert_eq!(msg, ServerMessage::RoomError { message: "room full".to_owned() });
}

#[test]
fn chat_decodes_player_line() {
    let msg =
        crate::decode_server_message(r##"{"type":"CHAT","name":"Ada","colorHex":"#00ff00","text":"hi"}"##).unwrap();
    let ServerMessage::Chat(line) = msg else {
        panic!("expected CHAT");
    };
    assert_eq!(line.name.as_deref(), Some("Ada"));
    assert_eq!(line.color_hex.as_deref(), Some("#00ff00"));
    assert_eq!(line.text, "hi");
    assert!(!line.system);
}

#[test]
fn chat_decodes_system_line_without_author() {
    let msg = crate::decode_server_message(r#"{"type":"CHAT","system":true,"text":"Ada joined"}"#).unwrap();
    let ServerMessage::Chat(line) = msg else {
        panic!("expected CHAT");
    };
    assert!(line.system);
    assert!(line.name.is_none());
    assert_eq!(line.text, "Ada joined");
}

#[test]
fn unknown_type_tag_is_an_error() {
    assert!(crate::decode_server_message(r#"{"type":"PING"}"#).is_err());
}
