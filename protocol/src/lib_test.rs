use super::*;

#[test]
fn client_message_round_trips_through_text() {
    let msg = ClientMessage::Action {
        action: GameAction::Flip { target: Target::card("c9") },
    };
    let text = encode_client_message(&msg);
    let back: ClientMessage = serde_json::from_str(&text).unwrap();
    assert_eq!(back, msg);
}

#[test]
fn decode_rejects_non_json_text() {
    let err = decode_server_message("not json").unwrap_err();
    assert!(matches!(err, WireError::Malformed(_)));
}

#[test]
fn decode_rejects_missing_type_tag() {
    assert!(decode_server_message(r#"{"roomId":"ABC123"}"#).is_err());
}
