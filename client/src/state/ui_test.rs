use super::{Command, UiState};

#[test]
fn trigger_records_command_and_bumps_seq() {
    let mut ui = UiState::default();
    assert_eq!(ui.command, None);
    assert_eq!(ui.command_seq, 0);

    ui.trigger(Command::Draw);
    assert_eq!(ui.command, Some(Command::Draw));
    assert_eq!(ui.command_seq, 1);
}

#[test]
fn repeated_identical_commands_still_advance_seq() {
    let mut ui = UiState::default();

    ui.trigger(Command::FlipSelected);
    ui.trigger(Command::FlipSelected);

    assert_eq!(ui.command, Some(Command::FlipSelected));
    assert_eq!(ui.command_seq, 2);
}
