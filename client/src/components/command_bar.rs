//! Command bar with deck/card actions and the seated-player chips.

use leptos::prelude::*;

use crate::state::room::{ConnectionStatus, RoomState};
use crate::state::ui::{Command, UiState};

/// Command bar above the table canvas.
///
/// Deck commands always go out; targeted commands are dispatched to the
/// engine, which drops them when nothing suitable is selected.
#[component]
pub fn CommandBar() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let connected = move || room.with(|r| r.status == ConnectionStatus::Connected);

    let trigger = move |command: Command| {
        move |_ev: leptos::ev::MouseEvent| {
            ui.update(|u| u.trigger(command));
        }
    };

    // Each seated player with their hidden-hand card count.
    let seats = move || {
        room.with(|r| {
            r.snapshot.as_ref().map_or_else(Vec::new, |s| {
                s.players
                    .iter()
                    .map(|p| (p.clone(), s.hands.get(&p.player_id).copied().unwrap_or(0)))
                    .collect()
            })
        })
    };

    view! {
        <div class="command-bar">
            <button class="command-bar__button" on:click=trigger(Command::Draw) disabled=move || !connected()>
                "Draw (d)"
            </button>
            <button class="command-bar__button" on:click=trigger(Command::ShuffleDeck) disabled=move || !connected()>
                "Shuffle (s)"
            </button>
            <button class="command-bar__button" on:click=trigger(Command::FlipSelected) disabled=move || !connected()>
                "Flip (f)"
            </button>
            <button class="command-bar__button" on:click=trigger(Command::UnstackSelected) disabled=move || !connected()>
                "Unstack (u)"
            </button>
            <button class="command-bar__button" on:click=trigger(Command::StackSelectedOnHover) disabled=move || !connected()>
                "Stack (g)"
            </button>
            <span class="command-bar__spacer"></span>
            <div class="command-bar__seats">
                {move || {
                    seats()
                        .iter()
                        .map(|(player, hand_count)| {
                            let color = player.color_hex.clone();
                            let name = player.name.clone();
                            let initial = name.chars().next().unwrap_or('?').to_string();
                            let title = format!("{name} ({hand_count} in hand)");
                            view! {
                                <span class="command-bar__seat" style:background-color=color title=title>
                                    {initial}
                                </span>
                                <span class="command-bar__hand">{hand_count.to_string()}</span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
