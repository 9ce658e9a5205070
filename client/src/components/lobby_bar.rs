//! Lobby bar: create a room or join one by code.

use leptos::prelude::*;

use crate::state::room::{ConnectionStatus, RoomState};
use crate::util::room_code::is_valid_room_code;

#[cfg(feature = "hydrate")]
use protocol::JoinMode;

#[cfg(feature = "hydrate")]
use crate::app::IntentSender;
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;

/// Lobby controls shown above the table.
///
/// A code in the URL fragment joins automatically on load, so a shared
/// link drops the recipient straight into the room.
#[component]
pub fn LobbyBar() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    #[cfg(feature = "hydrate")]
    let chat = expect_context::<RwSignal<ChatState>>();
    #[cfg(feature = "hydrate")]
    let sender = expect_context::<RwSignal<IntentSender>>();

    let code_input = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let auto_join_done = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if auto_join_done.get_untracked() {
                return;
            }
            auto_join_done.set(true);
            if let Some(code) = crate::net::socket::room_code_from_fragment() {
                crate::net::socket::connect(code, JoinMode::Join, room, chat, sender);
            }
        });
    }

    let idle = move || room.with(|r| r.status == ConnectionStatus::Disconnected);

    let on_create = {
        move |_ev: leptos::ev::MouseEvent| {
            #[cfg(feature = "hydrate")]
            {
                let code = crate::util::room_code::room_code(crate::util::room_code::ROOM_CODE_LEN);
                crate::net::socket::connect(code, JoinMode::Create, room, chat, sender);
            }
        }
    };

    let do_join = move || {
        let code = code_input.get().trim().to_ascii_uppercase();
        if !is_valid_room_code(&code) {
            room.update(|r| r.last_error = Some("Room codes are 6 letters or digits".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            crate::net::socket::connect(code, JoinMode::Join, room, chat, sender);
        }
    };

    let on_join = move |_ev: leptos::ev::MouseEvent| do_join();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_join();
        }
    };

    view! {
        <div class="lobby-bar">
            <button class="lobby-bar__create" on:click=on_create disabled=move || !idle()>
                "Create room"
            </button>
            <input
                class="lobby-bar__code"
                type="text"
                placeholder="Room code"
                maxlength="6"
                prop:value=code_input
                on:input=move |ev| code_input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="lobby-bar__join" on:click=on_join disabled=move || !idle()>
                "Join"
            </button>
        </div>
    }
}
