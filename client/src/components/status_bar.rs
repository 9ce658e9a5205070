//! Bottom status bar: connection state, room line, and pile counts.

use leptos::prelude::*;

use crate::state::room::{ConnectionStatus, RoomState};

/// Status bar at the bottom of the table page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();

    let status_class = move || {
        let status = room.get().status;
        match status {
            ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
            ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
            ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
        }
    };

    let status_line = move || room.get().status_line();

    let pile_counts = move || {
        room.with(|r| {
            r.snapshot
                .as_ref()
                .map(|s| format!("deck {} / discard {}", s.deck_count, s.discard_count))
        })
    };

    let share_link = move || room.with(|r| r.share_code().map(|code| format!("#{code}")));

    let last_error = move || room.with(|r| r.last_error.clone());

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_line}
            </span>
            {move || {
                pile_counts()
                    .map(|counts| {
                        view! {
                            <span class="status-bar__divider">"|"</span>
                            <span class="status-bar__piles">{counts}</span>
                        }
                    })
            }}
            {move || {
                last_error()
                    .map(|error| {
                        view! { <span class="status-bar__error">{error}</span> }
                    })
            }}
            <span class="status-bar__spacer"></span>
            {move || {
                share_link()
                    .map(|link| {
                        view! {
                            <span class="status-bar__share">"Share: " {link}</span>
                        }
                    })
            }}
        </div>
    }
}
