//! Room chat panel displaying and sending messages.

use leptos::prelude::*;

use protocol::ClientMessage;

use crate::app::IntentSender;
use crate::state::chat::ChatState;
use crate::state::room::{ConnectionStatus, RoomState};

/// Chat panel showing the room history and an input for sending lines.
///
/// System lines (join, leave, room errors) render without an author.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let room = expect_context::<RwSignal<RoomState>>();
    let sender = expect_context::<RwSignal<IntentSender>>();

    let input = RwSignal::new(String::new());
    let lines_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.lines.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = lines_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        if sender.get().send(&ClientMessage::Chat { text }) {
            input.set(String::new());
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        room.with(|r| r.status == ConnectionStatus::Connected) && !input.get().trim().is_empty()
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__lines" node_ref=lines_ref>
                {move || {
                    let lines = chat.get().lines;
                    if lines.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    lines
                        .iter()
                        .map(|line| {
                            if line.system {
                                let text = line.text.clone();
                                view! {
                                    <div class="chat-panel__line chat-panel__line--system">
                                        {text}
                                    </div>
                                }
                                    .into_any()
                            } else {
                                let color = line.color_hex.clone().unwrap_or_default();
                                let name = line.name.clone().unwrap_or_default();
                                let text = line.text.clone();
                                view! {
                                    <div class="chat-panel__line">
                                        <span class="chat-panel__author" style:color=color>
                                            {name}
                                        </span>
                                        <span class="chat-panel__text">{text}</span>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="chat-panel__compose">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Say something..."
                    prop:value=input
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
