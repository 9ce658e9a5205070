//! Root application component and the shared intent sender.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use protocol::ClientMessage;

use crate::pages::table::TablePage;
use crate::state::{chat::ChatState, room::RoomState, ui::UiState};

/// Handle used by components to push outbound messages into the active
/// websocket, if any.
///
/// Fire-and-forget by contract: while disconnected the channel is absent
/// and [`IntentSender::send`] is a silent no-op — no buffering, no retry.
#[derive(Clone, Default)]
pub struct IntentSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl IntentSender {
    /// Wrap the sending half of a live connection.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Encode and send a message. Returns `false` when the message was
    /// dropped because no transport is open.
    pub fn send(&self, message: &ClientMessage) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let text = protocol::encode_client_message(message);
            return self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(text).is_ok());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            false
        }
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts for all child components.
    let room = RwSignal::new(RoomState::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());
    let sender = RwSignal::new(IntentSender::default());

    provide_context(room);
    provide_context(chat);
    provide_context(ui);
    provide_context(sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/cardtable.css"/>
        <Title text="Card Table"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TablePage/>
            </Routes>
        </Router>
    }
}
