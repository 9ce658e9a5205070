//! The single page: lobby on top, table in the middle, chat beside it,
//! status along the bottom.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::command_bar::CommandBar;
use crate::components::lobby_bar::LobbyBar;
use crate::components::status_bar::StatusBar;
use crate::components::table_host::TableHost;

/// Table page layout.
#[component]
pub fn TablePage() -> impl IntoView {
    view! {
        <div class="table-page">
            <LobbyBar/>
            <CommandBar/>
            <div class="table-page__main">
                <TableHost/>
                <ChatPanel/>
            </div>
            <StatusBar/>
        </div>
    }
}
