//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`room`, `chat`, `ui`) so individual
//! components can depend on small focused models. Everything here is
//! plain data behind Leptos signals; the websocket task is the single
//! writer for `room` and `chat`.

pub mod chat;
pub mod room;
pub mod ui;
