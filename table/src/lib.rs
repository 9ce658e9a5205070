//! Canvas rendering and input engine for the realtime card table.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It
//! mirrors the server's privacy-filtered snapshot, hit-tests pointer
//! events against cards and stacks, tracks hover/selection/drag, and
//! composits the board once per display frame. It never mutates board
//! state locally: every gesture becomes an outbound
//! [`protocol::GameAction`] intent and visual motion is driven purely by
//! the next snapshot.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::TableCore`] |
//! | [`view`] | Snapshot holder and stacked/loose partitioning |
//! | [`input`] | Pointer types and interaction state |
//! | [`hit`] | Hit-testing against stacks and loose cards |
//! | [`assets`] | Image cache polled for load completion |
//! | [`render`] | Board compositing to a 2D context |
//! | [`consts`] | Card geometry and throttle constants |

pub mod assets;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod view;
