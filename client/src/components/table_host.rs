//! Bridge component between Leptos state and the imperative `table::Table`.
//!
//! ARCHITECTURE
//! ============
//! The table crate owns hit-testing, interaction, and drawing; this host
//! maps DOM events and websocket state into engine calls and forwards
//! the resulting action intents to the server. Rendering runs on a
//! self-rescheduling `requestAnimationFrame` loop so card images that
//! finish loading mid-session appear without any explicit invalidation.

use leptos::prelude::*;

use crate::app::IntentSender;
use crate::state::room::RoomState;
#[cfg(feature = "hydrate")]
use crate::state::ui::Command;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use js_sys::Date;
#[cfg(feature = "hydrate")]
use protocol::{ClientMessage, GameAction};
#[cfg(feature = "hydrate")]
use table::engine::Table;
#[cfg(feature = "hydrate")]
use table::input::{Button, Point};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Wrap engine-produced intents in action envelopes and send them.
///
/// Sends are fire-and-forget; while disconnected they drop silently and
/// the next snapshot reconciles whatever the server actually applied.
#[cfg(feature = "hydrate")]
fn process_intents(actions: Vec<GameAction>, sender: RwSignal<IntentSender>) {
    let sender = sender.get_untracked();
    for action in actions {
        let _ = sender.send(&ClientMessage::Action { action });
    }
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
fn map_button(button: i16) -> Button {
    match button {
        0 => Button::Primary,
        2 => Button::Secondary,
        _ => Button::Middle,
    }
}

#[cfg(feature = "hydrate")]
type RafHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[cfg(feature = "hydrate")]
fn schedule_frame(holder: &RafHolder) {
    if let Some(window) = web_sys::window()
        && let Some(cb) = holder.borrow().as_ref()
    {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Kick off the permanent render loop for a mounted engine.
#[cfg(feature = "hydrate")]
fn start_render_loop(engine: &Rc<RefCell<Option<Table>>>) {
    let engine = Rc::clone(engine);
    let holder: RafHolder = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(table) = engine.borrow_mut().as_mut()
            && let Err(e) = table.render()
        {
            leptos::logging::warn!("render failed: {e:?}");
        }
        schedule_frame(&holder_for_cb);
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);
    schedule_frame(&holder);
}

/// Table host component.
///
/// On hydration this mounts `table::Table` on the `<canvas>` element,
/// feeds it snapshots from room state, and translates pointer, keyboard,
/// and command-bar input into engine calls.
#[component]
pub fn TableHost() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<IntentSender>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    let last_command_seq = RwSignal::new(0_u64);
    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Table>));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            *engine.borrow_mut() = Some(Table::new(canvas));
            start_render_loop(&engine);
        });
    }

    // Snapshot sync: replace wholesale, or wipe on disconnect.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let snapshot = room.with(|r| r.snapshot.clone());
            if let Some(table) = engine.borrow_mut().as_mut() {
                match snapshot {
                    Some(snapshot) => table.apply_snapshot(snapshot),
                    None => table.reset_connection(),
                }
            }
        });
    }

    // Command-bar dispatch. The seq guard keeps a re-run from repeating
    // the previous command.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let (seq, command) = ui.with(|u| (u.command_seq, u.command));
            if seq == 0 || seq == last_command_seq.get_untracked() {
                return;
            }
            last_command_seq.set(seq);
            let Some(command) = command else {
                return;
            };
            if let Some(table) = engine.borrow_mut().as_mut() {
                let actions = match command {
                    Command::Draw => table.core.draw_from_deck(),
                    Command::ShuffleDeck => table.core.shuffle_deck(),
                    Command::FlipSelected => table.core.flip_selected(),
                    Command::UnstackSelected => table.core.unstack_selected(),
                    Command::StackSelectedOnHover => table.core.stack_selected_on_hover(),
                };
                process_intents(actions, sender);
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.focus();
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                if let Some(table) = engine.borrow_mut().as_mut() {
                    let actions = table.core.on_pointer_down(
                        pointer_point(&ev),
                        map_button(ev.button()),
                        Date::now(),
                    );
                    process_intents(actions, sender);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(table) = engine.borrow_mut().as_mut() {
                    let actions = table.core.on_pointer_move(pointer_point(&ev), Date::now());
                    process_intents(actions, sender);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                if let Some(table) = engine.borrow_mut().as_mut() {
                    let actions = table.core.on_pointer_up(pointer_point(&ev));
                    process_intents(actions, sender);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_double_click = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                if let Some(table) = engine.borrow_mut().as_mut() {
                    let pt = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                    let actions = table.core.on_double_click(pt);
                    process_intents(actions, sender);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    // Right click is delivered as contextmenu; suppress the browser menu
    // and treat it as the unstack gesture.
    let on_context_menu = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                if let Some(table) = engine.borrow_mut().as_mut() {
                    let pt = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                    let actions = table.core.on_secondary_down(pt);
                    process_intents(actions, sender);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::KeyboardEvent| {
                if let Some(table) = engine.borrow_mut().as_mut() {
                    let actions = match ev.key().to_ascii_lowercase().as_str() {
                        "d" => table.core.draw_from_deck(),
                        "s" => table.core.shuffle_deck(),
                        "f" => table.core.flip_selected(),
                        "u" => table.core.unstack_selected(),
                        "g" => table.core.stack_selected_on_hover(),
                        _ => return,
                    };
                    ev.prevent_default();
                    process_intents(actions, sender);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <div class="table-host">
            <canvas
                class="table-canvas"
                node_ref=canvas_ref
                tabindex="0"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:dblclick=on_double_click
                on:contextmenu=on_context_menu
                on:keydown=on_key_down
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
