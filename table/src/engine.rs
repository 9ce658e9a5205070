//! Top-level engine: interaction state machine over the live snapshot.
//!
//! ARCHITECTURE
//! ============
//! [`TableCore`] holds everything that does not need a browser — the
//! snapshot mirror and the hover/selection/drag machine — and is what
//! the unit tests drive. Input handlers return the [`GameAction`]
//! intents the gesture produced; the host encodes and sends them. The
//! core never moves a card locally: a dragged card visually follows the
//! pointer only once the server's next snapshot says so.
//!
//! [`Table`] wraps the core together with the canvas element and the
//! image cache for the browser build.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use protocol::{GameAction, Snapshot, Target, TargetKind};

use crate::assets::AssetCache;
use crate::consts::MOVE_THROTTLE_MS;
use crate::hit::hit_test;
use crate::input::{Button, DragState, InteractionState, Point};
use crate::view::ViewModel;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Table`] so it can be tested without WASM/browser
/// dependencies. Timestamps are injected by the caller (`now_ms`), never
/// read from a clock here.
#[derive(Debug, Default)]
pub struct TableCore {
    pub view: ViewModel,
    pub interaction: InteractionState,
}

impl TableCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the snapshot and prune interaction targets whose ids no
    /// longer exist.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.view.apply(snapshot);

        if let Some(hover) = &self.interaction.hover
            && !self.view.contains(hover)
        {
            self.interaction.hover = None;
        }
        if let Some(selected) = &self.interaction.selected
            && !self.view.contains(selected)
        {
            self.interaction.selected = None;
        }
        if let Some(drag) = &self.interaction.drag
            && !self.view.contains(&drag.target)
        {
            self.interaction.drag = None;
        }
    }

    /// Transport closed or errored: drop the snapshot and go idle.
    pub fn reset_connection(&mut self) {
        self.view.clear();
        self.interaction.reset();
    }

    // --- Pointer events ---

    /// Primary button down: select and pick up a hit target, or clear the
    /// selection on empty space. Other buttons are handled elsewhere.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button, now_ms: f64) -> Vec<GameAction> {
        if button != Button::Primary {
            return Vec::new();
        }

        let Some(snapshot) = self.view.snapshot() else {
            return Vec::new();
        };

        match hit_test(pt, snapshot) {
            Some(target) => {
                let (tx, ty) = self.view.position_of(&target).unwrap_or((pt.x, pt.y));
                self.interaction.selected = Some(target.clone());
                self.interaction.drag = Some(DragState {
                    target: target.clone(),
                    grab_dx: pt.x - tx,
                    grab_dy: pt.y - ty,
                    last_move_ms: now_ms,
                });
                vec![GameAction::Pickup { target }]
            }
            None => {
                // An in-progress drag is left alone; only the selection clears.
                self.interaction.selected = None;
                Vec::new()
            }
        }
    }

    /// Pointer motion: throttled `MOVE` while dragging, hover tracking
    /// otherwise.
    pub fn on_pointer_move(&mut self, pt: Point, now_ms: f64) -> Vec<GameAction> {
        if let Some(drag) = &mut self.interaction.drag {
            if now_ms - drag.last_move_ms < MOVE_THROTTLE_MS {
                return Vec::new();
            }
            drag.last_move_ms = now_ms;
            let candidate = drag.candidate(pt);
            return vec![GameAction::Move { target: drag.target.clone(), x: candidate.x, y: candidate.y }];
        }

        self.interaction.hover = self.view.snapshot().and_then(|s| hit_test(pt, s));
        Vec::new()
    }

    /// Pointer up: finish a drag with a `DROP` carrying the latest
    /// computed position, throttle or not. Selection is retained.
    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<GameAction> {
        self.interaction.hover = None;

        let Some(drag) = self.interaction.drag.take() else {
            return Vec::new();
        };
        let candidate = drag.candidate(pt);
        vec![GameAction::Drop { target: drag.target, x: candidate.x, y: candidate.y }]
    }

    /// Double-click: flip whatever was hit, independent of selection.
    pub fn on_double_click(&mut self, pt: Point) -> Vec<GameAction> {
        let Some(snapshot) = self.view.snapshot() else {
            return Vec::new();
        };
        match hit_test(pt, snapshot) {
            Some(target) => vec![GameAction::Flip { target }],
            None => Vec::new(),
        }
    }

    /// Secondary click: pop the top card off a hit stack. No effect on
    /// loose cards or empty space.
    pub fn on_secondary_down(&mut self, pt: Point) -> Vec<GameAction> {
        let Some(snapshot) = self.view.snapshot() else {
            return Vec::new();
        };
        match hit_test(pt, snapshot) {
            Some(target) if target.kind == TargetKind::Stack => {
                vec![GameAction::UnstackTop { target }]
            }
            _ => Vec::new(),
        }
    }

    // --- Explicit commands ---

    #[must_use]
    pub fn draw_from_deck(&self) -> Vec<GameAction> {
        vec![GameAction::Draw]
    }

    #[must_use]
    pub fn shuffle_deck(&self) -> Vec<GameAction> {
        vec![GameAction::ShuffleDeck]
    }

    /// Flip the selected target; no-op without a selection.
    #[must_use]
    pub fn flip_selected(&self) -> Vec<GameAction> {
        match &self.interaction.selected {
            Some(target) => vec![GameAction::Flip { target: target.clone() }],
            None => Vec::new(),
        }
    }

    /// Unstack from the selected stack; no-op unless a stack is selected.
    #[must_use]
    pub fn unstack_selected(&self) -> Vec<GameAction> {
        match &self.interaction.selected {
            Some(target) if target.kind == TargetKind::Stack => {
                vec![GameAction::UnstackTop { target: target.clone() }]
            }
            _ => Vec::new(),
        }
    }

    /// Stack the selected card onto the hovered card. Emitted only when
    /// both are cards and their ids differ; never otherwise.
    #[must_use]
    pub fn stack_selected_on_hover(&self) -> Vec<GameAction> {
        let (Some(selected), Some(hover)) = (&self.interaction.selected, &self.interaction.hover) else {
            return Vec::new();
        };
        if selected.kind != TargetKind::Card || hover.kind != TargetKind::Card || selected.id == hover.id {
            return Vec::new();
        }
        vec![GameAction::Stack { a_card_id: selected.id.clone(), b_card_id: hover.id.clone() }]
    }

    // --- Queries ---

    /// The currently selected target, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Target> {
        self.interaction.selected.as_ref()
    }
}

/// The full table engine. Wraps [`TableCore`] and owns the browser
/// canvas element plus the image cache.
pub struct Table {
    canvas: HtmlCanvasElement,
    assets: AssetCache,
    pub core: TableCore,
}

impl Table {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, assets: AssetCache::new(), core: TableCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.core.apply_snapshot(snapshot);
    }

    pub fn reset_connection(&mut self) {
        self.core.reset_connection();
    }

    // --- Render ---

    /// Composite the current frame.
    ///
    /// Resizes the backing store to the displayed size times the device
    /// pixel ratio, but only when the dimensions actually changed, then
    /// hands off to [`crate::render::draw`]. Asset load completion is
    /// re-checked here every frame; a placeholder is drawn until an
    /// image is ready.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D`
    /// call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let css_w = f64::from(self.canvas.client_width());
        let css_h = f64::from(self.canvas.client_height());

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (backing_w, backing_h) = ((css_w * dpr) as u32, (css_h * dpr) as u32);
        if self.canvas.width() != backing_w {
            self.canvas.set_width(backing_w);
        }
        if self.canvas.height() != backing_h {
            self.canvas.set_height(backing_h);
        }

        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

        crate::render::draw(&ctx, &self.core.view, &self.core.interaction, &mut self.assets, css_w, css_h, dpr)
    }
}
