//! Rendering: composites the board to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of
//! the snapshot and interaction state and produces pixels. The asset
//! cache is the one exception: polling it for a face image starts the
//! fetch the first time a URL is seen, which is why it comes in as
//! `&mut`.
//!
//! All fallible `Canvas2D` calls propagate errors via
//! `Result<(), JsValue>`. The top-level caller
//! ([`crate::engine::Table::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use protocol::{Card, Rect, Snapshot, Stack, TargetKind, Zones};

use crate::assets::AssetCache;
use crate::consts::{BADGE_RADIUS, CARD_H, CARD_W, GRID_STEP, STACK_SHADOW_OFFSET};
use crate::input::InteractionState;
use crate::view::{ViewModel, loose_cards, stack_top_card, stacked_ids};

const BACKGROUND: &str = "#f6f3ec";
const GRID_LINE: &str = "#e7e2d8";
const ZONE_LINE: &str = "#b9b2a4";
const ZONE_LABEL: &str = "#8d8578";
const CARD_EDGE: &str = "#6b6257";
const PLACEHOLDER_BG: &str = "#fffdf8";
const PLACEHOLDER_TEXT: &str = "#9a9183";
const SHADOW: &str = "rgba(0, 0, 0, 0.25)";
const BADGE_BG: &str = "#3d3833";
const BADGE_TEXT: &str = "#ffffff";
const SELECTION_OUTLINE: &str = "#e8861b";
const HOVER_OUTLINE: &str = "#4f8fde";

/// Draw the full board: grid, zones, stacks, loose cards.
///
/// `viewport_w` and `viewport_h` are in CSS pixels; `dpr` is the device
/// pixel ratio already applied to the backing store by the caller.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    view: &ViewModel,
    interaction: &InteractionState,
    assets: &mut AssetCache,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear in device pixels, then draw in CSS pixels.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    draw_grid(ctx, viewport_w, viewport_h);

    // Before the first STATE message there is nothing else to draw.
    let Some(snapshot) = view.snapshot() else {
        return Ok(());
    };

    if let Some(zones) = &snapshot.zones {
        draw_zones(ctx, zones)?;
    }

    // Layer 2: stacks first, then loose cards, both in list order so the
    // later entries land on top — the mirror of reverse-order hit-testing.
    let stacked = stacked_ids(snapshot);
    for stack in &snapshot.stacks {
        draw_stack(ctx, snapshot, stack, interaction, assets)?;
    }
    let loose: Vec<&Card> = loose_cards(snapshot, &stacked).collect();
    for card in loose {
        draw_card_face(ctx, assets, card, card.x, card.y)?;
        draw_outline(ctx, interaction, TargetKind::Card, &card.id, card.x, card.y);
    }

    Ok(())
}

// =============================================================
// Background
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let mut x = GRID_STEP;
    while x < w {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        x += GRID_STEP;
    }
    let mut y = GRID_STEP;
    while y < h {
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        y += GRID_STEP;
    }
    ctx.stroke();
}

fn draw_zones(ctx: &CanvasRenderingContext2d, zones: &Zones) -> Result<(), JsValue> {
    draw_zone(ctx, &zones.table, "table")?;
    draw_zone(ctx, &zones.deck, "deck")?;
    draw_zone(ctx, &zones.discard, "discard")?;
    draw_zone(ctx, &zones.hand, "hand")
}

fn draw_zone(ctx: &CanvasRenderingContext2d, rect: &Rect, label: &str) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(ZONE_LINE);
    ctx.set_line_width(1.5);
    ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
    ctx.set_fill_style_str(ZONE_LABEL);
    ctx.set_font("10px sans-serif");
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text(label, rect.x + 4.0, rect.y + 3.0)
}

// =============================================================
// Cards and stacks
// =============================================================

fn draw_stack(
    ctx: &CanvasRenderingContext2d,
    snapshot: &Snapshot,
    stack: &Stack,
    interaction: &InteractionState,
    assets: &mut AssetCache,
) -> Result<(), JsValue> {
    // Pile shadow hints at the cards underneath the top one.
    ctx.set_fill_style_str(SHADOW);
    ctx.fill_rect(stack.x + STACK_SHADOW_OFFSET, stack.y + STACK_SHADOW_OFFSET, CARD_W, CARD_H);

    if let Some(top) = stack_top_card(snapshot, stack) {
        draw_card_face(ctx, assets, top, stack.x, stack.y)?;
    }

    draw_badge(ctx, stack.x + CARD_W, stack.y, stack.card_ids.len())?;
    draw_outline(ctx, interaction, TargetKind::Stack, &stack.stack_id, stack.x, stack.y);
    Ok(())
}

/// Draw a card's visible face at the given position.
///
/// The front image is shown only when the card is logically face-up
/// *and* the server disclosed a front reference; a withheld reference
/// always falls back to the back, regardless of the flag. While an
/// image is still loading, a textual placeholder stands in and the next
/// frame polls again.
fn draw_card_face(
    ctx: &CanvasRenderingContext2d,
    assets: &mut AssetCache,
    card: &Card,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let (reference, label) = match (&card.front_image, card.face_up) {
        (Some(front), true) => (front.as_str(), "FRONT"),
        _ => (card.back_image.as_str(), "BACK"),
    };

    if let Some(image) = assets.ready(reference) {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, CARD_W, CARD_H)?;
    } else {
        ctx.set_fill_style_str(PLACEHOLDER_BG);
        ctx.fill_rect(x, y, CARD_W, CARD_H);
        ctx.set_fill_style_str(PLACEHOLDER_TEXT);
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(label, x + CARD_W / 2.0, y + CARD_H / 2.0)?;
    }

    ctx.set_stroke_style_str(CARD_EDGE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(x, y, CARD_W, CARD_H);
    Ok(())
}

fn draw_badge(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, count: usize) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(cx, cy, BADGE_RADIUS, 0.0, std::f64::consts::TAU)?;
    ctx.set_fill_style_str(BADGE_BG);
    ctx.fill();
    ctx.set_fill_style_str(BADGE_TEXT);
    ctx.set_font("10px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&count.to_string(), cx, cy)
}

/// Selection outline wins over hover when both match the same target.
fn draw_outline(
    ctx: &CanvasRenderingContext2d,
    interaction: &InteractionState,
    kind: TargetKind,
    id: &str,
    x: f64,
    y: f64,
) {
    let matches = |t: &protocol::Target| t.kind == kind && t.id == id;

    let color = if interaction.selected.as_ref().is_some_and(matches) {
        SELECTION_OUTLINE
    } else if interaction.hover.as_ref().is_some_and(matches) {
        HOVER_OUTLINE
    } else {
        return;
    };

    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    ctx.stroke_rect(x - 2.0, y - 2.0, CARD_W + 4.0, CARD_H + 4.0);
}
