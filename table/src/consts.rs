//! Shared numeric constants for the table crate.

// ── Card geometry ───────────────────────────────────────────────

/// Rendered card width in CSS pixels; also the hit-box width for both
/// loose cards and stacks.
pub const CARD_W: f64 = 72.0;

/// Rendered card height in CSS pixels; also the hit-box height.
pub const CARD_H: f64 = 100.0;

// ── Stacks ──────────────────────────────────────────────────────

/// Offset of the pile shadow drawn beneath a stack's top card.
pub const STACK_SHADOW_OFFSET: f64 = 3.0;

/// Radius of the pile-size badge.
pub const BADGE_RADIUS: f64 = 10.0;

// ── Intents ─────────────────────────────────────────────────────

/// Minimum spacing between `MOVE` intent emissions (~30/s).
pub const MOVE_THROTTLE_MS: f64 = 33.0;

// ── Background ──────────────────────────────────────────────────

/// Spacing of the faint background grid in CSS pixels.
pub const GRID_STEP: f64 = 40.0;
