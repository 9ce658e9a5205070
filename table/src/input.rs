//! Pointer types and the interaction state tracked between events.
//!
//! Hover, selection, and drag are deliberately independent: a drag keeps
//! its selection, and hover can point at a second card while another is
//! selected (that pairing is what arms the `STACK` command). All three
//! are client-local and never survive a disconnect.

use protocol::Target;

/// A point in CSS-pixel canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button; arrives via the context-menu event.
    Secondary,
}

/// An in-progress drag, alive between pickup and drop.
#[derive(Debug, Clone)]
pub struct DragState {
    /// What is being dragged.
    pub target: Target,
    /// Pointer-to-target offset captured at pickup, so the card does not
    /// jump under the cursor.
    pub grab_dx: f64,
    pub grab_dy: f64,
    /// Timestamp of the last `MOVE` emission; pickup time initially, so
    /// the first move inside the throttle window stays silent.
    pub last_move_ms: f64,
}

impl DragState {
    /// Candidate target position for the given pointer location.
    #[must_use]
    pub fn candidate(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.grab_dx, pointer.y - self.grab_dy)
    }
}

/// Ephemeral interaction state consumed by the renderer.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Target currently under the pointer, if any.
    pub hover: Option<Target>,
    /// Target picked by the last pointer-down on a hit; survives drops
    /// and snapshot replacements while its id exists.
    pub selected: Option<Target>,
    /// Active drag, if any.
    pub drag: Option<DragState>,
}

impl InteractionState {
    /// Drop everything, including selection. Used on disconnect.
    pub fn reset(&mut self) {
        self.hover = None;
        self.selected = None;
        self.drag = None;
    }
}
