//! Pointer Module - pointer event model, hit regions, crossterm bridge.
//!
//! The engine consumes a small pointer vocabulary: down, move, up, cancel,
//! all carrying a position in pixels. This module defines that vocabulary,
//! the rectangular hit regions the host feeds back after painting (viewport
//! and per-card bounds), and the conversion from crossterm mouse events for
//! terminal hosts.
//!
//! Hover enter/leave is not part of the event vocabulary: the engine derives
//! it by hit-testing move events against the card regions, so hosts that
//! already track hover themselves can instead call the coordinator directly.

use crossterm::event::{MouseEvent as CrosstermMouseEvent, MouseEventKind};

// =============================================================================
// POINTER EVENTS
// =============================================================================

/// Pointer action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Primary button pressed.
    Down,
    /// Pointer moved (with or without the button held).
    Move,
    /// Primary button released.
    Up,
    /// Gesture aborted by the host (capture lost, pointer left the window).
    Cancel,
}

/// One pointer event in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(action: PointerAction, x: f64, y: f64) -> Self {
        Self { action, x, y }
    }

    /// Create a pointer-down event.
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    /// Create a pointer-move event.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    /// Create a pointer-up event.
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    /// Create a cancel event.
    pub fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Cancel, x, y)
    }
}

// =============================================================================
// HIT REGIONS
// =============================================================================

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether a point lies inside (edges inclusive on the near side).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The painted bounds of one card face, fed back by the host after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub bounds: Rect,
    pub card_index: usize,
}

impl HitRegion {
    /// Create a hit region for a card.
    pub fn new(bounds: Rect, card_index: usize) -> Self {
        Self { bounds, card_index }
    }
}

/// Find the topmost card under a point.
///
/// Later regions win, matching paint order (the host pushes back-to-front).
pub fn hit_test(regions: &[HitRegion], x: f64, y: f64) -> Option<usize> {
    regions
        .iter()
        .rev()
        .find(|region| region.bounds.contains(x, y))
        .map(|region| region.card_index)
}

// =============================================================================
// CROSSTERM BRIDGE
// =============================================================================

/// Convert a crossterm mouse event for terminal hosts.
///
/// Left button only; everything else (right/middle buttons, scroll) returns
/// `None` and is left for the host to interpret. Cell coordinates pass
/// through as pixels - terminal hosts size their configs in cells.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    use crossterm::event::MouseButton;

    let (x, y) = (event.column as f64, event.row as f64);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::down(x, y)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::move_to(x, y)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::up(x, y)),
        MouseEventKind::Moved => Some(PointerEvent::move_to(x, y)),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
