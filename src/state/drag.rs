//! Drag Input Adapter - pointer displacement to angle deltas.
//!
//! Captures a single pointer session at pointer-down and converts horizontal
//! displacement into an absolute target angle for the rotation controller:
//!
//! ```text
//! angle = start_angle -/+ (pointer_x - start_x) * sensitivity
//! ```
//!
//! The sign depends on the reading direction so the visible content follows
//! the same gesture direction under mirrored layouts. Sensitivity is a fixed
//! scalar; there is no velocity or inertia model.
//!
//! Only one pointer session is honored per instance: a second pointer-down
//! while captured is ignored, as is any move or release without a session.
//! Input devices are unreliable, so none of that is an error.

use tracing::trace;

use crate::types::ReadingDirection;

// =============================================================================
// DRAG SESSION
// =============================================================================

/// The anchor of an active gesture. Exists only while a pointer is captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at capture, in pixels.
    pub start_pointer_x: f64,
    /// Ring angle at capture, in degrees.
    pub start_angle_deg: f64,
}

// =============================================================================
// DRAG INPUT ADAPTER
// =============================================================================

/// Converts pointer displacement into angle targets for one carousel instance.
#[derive(Debug)]
pub struct DragInputAdapter {
    sensitivity: f64,
    reading_direction: ReadingDirection,
    session: Option<DragSession>,
}

impl DragInputAdapter {
    /// Create an adapter with a fixed sensitivity (degrees per pixel).
    pub fn new(sensitivity: f64, reading_direction: ReadingDirection) -> Self {
        Self {
            sensitivity,
            reading_direction,
            session: None,
        }
    }

    /// Whether a pointer session is currently captured.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Capture a pointer session. Returns false if one is already active
    /// (a second pointer-down mid-drag is ignored).
    pub fn begin(&mut self, pointer_x: f64, current_angle_deg: f64) -> bool {
        if self.session.is_some() {
            return false;
        }
        trace!(pointer_x, current_angle_deg, "drag: capture");
        self.session = Some(DragSession {
            start_pointer_x: pointer_x,
            start_angle_deg: current_angle_deg,
        });
        true
    }

    /// Convert the current pointer position into a target angle.
    ///
    /// Returns `None` when no session is captured (stray move events).
    /// The result is unwrapped - the rotation controller wraps on apply.
    pub fn update(&self, pointer_x: f64) -> Option<f64> {
        let session = self.session?;
        let displacement = (pointer_x - session.start_pointer_x) * self.sensitivity;
        let angle = match self.reading_direction {
            ReadingDirection::LeftToRight => session.start_angle_deg - displacement,
            ReadingDirection::RightToLeft => session.start_angle_deg + displacement,
        };
        Some(angle)
    }

    /// End the session. Returns false on a stray release with no session.
    pub fn finish(&mut self) -> bool {
        if self.session.take().is_some() {
            trace!("drag: release");
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
