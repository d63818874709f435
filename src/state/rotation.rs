//! Rotation Controller - the Auto/Dragging angle state machine.
//!
//! Owns the ring's rotation state: the current angle (always wrapped to
//! [0, 360)), the mode, and the last tick timestamp. Mutation happens only
//! through the transition methods below, which delegate the arithmetic to the
//! pure functions [`wrap_deg`] and [`advance`] so the machine is testable
//! without a rendering surface.
//!
//! # Modes
//!
//! - **Auto** (initial): the angle advances as a function of elapsed time,
//!   unless the hover-pause flag is raised.
//! - **Dragging**: the angle is driven only by drag-derived updates; clock
//!   ticks and hover are ignored entirely.
//!
//! Exactly one mode holds at any instant. Dragging always takes precedence
//! over hover-pause.

use std::cell::Cell;

use spark_signals::{Signal, signal};
use tracing::trace;

use crate::config::CarouselConfig;

// =============================================================================
// PURE ANGLE MATH
// =============================================================================

/// Wrap an angle into [0, 360). Wraps, never clamps.
#[inline]
pub fn wrap_deg(angle_deg: f64) -> f64 {
    angle_deg.rem_euclid(360.0)
}

/// Advance an angle by elapsed time at a signed speed, wrapped.
#[inline]
pub fn advance(angle_deg: f64, delta_ms: f64, signed_speed_deg_per_ms: f64) -> f64 {
    wrap_deg(angle_deg + signed_speed_deg_per_ms * delta_ms)
}

// =============================================================================
// ROTATION MODE
// =============================================================================

/// The two states of the rotation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Rotation advances purely as a function of elapsed time.
    #[default]
    Auto,
    /// Rotation is driven directly by pointer displacement.
    Dragging,
}

// =============================================================================
// ROTATION CONTROLLER
// =============================================================================

/// Owner of the rotation state for one carousel instance.
///
/// Angle and mode are signals so hosts can build reactive render effects on
/// them; the last tick timestamp is plain interior state, invisible outside.
pub struct RotationController {
    angle: Signal<f64>,
    mode: Signal<RotationMode>,
    last_tick_ms: Cell<Option<f64>>,
    signed_speed: f64,
}

impl RotationController {
    /// Create a controller at angle 0 in Auto mode.
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            angle: signal(0.0),
            mode: signal(RotationMode::Auto),
            last_tick_ms: Cell::new(None),
            signed_speed: config.signed_speed(),
        }
    }

    /// Current angle in [0, 360).
    pub fn angle(&self) -> f64 {
        self.angle.get()
    }

    /// The angle signal, for reactive consumers.
    pub fn angle_signal(&self) -> Signal<f64> {
        self.angle.clone()
    }

    /// Current mode.
    pub fn mode(&self) -> RotationMode {
        self.mode.get()
    }

    /// The mode signal, for reactive consumers.
    pub fn mode_signal(&self) -> Signal<RotationMode> {
        self.mode.clone()
    }

    /// Process one clock tick.
    ///
    /// The delta is computed from the previous tick's timestamp - ticks are
    /// never assumed equidistant. A first tick only records the timestamp.
    /// A large delta after a suspended clock is applied as-is and produces
    /// one visible jump; there is no smoothing or clamping here.
    ///
    /// The timestamp is recorded even when the angle is frozen (Dragging or
    /// hover-paused), so resuming Auto never replays the frozen interval.
    pub fn tick(&self, now_ms: f64, hover_paused: bool) {
        let Some(last) = self.last_tick_ms.get() else {
            self.last_tick_ms.set(Some(now_ms));
            return;
        };

        let delta_ms = now_ms - last;
        if delta_ms <= 0.0 {
            // Non-monotonic or duplicate timestamp; input clocks are
            // unreliable. Keep the existing base so the next valid tick
            // measures only real elapsed time.
            return;
        }
        self.last_tick_ms.set(Some(now_ms));

        if self.mode.get() == RotationMode::Dragging {
            return;
        }
        if hover_paused {
            return;
        }

        self.angle.set(advance(self.angle.get(), delta_ms, self.signed_speed));
    }

    /// Transition Auto -> Dragging. Returns the anchor angle for the gesture.
    ///
    /// Calling while already Dragging just returns the current angle.
    pub fn begin_drag(&self) -> f64 {
        if self.mode.get() != RotationMode::Dragging {
            trace!("rotation: begin drag");
            self.mode.set(RotationMode::Dragging);
        }
        self.angle.get()
    }

    /// Apply a drag-derived angle. Ignored outside Dragging mode, so a stray
    /// move event after release cannot disturb Auto rotation.
    pub fn set_drag_angle(&self, angle_deg: f64) {
        if self.mode.get() == RotationMode::Dragging {
            self.angle.set(wrap_deg(angle_deg));
        }
    }

    /// Transition Dragging -> Auto. A stray call while already Auto is a no-op.
    pub fn end_drag(&self) {
        if self.mode.get() == RotationMode::Dragging {
            trace!("rotation: end drag");
            self.mode.set(RotationMode::Auto);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn controller(speed: f64) -> RotationController {
        RotationController::new(&CarouselConfig::new(13, 300.0).with_speed(speed))
    }

    #[test]
    fn test_wrap_deg() {
        assert_eq!(wrap_deg(0.0), 0.0);
        assert_eq!(wrap_deg(360.0), 0.0);
        assert_eq!(wrap_deg(361.0), 1.0);
        assert_eq!(wrap_deg(-1.0), 359.0);
        assert_eq!(wrap_deg(720.5), 0.5);
    }

    #[test]
    fn test_wrap_around_359_plus_2() {
        // 359 + 2 = 1, never 361 and never negative
        let angle = advance(359.0, 2.0, 1.0);
        assert!((angle - 1.0).abs() < EPSILON);
        assert!(angle >= 0.0 && angle < 360.0);
    }

    #[test]
    fn test_first_tick_only_records_timestamp() {
        let ctl = controller(0.015);
        ctl.tick(1_000.0, false);
        assert_eq!(ctl.angle(), 0.0);

        ctl.tick(1_100.0, false);
        assert!((ctl.angle() - 0.015 * 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_chunking_invariance() {
        // One 24000ms delta vs many uneven chunks must land on the same angle.
        let one = controller(0.015);
        one.tick(0.0, false);
        one.tick(24_000.0, false);

        let many = controller(0.015);
        many.tick(0.0, false);
        let chunks = [16.0, 7.0, 33.0, 944.0, 3_000.0, 11_000.0, 9_000.0];
        let mut now = 0.0;
        for chunk in chunks {
            now += chunk;
            many.tick(now, false);
        }
        assert!((now - 24_000.0).abs() < EPSILON);
        assert!((one.angle() - many.angle()).abs() < 1e-6);
    }

    #[test]
    fn test_full_revolution_lands_on_zero() {
        // 0.015 deg/ms * 24000 ms = 360 = one exact revolution
        let ctl = controller(0.015);
        ctl.tick(0.0, false);
        ctl.tick(24_000.0, false);
        let angle = ctl.angle();
        let distance_to_zero = angle.min(360.0 - angle);
        assert!(distance_to_zero < 1e-6, "angle was {angle}");
    }

    #[test]
    fn test_reverse_direction_decreases() {
        let config = CarouselConfig::new(9, 250.0)
            .with_speed(0.018)
            .with_direction(crate::config::SpinDirection::Reverse);
        let ctl = RotationController::new(&config);
        ctl.tick(0.0, false);

        let mut previous = ctl.angle();
        for step in 1..=50u32 {
            ctl.tick(step as f64 * 17.0, false);
            let current = ctl.angle();
            // Strictly decreasing modulo 360
            let diff = wrap_deg(previous - current);
            assert!(diff > 0.0 && diff < 180.0, "step {step}: {previous} -> {current}");
            previous = current;
        }
    }

    #[test]
    fn test_zero_speed_is_static() {
        let ctl = controller(0.0);
        ctl.tick(0.0, false);
        ctl.tick(10_000.0, false);
        assert_eq!(ctl.angle(), 0.0);
        assert_eq!(ctl.mode(), RotationMode::Auto);
    }

    #[test]
    fn test_hover_pause_freezes_angle() {
        let ctl = controller(0.015);
        ctl.tick(0.0, false);
        ctl.tick(100.0, false);
        let frozen = ctl.angle();

        for step in 2..=20u32 {
            ctl.tick(step as f64 * 100.0, true);
            assert_eq!(ctl.angle(), frozen);
        }

        // Resume: only the post-hover interval advances the angle
        ctl.tick(2_100.0, false);
        assert!((ctl.angle() - wrap_deg(frozen + 0.015 * 100.0)).abs() < EPSILON);
    }

    #[test]
    fn test_ticks_ignored_while_dragging() {
        let ctl = controller(0.015);
        ctl.tick(0.0, false);

        let anchor = ctl.begin_drag();
        assert_eq!(anchor, 0.0);
        assert_eq!(ctl.mode(), RotationMode::Dragging);

        // Hover is irrelevant while dragging; so is the clock formula
        ctl.tick(5_000.0, false);
        ctl.tick(10_000.0, true);
        assert_eq!(ctl.angle(), 0.0);

        ctl.set_drag_angle(-20.0);
        assert_eq!(ctl.angle(), 340.0);

        ctl.end_drag();
        assert_eq!(ctl.mode(), RotationMode::Auto);

        // Auto resumes from the last recorded timestamp, not from drag start
        ctl.tick(10_100.0, false);
        assert!((ctl.angle() - wrap_deg(340.0 + 0.015 * 100.0)).abs() < EPSILON);
    }

    #[test]
    fn test_drag_angle_ignored_in_auto() {
        let ctl = controller(0.015);
        ctl.set_drag_angle(123.0);
        assert_eq!(ctl.angle(), 0.0);
    }

    #[test]
    fn test_stray_end_drag_is_noop() {
        let ctl = controller(0.015);
        ctl.end_drag();
        assert_eq!(ctl.mode(), RotationMode::Auto);
    }

    #[test]
    fn test_non_monotonic_tick_ignored() {
        let ctl = controller(0.015);
        ctl.tick(1_000.0, false);
        ctl.tick(500.0, false); // clock went backwards
        assert_eq!(ctl.angle(), 0.0);
    }

    #[test]
    fn test_backwards_tick_does_not_shift_delta_base() {
        // A rejected timestamp must not become the base for the next delta:
        // 1000 -> 500 (ignored) -> 1100 is 100ms of real time, not 600.
        let ctl = controller(0.015);
        ctl.tick(1_000.0, false);
        ctl.tick(500.0, false);
        ctl.tick(1_100.0, false);
        assert!((ctl.angle() - 0.015 * 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_large_delta_produces_one_jump() {
        // Suspended clock: a single large delta is accepted as-is.
        let ctl = controller(0.015);
        ctl.tick(0.0, false);
        ctl.tick(1_000_000.0, false);
        assert!((ctl.angle() - wrap_deg(0.015 * 1_000_000.0)).abs() < 1e-6);
    }
}
