//! Hover Pause Coordinator - freeze Auto rotation while any card is hovered.
//!
//! Tracks the set of hovered card indices. Any non-empty set raises the pause
//! flag consumed by the rotation controller in Auto mode. Hover never pauses
//! a drag: the controller ignores the flag entirely while Dragging.
//!
//! On touch-only hosts with no hover concept, construct the coordinator
//! disabled - every operation becomes a no-op and the flag stays down.

use std::collections::HashSet;

use spark_signals::{Signal, signal};

/// Hovered-card bookkeeping for one carousel instance.
pub struct HoverPauseCoordinator {
    hovered: HashSet<usize>,
    paused: Signal<bool>,
    enabled: bool,
}

impl HoverPauseCoordinator {
    /// Create a coordinator. Pass `enabled = false` on touch-only hosts.
    pub fn new(enabled: bool) -> Self {
        Self {
            hovered: HashSet::new(),
            paused: signal(false),
            enabled,
        }
    }

    /// Whether Auto-mode time advance should be frozen right now.
    pub fn is_paused(&self) -> bool {
        self.enabled && !self.hovered.is_empty()
    }

    /// The pause flag as a signal, for reactive consumers.
    pub fn paused_signal(&self) -> Signal<bool> {
        self.paused.clone()
    }

    /// Number of currently hovered cards.
    pub fn hovered_count(&self) -> usize {
        self.hovered.len()
    }

    /// Pointer entered a card's region.
    pub fn enter(&mut self, card_index: usize) {
        if !self.enabled {
            return;
        }
        self.hovered.insert(card_index);
        self.sync();
    }

    /// Pointer left a card's region. Leaving a card that was never entered
    /// is a no-op (input devices are unreliable).
    pub fn leave(&mut self, card_index: usize) {
        if !self.enabled {
            return;
        }
        self.hovered.remove(&card_index);
        self.sync();
    }

    /// Drop all hover state (e.g. pointer left the whole viewport).
    pub fn clear(&mut self) {
        self.hovered.clear();
        self.sync();
    }

    fn sync(&self) {
        let paused = self.is_paused();
        if self.paused.get() != paused {
            self.paused.set(paused);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_does_not_pause() {
        let hover = HoverPauseCoordinator::new(true);
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_enter_leave() {
        let mut hover = HoverPauseCoordinator::new(true);
        hover.enter(3);
        assert!(hover.is_paused());
        assert_eq!(hover.hovered_count(), 1);

        hover.leave(3);
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_overlapping_hovers() {
        // Adjacent faces can overlap near the ring edge; pause holds until
        // the last one is left.
        let mut hover = HoverPauseCoordinator::new(true);
        hover.enter(1);
        hover.enter(2);
        hover.leave(1);
        assert!(hover.is_paused());
        hover.leave(2);
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_duplicate_enter_is_one_entry() {
        let mut hover = HoverPauseCoordinator::new(true);
        hover.enter(4);
        hover.enter(4);
        assert_eq!(hover.hovered_count(), 1);
        hover.leave(4);
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_stray_leave_ignored() {
        let mut hover = HoverPauseCoordinator::new(true);
        hover.leave(9);
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_disabled_coordinator_is_inert() {
        let mut hover = HoverPauseCoordinator::new(false);
        hover.enter(0);
        hover.enter(1);
        assert!(!hover.is_paused());
        assert_eq!(hover.hovered_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut hover = HoverPauseCoordinator::new(true);
        hover.enter(0);
        hover.enter(5);
        hover.clear();
        assert!(!hover.is_paused());
    }

    #[test]
    fn test_paused_signal_tracks_state() {
        let mut hover = HoverPauseCoordinator::new(true);
        let paused = hover.paused_signal();
        assert!(!paused.get());

        hover.enter(2);
        assert!(paused.get());

        hover.leave(2);
        assert!(!paused.get());
    }
}
