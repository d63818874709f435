//! Frame Clock - cancellable tick source at display-refresh cadence.
//!
//! Emits monotonically increasing `Instant` timestamps from a background
//! timer thread into a channel the host's render loop drains. The delta
//! between ticks is **not** guaranteed constant - the engine computes elapsed
//! time per tick and never assumes a fixed step.
//!
//! The clock must be cancelled on teardown; a clock left running is a
//! resource leak. `Drop` cancels, and the timer thread also exits on its own
//! once the receiving half is gone. If ticks are suspended (host backgrounded)
//! and resume later, the single large delta flows through unmodified and the
//! ring jumps - there is no interpolation.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::state::FrameClock;
//!
//! let clock = FrameClock::start(60);
//! loop {
//!     for at in clock.try_ticks() {
//!         engine.tick(at);
//!     }
//!     // ... poll input, render ...
//! }
//! // dropped => cancelled
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryIter, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::trace;

/// A cancellable per-instance tick source.
pub struct FrameClock {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    ticks: Receiver<Instant>,
}

impl FrameClock {
    /// Start a clock at the given cadence.
    ///
    /// `fps == 0` yields an inert clock: no thread, never any ticks. That is
    /// the "static ring" configuration, not an error.
    pub fn start(fps: u8) -> Self {
        let (tx, rx) = channel();

        if fps == 0 {
            // Sender dropped immediately: try_ticks() stays empty forever.
            return Self {
                running: Arc::new(AtomicBool::new(false)),
                handle: None,
                ticks: rx,
            };
        }

        let interval = Duration::from_millis(1000 / fps as u64);
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = running.clone();

        trace!(fps, "frame clock: start");
        let handle = thread::spawn(move || {
            while thread_running.load(Ordering::SeqCst) {
                thread::sleep(interval);
                if !thread_running.load(Ordering::SeqCst) {
                    break;
                }
                // Receiver dropped means the engine is gone; stop re-arming.
                if tx.send(Instant::now()).is_err() {
                    break;
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
            ticks: rx,
        }
    }

    /// Whether the timer thread is still armed.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Drain all ticks delivered since the last call (non-blocking).
    pub fn try_ticks(&self) -> TryIter<'_, Instant> {
        self.ticks.try_iter()
    }

    /// Stop requesting future ticks.
    ///
    /// The thread exits on its next wakeup; we deliberately do not join here
    /// to avoid blocking the render loop on a sleeping timer.
    pub fn cancel(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            trace!("frame clock: cancel");
        }
        self.handle.take();
    }
}

impl Drop for FrameClock {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_delivers_increasing_timestamps() {
        let clock = FrameClock::start(100);
        thread::sleep(Duration::from_millis(60));

        let ticks: Vec<Instant> = clock.try_ticks().collect();
        assert!(!ticks.is_empty(), "expected at least one tick in 60ms at 100fps");

        for pair in ticks.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut clock = FrameClock::start(100);
        assert!(clock.is_running());

        clock.cancel();
        assert!(!clock.is_running());

        // Allow the thread one wakeup, then drain whatever was in flight.
        thread::sleep(Duration::from_millis(30));
        let _ = clock.try_ticks().count();

        // No further ticks after the drain.
        thread::sleep(Duration::from_millis(30));
        assert_eq!(clock.try_ticks().count(), 0);
    }

    #[test]
    fn test_zero_fps_is_inert() {
        let clock = FrameClock::start(0);
        assert!(!clock.is_running());

        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.try_ticks().count(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut clock = FrameClock::start(60);
        clock.cancel();
        clock.cancel();
        assert!(!clock.is_running());
    }
}
