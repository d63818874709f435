//! Carousel Engine - composition root for one ring instance.
//!
//! Wires the frame clock, rotation controller, drag adapter, hover
//! coordinator, circular layout and card renderer together behind a single
//! per-instance API. Instances are fully independent: each owns its rotation
//! state and timeline, and pointer capture is exclusive - a drag started over
//! one ring is never interpreted by an overlapping second ring.
//!
//! Everything funnels through `&mut self` on the host's render loop, so tick
//! processing and drag processing are serialized by construction.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::{CarouselConfig, CarouselEngine, EngineOptions, FrameClock};
//!
//! let config = CarouselConfig::new(cards.len(), 300.0);
//! let mut engine = CarouselEngine::new(config, cards, EngineOptions::default())?;
//! let clock = FrameClock::start(60);
//!
//! loop {
//!     engine.pump(&clock);
//!     for frame in engine.frame() {
//!         // paint frame.visual at frame.placement
//!     }
//!     // feed pointer events via engine.dispatch(...)
//! }
//! // engine and clock dropped => clock cancelled, state destroyed
//! ```

use std::cell::Cell;
use std::collections::HashSet;
use std::time::Instant;

use spark_signals::{Derived, Signal, derived, signal};
use tracing::debug;

use crate::config::{CarouselConfig, ConfigError};
use crate::layout::{Placement, placement, ring_placements};
use crate::renderer::{CardVisual, render_card};
use crate::state::{
    DragInputAdapter, FrameClock, HitRegion, HoverPauseCoordinator, PointerAction, PointerEvent,
    Rect, RotationController, RotationMode, hit_test,
};
use crate::types::{CardContent, Language, ReadingDirection};

// =============================================================================
// OPTIONS
// =============================================================================

/// Host environment options, fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Which half of each bilingual pair to render initially.
    pub language: Language,
    /// Drag sign convention for mirrored layouts.
    pub reading_direction: ReadingDirection,
    /// Set false on touch-only hosts; the hover coordinator becomes inert.
    pub hover_capable: bool,
}

impl EngineOptions {
    /// Options for a pointer-and-hover host (the common desktop case).
    pub fn desktop() -> Self {
        Self {
            language: Language::Primary,
            reading_direction: ReadingDirection::LeftToRight,
            hover_capable: true,
        }
    }

    /// Options for a touch-only host: no hover concept.
    pub fn touch() -> Self {
        Self {
            hover_capable: false,
            ..Self::desktop()
        }
    }
}

// =============================================================================
// FRAME OUTPUT
// =============================================================================

/// One card face of the current frame: where it sits and what it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFrame {
    pub index: usize,
    pub placement: Placement,
    pub visual: CardVisual,
}

// =============================================================================
// CAROUSEL ENGINE
// =============================================================================

/// One rotating ring of cards.
pub struct CarouselEngine {
    config: CarouselConfig,
    cards: Vec<CardContent>,
    language: Signal<Language>,
    rotation: RotationController,
    drag: DragInputAdapter,
    hover: HoverPauseCoordinator,
    viewport: Option<Rect>,
    regions: Vec<HitRegion>,
    hovered_card: Option<usize>,
    epoch: Cell<Option<Instant>>,
}

impl CarouselEngine {
    /// Construct an engine, validating config and content.
    ///
    /// Fails when the config is degenerate, when the card list length does
    /// not match `config.item_count`, or when card ids collide. The engine
    /// refuses to start rather than render a broken ring.
    pub fn new(
        config: CarouselConfig,
        cards: Vec<CardContent>,
        options: EngineOptions,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if cards.len() != config.item_count {
            return Err(ConfigError::CardCountMismatch {
                expected: config.item_count,
                actual: cards.len(),
            });
        }

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(ConfigError::DuplicateCardId(card.id.clone()));
            }
        }

        debug!(
            item_count = config.item_count,
            radius_px = config.radius_px,
            speed = config.base_speed_deg_per_ms,
            "carousel: constructed"
        );

        Ok(Self {
            rotation: RotationController::new(&config),
            drag: DragInputAdapter::new(config.drag_sensitivity, options.reading_direction),
            hover: HoverPauseCoordinator::new(options.hover_capable),
            language: signal(options.language),
            viewport: None,
            regions: Vec::new(),
            hovered_card: None,
            epoch: Cell::new(None),
            config,
            cards,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The instance configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current ring angle in [0, 360).
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    /// The angle signal, for reactive render effects.
    pub fn angle_signal(&self) -> Signal<f64> {
        self.rotation.angle_signal()
    }

    /// Current rotation mode.
    pub fn mode(&self) -> RotationMode {
        self.rotation.mode()
    }

    /// Whether hover is currently freezing Auto rotation.
    pub fn is_hover_paused(&self) -> bool {
        self.hover.is_paused()
    }

    /// Current render language.
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch the render language live; visuals pick it up on the next frame.
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    /// Process one clock tick with a millisecond timestamp.
    ///
    /// The first tick only records the timestamp; deltas are computed per
    /// tick and never assumed constant.
    pub fn tick_ms(&mut self, now_ms: f64) {
        self.rotation.tick(now_ms, self.hover.is_paused());
    }

    /// Process one clock tick with an `Instant` (as emitted by [`FrameClock`]).
    pub fn tick(&mut self, at: Instant) {
        let epoch = match self.epoch.get() {
            Some(epoch) => epoch,
            None => {
                self.epoch.set(Some(at));
                at
            }
        };
        // Pre-epoch instants can only come from a reordered queue; skip them.
        let Some(elapsed) = at.checked_duration_since(epoch) else {
            return;
        };
        self.tick_ms(elapsed.as_secs_f64() * 1000.0);
    }

    /// Drain all pending ticks from a clock.
    pub fn pump(&mut self, clock: &FrameClock) {
        // Collect first: try_ticks borrows the clock, tick borrows self.
        let ticks: Vec<Instant> = clock.try_ticks().collect();
        for at in ticks {
            self.tick(at);
        }
    }

    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    /// The viewport rect that gates pointer capture for this instance.
    ///
    /// Until one is set, every pointer-down is considered inside - a host
    /// with a single fullscreen ring never needs to call this.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = Some(viewport);
    }

    /// Painted card bounds, fed back by the host after each frame, used to
    /// derive hover enter/leave from pointer moves.
    pub fn set_hit_regions(&mut self, regions: Vec<HitRegion>) {
        self.regions = regions;
    }

    /// Feed one pointer event. Returns true when the event was consumed
    /// (it started, moved, or ended this instance's drag).
    ///
    /// Malformed sequences - a stray up with no matching down, a second
    /// down mid-drag - are silently ignored, never an error.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        match event.action {
            PointerAction::Down => {
                if !self.contains(event.x, event.y) {
                    return false;
                }
                let anchor = self.rotation.angle();
                if self.drag.begin(event.x, anchor) {
                    self.rotation.begin_drag();
                    true
                } else {
                    false
                }
            }
            PointerAction::Move => {
                // The hover set tracks the pointer even mid-drag; the
                // controller only consults it in Auto, so release resumes
                // frozen iff the pointer is still over a card.
                self.track_hover(event.x, event.y);
                if let Some(angle) = self.drag.update(event.x) {
                    self.rotation.set_drag_angle(angle);
                    true
                } else {
                    false
                }
            }
            PointerAction::Up | PointerAction::Cancel => {
                let ended = if self.drag.finish() {
                    self.rotation.end_drag();
                    true
                } else {
                    false
                };
                if event.action == PointerAction::Cancel {
                    // Pointer left the host surface entirely
                    self.hovered_card = None;
                    self.hover.clear();
                }
                ended
            }
        }
    }

    /// Direct hover entry for hosts that track hover natively (e.g. DOM-like
    /// enter/leave callbacks) instead of feeding raw moves.
    pub fn hover_enter(&mut self, card_index: usize) {
        self.hover.enter(card_index);
    }

    /// Direct hover exit, counterpart of [`Self::hover_enter`].
    pub fn hover_leave(&mut self, card_index: usize) {
        self.hover.leave(card_index);
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        self.viewport.map(|rect| rect.contains(x, y)).unwrap_or(true)
    }

    fn track_hover(&mut self, x: f64, y: f64) {
        let now_over = hit_test(&self.regions, x, y);
        if now_over == self.hovered_card {
            return;
        }
        if let Some(previous) = self.hovered_card {
            self.hover.leave(previous);
        }
        if let Some(current) = now_over {
            self.hover.enter(current);
        }
        self.hovered_card = now_over;
    }

    // -------------------------------------------------------------------------
    // Frame output
    // -------------------------------------------------------------------------

    /// Placement of one card face at the current angle.
    pub fn placement(&self, index: usize) -> Placement {
        placement(index, self.rotation.angle(), &self.config)
    }

    /// Placements of all faces at the current angle, in slot order.
    pub fn placements(&self) -> Vec<Placement> {
        ring_placements(self.rotation.angle(), &self.config)
    }

    /// Reactive placements: recomputed whenever the angle signal changes.
    ///
    /// The derived owns clones of the angle signal and config, so it outlives
    /// any borrow of the engine.
    pub fn placements_derived(&self) -> Derived<Vec<Placement>> {
        let angle = self.rotation.angle_signal();
        let config = self.config;
        derived(move || ring_placements(angle.get(), &config))
    }

    /// Resolved visual of one card in the current language.
    pub fn visual(&self, index: usize) -> Option<CardVisual> {
        let card = self.cards.get(index)?;
        Some(render_card(card, self.language.get(), self.face_width()))
    }

    /// The full frame: placement and visual per face, in slot order.
    pub fn frame(&self) -> Vec<CardFrame> {
        let language = self.language.get();
        let face_width = self.face_width();
        let angle = self.rotation.angle();

        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| CardFrame {
                index,
                placement: placement(index, angle, &self.config),
                visual: render_card(card, language, face_width),
            })
            .collect()
    }

    /// Slot indices sorted back-to-front for painter's-algorithm hosts.
    pub fn paint_order(&self) -> Vec<usize> {
        let placements = self.placements();
        let mut order: Vec<usize> = (0..placements.len()).collect();
        order.sort_by(|&a, &b| {
            placements[a]
                .z_px
                .partial_cmp(&placements[b].z_px)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }

    fn face_width(&self) -> u16 {
        // Text budget in cells; pixel hosts treat it as a character budget.
        self.config.item_width_px.round().clamp(0.0, u16::MAX as f64) as u16
    }
}

// =============================================================================
// Tests
// =============================================================================
