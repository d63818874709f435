//! # spark-carousel
//!
//! Reactive rotating 3D showcase carousel engine for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! A ring of N bilingual cards auto-rotates around a virtual vertical-axis
//! cylinder. A pointer drag overrides the clock and drives the angle
//! directly; hovering any card freezes the auto advance (but never a drag).
//! Each `CarouselEngine` instance owns an independent angle/mode state
//! machine and timeline.
//!
//! The dataflow is one-directional:
//! ```text
//! FrameClock → RotationController → CircularLayout → CardRenderer
//!                    ↑          ↑
//!          DragInputAdapter   HoverPauseCoordinator
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Content model (Rgba, Gradient, BilingualText, CardContent)
//! - [`config`] - Per-instance configuration and construction-time validation
//! - [`layout`] - Pure circular placement: (index, angle, config) → transform
//! - [`state`] - Clock, rotation state machine, drag, hover, pointer events
//! - [`renderer`] - Stateless bilingual card presentation
//! - [`pipeline`] - The `CarouselEngine` composition root

pub mod config;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{
    CarouselConfig, ConfigError, DEFAULT_DRAG_SENSITIVITY, DEFAULT_SPEED_DEG_PER_MS,
    FAST_SPEED_DEG_PER_MS, SpinDirection,
};

pub use layout::{Placement, placement, ring_placements, slot_offset_deg, slot_step_deg};

pub use state::{
    DragInputAdapter, DragSession, FrameClock, HitRegion, HoverPauseCoordinator, PointerAction,
    PointerEvent, Rect, RotationController, RotationMode, advance, convert_mouse_event, hit_test,
    wrap_deg,
};

pub use renderer::{
    BadgeVisual, CardBackground, CardVisual, FALLBACK_ICON, StarRow, render_card, string_width,
    truncate_text,
};

pub use pipeline::{CardFrame, CarouselEngine, EngineOptions};
