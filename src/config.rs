//! Carousel configuration - per-instance geometry and motion constants.
//!
//! One `CarouselConfig` is fixed at engine construction and never changes for
//! the lifetime of the instance. Two rings on the same screen are just two
//! configs; all behavioral differences between them collapse to these fields.
//!
//! Invalid values are a construction-time [`ConfigError`], never silently
//! clamped - the engine refuses to start rather than render a degenerate ring.

use thiserror::Error;

// =============================================================================
// DEFAULT TUNING CONSTANTS
// =============================================================================

/// Default drag sensitivity in degrees per pixel of pointer travel.
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.3;

/// Default auto-rotation speed in degrees per millisecond.
pub const DEFAULT_SPEED_DEG_PER_MS: f64 = 0.015;

/// Slightly faster stock speed, used by the second ring preset.
pub const FAST_SPEED_DEG_PER_MS: f64 = 0.018;

// =============================================================================
// SPIN DIRECTION
// =============================================================================

/// Auto-rotation direction around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinDirection {
    /// Angle increases over time (+1).
    #[default]
    Forward,
    /// Angle decreases over time (-1).
    Reverse,
}

impl SpinDirection {
    /// Parse a numeric sign. Exactly `+1` or `-1`; anything else is an error.
    pub fn from_sign(sign: i8) -> Result<Self, ConfigError> {
        match sign {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Reverse),
            other => Err(ConfigError::Direction(other)),
        }
    }

    /// The signed multiplier applied to the angular speed.
    #[inline]
    pub const fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

// =============================================================================
// CONFIG ERROR
// =============================================================================

/// Construction-time configuration error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("item_count must be >= 1, got {0}")]
    ItemCount(usize),

    #[error("radius_px must be > 0 and finite, got {0}")]
    Radius(f64),

    #[error("direction must be exactly +1 or -1, got {0}")]
    Direction(i8),

    #[error("item dimensions must be > 0 and finite, got {width}x{height}")]
    ItemSize { width: f64, height: f64 },

    #[error("base_speed_deg_per_ms must be finite and >= 0, got {0}")]
    Speed(f64),

    #[error("drag_sensitivity must be finite and > 0, got {0}")]
    DragSensitivity(f64),

    #[error("config item_count is {expected} but {actual} cards were supplied")]
    CardCountMismatch { expected: usize, actual: usize },

    #[error("duplicate card id {0:?}")]
    DuplicateCardId(String),
}

// =============================================================================
// CAROUSEL CONFIG
// =============================================================================

/// Immutable per-instance configuration.
///
/// `base_speed_deg_per_ms` is the unsigned rate; the sign comes from
/// `direction`. A speed of 0 is a legal static ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Number of angular slots. Must match the card list length.
    pub item_count: usize,
    /// Outward displacement of each face from the ring axis, in pixels.
    pub radius_px: f64,
    /// Constant viewing tilt around the horizontal axis, in degrees.
    pub tilt_deg: f64,
    /// Auto-rotation speed in degrees per millisecond (unsigned).
    pub base_speed_deg_per_ms: f64,
    /// Auto-rotation direction.
    pub direction: SpinDirection,
    /// Card face width in pixels.
    pub item_width_px: f64,
    /// Card face height in pixels.
    pub item_height_px: f64,
    /// Drag sensitivity in degrees per pixel.
    pub drag_sensitivity: f64,
}

impl CarouselConfig {
    /// Create a config with the stock tuning constants.
    pub fn new(item_count: usize, radius_px: f64) -> Self {
        Self {
            item_count,
            radius_px,
            tilt_deg: -8.0,
            base_speed_deg_per_ms: DEFAULT_SPEED_DEG_PER_MS,
            direction: SpinDirection::Forward,
            item_width_px: 180.0,
            item_height_px: 240.0,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }

    /// Override the auto-rotation speed.
    pub fn with_speed(mut self, deg_per_ms: f64) -> Self {
        self.base_speed_deg_per_ms = deg_per_ms;
        self
    }

    /// Override the rotation direction.
    pub fn with_direction(mut self, direction: SpinDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Override the viewing tilt.
    pub fn with_tilt(mut self, tilt_deg: f64) -> Self {
        self.tilt_deg = tilt_deg;
        self
    }

    /// Override the card face dimensions.
    pub fn with_item_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.item_width_px = width_px;
        self.item_height_px = height_px;
        self
    }

    /// Override the drag sensitivity.
    pub fn with_drag_sensitivity(mut self, deg_per_px: f64) -> Self {
        self.drag_sensitivity = deg_per_px;
        self
    }

    /// The signed angular speed in degrees per millisecond.
    #[inline]
    pub fn signed_speed(&self) -> f64 {
        self.base_speed_deg_per_ms * self.direction.signum()
    }

    /// Validate all fields. Called by `CarouselEngine::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_count < 1 {
            return Err(ConfigError::ItemCount(self.item_count));
        }
        if !self.radius_px.is_finite() || self.radius_px <= 0.0 {
            return Err(ConfigError::Radius(self.radius_px));
        }
        if !self.item_width_px.is_finite()
            || !self.item_height_px.is_finite()
            || self.item_width_px <= 0.0
            || self.item_height_px <= 0.0
        {
            return Err(ConfigError::ItemSize {
                width: self.item_width_px,
                height: self.item_height_px,
            });
        }
        if !self.base_speed_deg_per_ms.is_finite() || self.base_speed_deg_per_ms < 0.0 {
            return Err(ConfigError::Speed(self.base_speed_deg_per_ms));
        }
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(ConfigError::DragSensitivity(self.drag_sensitivity));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
