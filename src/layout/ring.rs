//! Circular Layout Engine - even angular placement around a vertical cylinder.
//!
//! Each of the N card faces owns a fixed angular slot `(360/N) * index`. The
//! ring's current rotation angle is added to that offset, the face is pushed
//! outward along its rotated axis by the configured radius, and the whole
//! cylinder is viewed under a constant tilt.
//!
//! Everything here is a pure function of its inputs. The rotation angle is
//! owned elsewhere (see `state::rotation`); this module never remembers
//! anything between calls.

use crate::config::CarouselConfig;
use crate::state::wrap_deg;

// =============================================================================
// PLACEMENT
// =============================================================================

/// The 3D placement transform of one card face.
///
/// `rotation_deg`, `radius_px` and `tilt_deg` are the raw transform inputs in
/// CSS order (`rotateY(rotation) translateZ(radius) rotateX(tilt)`). The
/// derived `x_px` / `z_px` coordinates and `depth` are precomputed for hosts
/// that paint faces themselves and need paint order or distance dimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Slot index this placement belongs to.
    pub index: usize,
    /// Fixed angular offset of the slot, in degrees.
    pub slot_offset_deg: f64,
    /// Effective rotation (slot offset + ring angle), wrapped to [0, 360).
    pub rotation_deg: f64,
    /// Outward displacement along the rotated axis, in pixels.
    pub radius_px: f64,
    /// Constant viewing tilt, in degrees.
    pub tilt_deg: f64,
    /// Horizontal position relative to the ring center, in pixels.
    pub x_px: f64,
    /// Depth position relative to the ring center, in pixels (positive = near).
    pub z_px: f64,
    /// Normalized nearness in [0, 1]: 1 at the front of the ring, 0 at the back.
    pub depth: f64,
}

// =============================================================================
// LAYOUT FUNCTIONS
// =============================================================================

/// Angular distance between adjacent slots, in degrees.
#[inline]
pub fn slot_step_deg(item_count: usize) -> f64 {
    360.0 / item_count as f64
}

/// Fixed angular offset of one slot, in degrees.
#[inline]
pub fn slot_offset_deg(index: usize, item_count: usize) -> f64 {
    slot_step_deg(item_count) * index as f64
}

/// Compute the placement of one card face.
///
/// Pure: depends only on `(index, angle_deg, config)`. The angle may be any
/// finite value; it is wrapped here, so there is no seam as the ring sweeps
/// across 0/360.
pub fn placement(index: usize, angle_deg: f64, config: &CarouselConfig) -> Placement {
    let slot_offset = slot_offset_deg(index, config.item_count);
    let rotation = wrap_deg(slot_offset + angle_deg);
    let radians = rotation.to_radians();

    let x_px = radians.sin() * config.radius_px;
    let z_px = radians.cos() * config.radius_px;
    // cos is +1 at the front of the ring, -1 at the back
    let depth = (radians.cos() + 1.0) / 2.0;

    Placement {
        index,
        slot_offset_deg: slot_offset,
        rotation_deg: rotation,
        radius_px: config.radius_px,
        tilt_deg: config.tilt_deg,
        x_px,
        z_px,
        depth,
    }
}

/// Compute placements for every slot of the ring at a given angle.
pub fn ring_placements(angle_deg: f64, config: &CarouselConfig) -> Vec<Placement> {
    (0..config.item_count)
        .map(|index| placement(index, angle_deg, config))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
