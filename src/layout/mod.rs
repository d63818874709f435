//! Layout Module - Circular ring placement
//!
//! Pure geometry: maps (index, angle, config) to a 3D placement transform.
//! No state, no clocks, no signals - identical inputs always produce
//! identical outputs.

mod ring;

pub use ring::*;
