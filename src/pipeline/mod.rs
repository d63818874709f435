//! Pipeline Module - per-instance composition
//!
//! The composition root wiring clock, rotation, drag, hover, layout and
//! renderer into one carousel instance.

mod engine;

pub use engine::*;
