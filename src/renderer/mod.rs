//! Renderer Module - stateless card presentation
//!
//! Resolves bilingual card records into paintable visuals. No signals, no
//! state: same inputs, same visual.

mod card;
mod text;

pub use card::*;
pub use text::*;
