//! State Module - the runtime state systems behind the ring
//!
//! - **Clock** - cancellable frame tick source
//! - **Rotation** - the Auto/Dragging angle state machine
//! - **Drag** - pointer displacement to angle targets
//! - **Hover** - hover set and the Auto-mode pause flag
//! - **Pointer** - pointer event model, hit regions, crossterm bridge

mod clock;
mod drag;
mod hover;
mod pointer;
mod rotation;

pub use clock::*;
pub use drag::*;
pub use hover::*;
pub use pointer::*;
pub use rotation::*;
