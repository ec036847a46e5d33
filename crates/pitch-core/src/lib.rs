//! pitch-core: geometry and display-list types for drawing a soccer pitch.
//!
//! [`layout`] is the entry point. It is a pure function of the surface size and a
//! [`PitchConfig`], and it returns a fresh [`DisplayList`] that a renderer consumes
//! in order. No state survives between calls, so it can be called from any thread.

pub mod dpi;

mod color;
mod display_list;
mod layout;
mod painter;
mod pitch;
mod scene;

pub use display_list::*;
pub use layout::{
    End, MARKING_PRIMITIVES, goal_box, grass_band_count, grass_row_height, layout,
    primitive_count,
};
pub use painter::*;
pub use pitch::*;
pub use scene::*;
