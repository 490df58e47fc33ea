//! Feature collaborators populating the overlay each tick.
//!
//! Each feature filters by its own option group and either appends draw
//! primitives through the frame's [`Painter`](crate::painter::Painter) (ESP)
//! or feeds an opaque host capability (glow sink, material override).

pub mod chams;
pub mod esp;
pub mod glow;

pub use chams::{Chams, MaterialOverride, MaterialStyle, ModelSlot};
pub use esp::Esp;
pub use glow::{GlowPopulator, GlowSink};
