//! Deferred draw-command pipeline for in-game visual overlays.
//!
//! Decouples "decide what to draw" (once per simulation tick) from "issue
//! draw calls" (the renderer's present callback, on its own thread and
//! cadence) through a double-buffered, lock-mediated queue of drawable
//! primitives. Thread-safe with one-frame latency.
//!
//! # Architecture
//!
//! - [`DrawQueue`] — Double-buffered primitive queue (producer/consumer swap)
//! - [`Overlay`] — Per-frame orchestrator: Reset → Populate → Commit on the
//!   tick, Render on the present callback
//! - [`Painter`] — Compositing helpers lowering style intents into appends
//! - [`DrawTarget`] — Trait the host's rendering bridge implements
//! - [`features`] — ESP, glow, and chams populators over a [`WorldSnapshot`]
//!
//! # Usage
//!
//! ```ignore
//! // Setup (once)
//! let overlay = Overlay::initialize(&[FontSpec::new("droid", 18.0)])?;
//! let mut esp = features::Esp::default();
//!
//! // Each simulation tick:
//! let world = bindings.snapshot_world();
//! overlay.begin_frame(&host, &world, &options, &mut [&mut esp]);
//!
//! // On the renderer's present callback (any thread, any cadence):
//! overlay.present(&host, &mut draw_list_bridge);
//! ```

pub mod color;
pub mod error;
pub mod features;
pub mod fonts;
pub mod frame;
pub mod options;
pub mod painter;
pub mod primitive;
pub mod queue;
pub mod target;
pub mod world;

pub use color::Rgba;
pub use error::{OverlayError, OverlayResult};
pub use fonts::FontBook;
pub use frame::{FontSpec, HostState, Overlay, PopulateContext, ScenePopulator};
pub use options::{ChamsOptions, EspOptions, GlowOptions, Options};
pub use painter::{BoxStyle, Painter};
pub use primitive::{
    CircleFlags, CornerMask, DrawPrimitive, FontId, PolygonFlags, RectFlags, TextFlags, TextureId,
    TriangleFlags,
};
pub use queue::DrawQueue;
pub use target::{DrawCall, DrawTarget, RecordingTarget};
pub use world::{Entity, EntityId, EntityKind, PlayerInfo, Relation, WorldSnapshot};
