use std::sync::Arc;

use crate::error::{OverlayError, OverlayResult};
use crate::fonts::FontBook;
use crate::options::Options;
use crate::painter::Painter;
use crate::primitive::FontId;
use crate::queue::DrawQueue;
use crate::target::DrawTarget;
use crate::world::WorldSnapshot;

/// Host-reported simulation state.
///
/// [`renderable`](Self::renderable) is true while overlay content is
/// meaningful to draw (in-game with a valid local viewpoint). Both the
/// populate phase and the present path consult it independently; in a
/// non-gameplay menu nothing is drawn even while stale primitives remain
/// queued.
pub trait HostState {
    fn renderable(&self) -> bool;
}

/// Everything a scene populator may touch during the populate phase.
pub struct PopulateContext<'a> {
    pub painter: Painter<'a>,
    pub world: &'a WorldSnapshot,
    pub options: &'a Options,
}

/// A feature collaborator invoked once per simulation tick to append
/// primitives (or feed its own sink) for every entity it deems eligible.
///
/// Each populator filters by its own option flags; the orchestrator invokes
/// all of them unconditionally while the host is renderable.
pub trait ScenePopulator {
    fn populate(&mut self, ctx: &mut PopulateContext<'_>);
}

/// A font to register at initialization.
#[derive(Debug, Clone)]
pub struct FontSpec {
    pub name: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(name: &str, size: f32) -> Self {
        Self {
            name: name.to_owned(),
            size,
        }
    }
}

/// Per-frame entry points tying the queue, fonts, and populators together.
///
/// Two independently-timed call paths:
/// - [`begin_frame`](Self::begin_frame) on the simulation tick:
///   Reset (clear producer), Populate (iff renderable), Commit (swap).
/// - [`present`](Self::present) on the renderer's frame-present callback:
///   drains the consumer sequence into the active target, gated by the same
///   host signal. May run zero or more times per tick, on any thread.
pub struct Overlay {
    queue: Arc<DrawQueue>,
    fonts: FontBook,
}

impl Overlay {
    /// Set up the overlay and register its fonts.
    ///
    /// The first font becomes the default for text runs. Fonts are marked
    /// ready immediately; the host's rendering bridge builds the atlases as
    /// part of its own context setup.
    pub fn initialize(font_specs: &[FontSpec]) -> OverlayResult<Self> {
        if font_specs.is_empty() {
            return Err(OverlayError::InitializationFailed(
                "at least one font is required".to_owned(),
            ));
        }

        let mut fonts = FontBook::new();
        for spec in font_specs {
            if spec.size <= 0.0 {
                return Err(OverlayError::InvalidFont {
                    name: spec.name.clone(),
                    size: spec.size,
                });
            }
            let id = fonts.register(&spec.name, spec.size);
            fonts.mark_ready(id);
        }

        log::info!("overlay initialized with {} font(s)", font_specs.len());
        Ok(Self {
            queue: Arc::new(DrawQueue::new()),
            fonts,
        })
    }

    /// The shared draw queue, for handing to the present-side bridge.
    pub fn queue(&self) -> Arc<DrawQueue> {
        Arc::clone(&self.queue)
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontBook {
        &mut self.fonts
    }

    /// The default font registered at initialization.
    pub fn default_font(&self) -> Option<FontId> {
        self.fonts.default_font()
    }

    /// Run one simulation-side frame: Reset, Populate, Commit.
    ///
    /// The producer sequence is cleared before any populator runs; the swap
    /// at the end is unconditional, so after a non-renderable tick the next
    /// present sees an empty frame rather than stale primitives.
    pub fn begin_frame(
        &self,
        host: &dyn HostState,
        world: &WorldSnapshot,
        options: &Options,
        populators: &mut [&mut dyn ScenePopulator],
    ) {
        self.queue.clear_producer();

        if host.renderable() {
            let mut ctx = PopulateContext {
                painter: Painter::new(&self.queue, &self.fonts),
                world,
                options,
            };
            for populator in populators.iter_mut() {
                populator.populate(&mut ctx);
            }
        }

        self.queue.swap();
    }

    /// Render the committed frame into `target`.
    ///
    /// No-op while the host is not renderable; the consumer sequence is left
    /// untouched either way, so a skipped present loses nothing.
    pub fn present(&self, host: &dyn HostState, target: &mut dyn DrawTarget) {
        if !host.renderable() {
            return;
        }
        self.queue.render(target);
    }
}
