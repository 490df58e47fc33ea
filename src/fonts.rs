use crate::primitive::FontId;

struct FontEntry {
    name: String,
    size: f32,
    ready: bool,
}

/// Registry of font handles known to the overlay.
///
/// The actual glyph atlases live in the host's rendering bridge; this book
/// only tracks which handles exist and whether their atlas has been built.
/// Text appends consult [`is_ready`](Self::is_ready) so a run against an
/// unbuilt atlas is dropped instead of reaching the renderer.
#[derive(Default)]
pub struct FontBook {
    fonts: Vec<FontEntry>,
    default_font: Option<FontId>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font. The first registered font becomes the default.
    ///
    /// The handle starts out not ready; call [`mark_ready`](Self::mark_ready)
    /// once the host has built the atlas.
    pub fn register(&mut self, name: &str, size: f32) -> FontId {
        let id = FontId(self.fonts.len() as u32);
        self.fonts.push(FontEntry {
            name: name.to_owned(),
            size,
            ready: false,
        });
        if self.default_font.is_none() {
            self.default_font = Some(id);
        }
        id
    }

    /// Mark a font's atlas as built.
    pub fn mark_ready(&mut self, id: FontId) {
        if let Some(entry) = self.fonts.get_mut(id.0 as usize) {
            entry.ready = true;
        } else {
            log::warn!("mark_ready for unregistered font {:?}", id);
        }
    }

    /// Whether the font's atlas is built and text may reference it.
    pub fn is_ready(&self, id: FontId) -> bool {
        self.fonts
            .get(id.0 as usize)
            .map(|entry| entry.ready)
            .unwrap_or(false)
    }

    /// The default font, if any font has been registered.
    pub fn default_font(&self) -> Option<FontId> {
        self.default_font
    }

    pub fn set_default(&mut self, id: FontId) {
        if (id.0 as usize) < self.fonts.len() {
            self.default_font = Some(id);
        }
    }

    /// Registered size of a font.
    pub fn size(&self, id: FontId) -> Option<f32> {
        self.fonts.get(id.0 as usize).map(|entry| entry.size)
    }

    pub fn name(&self, id: FontId) -> Option<&str> {
        self.fonts.get(id.0 as usize).map(|entry| entry.name.as_str())
    }
}
