use glam::Vec2;

use crate::color::Rgba;
use crate::fonts::FontBook;
use crate::primitive::{
    CircleFlags, CornerMask, DrawPrimitive, FontId, PolygonFlags, RectFlags, TextFlags,
    TextureId, TriangleFlags,
};
use crate::queue::DrawQueue;

/// Corner rounding used by [`BoxStyle::Rounded`].
const ROUNDED_BOX_RADIUS: f32 = 8.0;

/// Visual style of a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    /// Plain rectangle outline.
    #[default]
    Flat,
    /// Four short accent segments per corner instead of a full rectangle.
    CornerAccent,
    /// Rectangle outline with rounded corners.
    Rounded,
}

/// Compositing helpers over the draw queue.
///
/// Lowers style intents into one or more [`DrawQueue::append`] calls and
/// relies on append order for layering: whatever a helper appends last paints
/// on top. Producer side only.
pub struct Painter<'a> {
    queue: &'a DrawQueue,
    fonts: &'a FontBook,
}

impl<'a> Painter<'a> {
    pub fn new(queue: &'a DrawQueue, fonts: &'a FontBook) -> Self {
        Self { queue, fonts }
    }

    pub fn fonts(&self) -> &FontBook {
        self.fonts
    }

    pub fn line(&self, start: Vec2, end: Vec2, color: Rgba, thickness: f32) {
        self.queue.append(DrawPrimitive::Line {
            start,
            end,
            color,
            thickness,
        });
    }

    /// Append a rectangle with explicit style flags.
    #[allow(clippy::too_many_arguments)]
    pub fn rect(
        &self,
        min: Vec2,
        max: Vec2,
        fill: Rgba,
        flags: RectFlags,
        outline: Rgba,
        rounding: f32,
        corners: CornerMask,
        thickness: f32,
    ) {
        self.queue.append(DrawPrimitive::Rect {
            min,
            max,
            fill,
            flags,
            outline,
            rounding,
            corners,
            thickness,
        });
    }

    /// Plain rectangle outline.
    pub fn box_outline(&self, min: Vec2, max: Vec2, color: Rgba, thickness: f32) {
        self.rect(
            min,
            max,
            color,
            RectFlags::empty(),
            Rgba::TRANSPARENT,
            0.0,
            CornerMask::all(),
            thickness,
        );
    }

    /// Filled rectangle.
    pub fn box_filled(&self, min: Vec2, max: Vec2, color: Rgba, rounding: f32) {
        self.rect(
            min,
            max,
            color,
            RectFlags::FILLED,
            Rgba::TRANSPARENT,
            rounding,
            CornerMask::all(),
            1.0,
        );
    }

    /// Outline box in the given style.
    pub fn box_by_style(&self, style: BoxStyle, min: Vec2, max: Vec2, color: Rgba, thickness: f32) {
        match style {
            BoxStyle::Flat => self.box_outline(min, max, color, thickness),
            BoxStyle::CornerAccent => self.corner_accent_box(min, max, color, thickness),
            BoxStyle::Rounded => self.rect(
                min,
                max,
                color,
                RectFlags::empty(),
                Rgba::TRANSPARENT,
                ROUNDED_BOX_RADIUS,
                CornerMask::all(),
                thickness,
            ),
        }
    }

    /// Filled box in the given style; corner-accent fills like flat.
    pub fn box_filled_by_style(&self, style: BoxStyle, min: Vec2, max: Vec2, color: Rgba) {
        match style {
            BoxStyle::Flat | BoxStyle::CornerAccent => self.box_filled(min, max, color, 0.0),
            BoxStyle::Rounded => self.box_filled(min, max, color, ROUNDED_BOX_RADIUS),
        }
    }

    /// Corner-accent target box: two short segments per corner, eight in
    /// total, each a quarter of the box's extent on its axis.
    fn corner_accent_box(&self, min: Vec2, max: Vec2, color: Rgba, thickness: f32) {
        let w = max.x - min.x;
        let h = max.y - min.y;
        let iw = w / 4.0;
        let ih = h / 4.0;
        let (x1, y1) = (min.x, min.y);

        // Top corners.
        self.line(Vec2::new(x1, y1), Vec2::new(x1 + iw, y1), color, thickness);
        self.line(
            Vec2::new(x1 + w - iw, y1),
            Vec2::new(x1 + w, y1),
            color,
            thickness,
        );
        self.line(Vec2::new(x1, y1), Vec2::new(x1, y1 + ih), color, thickness);
        self.line(
            Vec2::new(x1 + w - 1.0, y1),
            Vec2::new(x1 + w - 1.0, y1 + ih),
            color,
            thickness,
        );
        // Bottom corners.
        self.line(
            Vec2::new(x1, y1 + h),
            Vec2::new(x1 + iw, y1 + h),
            color,
            thickness,
        );
        self.line(
            Vec2::new(x1 + w - iw, y1 + h),
            Vec2::new(x1 + w, y1 + h),
            color,
            thickness,
        );
        self.line(
            Vec2::new(x1, y1 + h - ih),
            Vec2::new(x1, y1 + h),
            color,
            thickness,
        );
        self.line(
            Vec2::new(x1 + w - 1.0, y1 + h - ih),
            Vec2::new(x1 + w - 1.0, y1 + h),
            color,
            thickness,
        );
    }

    /// Filled rectangle with one color per corner.
    pub fn multicolor_rect(
        &self,
        min: Vec2,
        max: Vec2,
        top_left: Rgba,
        top_right: Rgba,
        bottom_right: Rgba,
        bottom_left: Rgba,
    ) {
        self.queue.append(DrawPrimitive::RectMultiColor {
            min,
            max,
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn circle(
        &self,
        center: Vec2,
        radius: f32,
        fill: Rgba,
        segments: u32,
        flags: CircleFlags,
        outline: Rgba,
        thickness: f32,
    ) {
        self.queue.append(DrawPrimitive::Circle {
            center,
            radius,
            fill,
            segments,
            flags,
            outline,
            thickness,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn triangle(
        &self,
        a: Vec2,
        b: Vec2,
        c: Vec2,
        fill: Rgba,
        flags: TriangleFlags,
        outline: Rgba,
        thickness: f32,
    ) {
        self.queue.append(DrawPrimitive::Triangle {
            a,
            b,
            c,
            fill,
            flags,
            outline,
            thickness,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn polygon(
        &self,
        points: Vec<Vec2>,
        fill: Rgba,
        flags: PolygonFlags,
        outline: Rgba,
        closed: bool,
        thickness: f32,
    ) {
        self.queue.append(DrawPrimitive::Polygon {
            points,
            fill,
            flags,
            outline,
            closed,
            thickness,
        });
    }

    pub fn image(
        &self,
        texture: TextureId,
        min: Vec2,
        max: Vec2,
        tint: Rgba,
        rounding: f32,
        corners: CornerMask,
    ) {
        self.queue.append(DrawPrimitive::Image {
            texture,
            min,
            max,
            tint,
            rounding,
            corners,
        });
    }

    /// Append a text run.
    ///
    /// `font: None` selects the default font; `size <= 0` uses the font's
    /// registered size. A run whose font atlas is not ready is dropped
    /// without touching the rest of the frame.
    ///
    /// [`TextFlags::OUTLINE`] is consumed here: the run is restamped at
    /// one-pixel offsets in all eight directions in the outline color, then
    /// the primary run is appended on top. The stored primitives carry the
    /// remaining flags only.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &self,
        font: Option<FontId>,
        size: f32,
        position: Vec2,
        text: &str,
        color: Rgba,
        flags: TextFlags,
        outline: Rgba,
    ) {
        let Some(font) = font.or_else(|| self.fonts.default_font()) else {
            log::debug!("text run dropped: no font registered");
            return;
        };
        if !self.fonts.is_ready(font) {
            log::debug!("text run dropped: font {:?} atlas not ready", font);
            return;
        }
        let size = if size > 0.0 {
            size
        } else {
            self.fonts.size(font).unwrap_or(0.0)
        };

        let kept = flags.difference(TextFlags::OUTLINE);
        if flags.contains(TextFlags::OUTLINE) {
            const OFFSETS: [Vec2; 8] = [
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(-1.0, 0.0),
                Vec2::new(0.0, -1.0),
                Vec2::new(0.0, 1.0),
            ];
            for offset in OFFSETS {
                self.queue.append(DrawPrimitive::Text {
                    font: Some(font),
                    size,
                    position: position + offset,
                    text: text.to_owned(),
                    color: outline,
                    flags: TextFlags::empty(),
                    outline: Rgba::TRANSPARENT,
                });
            }
        }
        self.queue.append(DrawPrimitive::Text {
            font: Some(font),
            size,
            position,
            text: text.to_owned(),
            color,
            flags: kept,
            outline,
        });
    }

    /// Outlined text in the default ESP label style: black stroke under the
    /// given color.
    pub fn label(&self, position: Vec2, text: &str, size: f32, color: Rgba) {
        self.text(
            None,
            size,
            position,
            text,
            color,
            TextFlags::OUTLINE,
            Rgba::BLACK,
        );
    }
}
