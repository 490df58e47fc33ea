use bitflags::bitflags;
use glam::Vec2;

use crate::color::Rgba;

/// Handle to a registered font.
///
/// Resolved against the [`FontBook`](crate::fonts::FontBook); text primitives
/// referencing a font whose atlas is not ready are dropped at append time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub(crate) u32);

/// Handle to a texture owned by the host's graphics context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

bitflags! {
    /// Style flags for rectangle primitives.
    ///
    /// `FILLED` and a stroked body are mutually exclusive choices; `BORDER`
    /// (one pixel inset) and `OUTLINE` (one pixel outset) may combine with
    /// either and with each other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RectFlags: u32 {
        /// One-pixel outline outset around the rectangle, in the outline color.
        const OUTLINE = 1 << 0;
        /// One-pixel border inset inside the rectangle, in the outline color.
        const BORDER = 1 << 1;
        /// Fill the rectangle instead of stroking it.
        const FILLED = 1 << 2;
    }

    /// Style flags for circle primitives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CircleFlags: u32 {
        /// Extra outline circle at radius + 1, in the outline color.
        const OUTLINE = 1 << 0;
        /// Fill the circle instead of stroking it.
        const FILLED = 1 << 1;
    }

    /// Style flags for triangle primitives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TriangleFlags: u32 {
        /// Extra stroked triangle in the outline color.
        const OUTLINE = 1 << 0;
        /// Fill the triangle instead of stroking it.
        const FILLED = 1 << 1;
    }

    /// Style flags for polygon primitives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PolygonFlags: u32 {
        /// Extra polyline pass in the outline color.
        const OUTLINE = 1 << 0;
        /// Fill the polygon (must be convex) instead of stroking it.
        const FILLED = 1 << 1;
    }

    /// Style flags for text primitives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextFlags: u32 {
        /// Single offset stamp at (+1, -1) in the outline color, under the text.
        const DROP_SHADOW = 1 << 0;
        /// Stroke approximation by offset restamping.
        ///
        /// Consumed by [`Painter::text`](crate::painter::Painter::text) at
        /// append time; never stored on a queued primitive.
        const OUTLINE = 1 << 1;
    }

    /// Which corners of a rectangle or image participate in rounding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CornerMask: u32 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_LEFT = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;
    }
}

impl Default for CornerMask {
    fn default() -> Self {
        Self::all()
    }
}

/// One atomic drawable instruction with fully-resolved geometry and style.
///
/// Constructed complete by the producer side, immutable afterwards, and owned
/// by the [`DrawQueue`](crate::queue::DrawQueue) until the frame it belongs to
/// is discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Line {
        start: Vec2,
        end: Vec2,
        color: Rgba,
        thickness: f32,
    },
    Rect {
        min: Vec2,
        max: Vec2,
        fill: Rgba,
        flags: RectFlags,
        outline: Rgba,
        rounding: f32,
        corners: CornerMask,
        thickness: f32,
    },
    RectMultiColor {
        min: Vec2,
        max: Vec2,
        top_left: Rgba,
        top_right: Rgba,
        bottom_right: Rgba,
        bottom_left: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
        segments: u32,
        flags: CircleFlags,
        outline: Rgba,
        thickness: f32,
    },
    Triangle {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        fill: Rgba,
        flags: TriangleFlags,
        outline: Rgba,
        thickness: f32,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Rgba,
        flags: PolygonFlags,
        outline: Rgba,
        closed: bool,
        thickness: f32,
    },
    Text {
        /// `None` selects the default font.
        font: Option<FontId>,
        size: f32,
        position: Vec2,
        text: String,
        color: Rgba,
        flags: TextFlags,
        outline: Rgba,
    },
    Image {
        texture: TextureId,
        min: Vec2,
        max: Vec2,
        tint: Rgba,
        rounding: f32,
        corners: CornerMask,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_flags_combine() {
        let flags = RectFlags::FILLED | RectFlags::OUTLINE | RectFlags::BORDER;
        assert!(flags.contains(RectFlags::FILLED));
        assert!(flags.contains(RectFlags::OUTLINE | RectFlags::BORDER));
    }

    #[test]
    fn test_corner_mask_default_is_all() {
        assert_eq!(CornerMask::default(), CornerMask::all());
        assert_eq!(CornerMask::all().bits(), 0xf);
    }

    #[test]
    fn test_text_flags_disjoint_bits() {
        assert!((TextFlags::DROP_SHADOW & TextFlags::OUTLINE).is_empty());
    }
}
