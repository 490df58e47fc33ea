use glam::Vec2;

use crate::color::Rgba;
use crate::primitive::{CornerMask, FontId, TextureId};

/// The active graphics context the consumer side draws into.
///
/// Implemented by the host's rendering bridge (an immediate-mode draw list,
/// a sprite batcher, or similar). All coordinates are screen space, all
/// colors packed [`Rgba`]. The queue's render dispatch lowers primitive
/// flags onto these calls; implementations do not interpret style flags.
pub trait DrawTarget {
    fn line(&mut self, start: Vec2, end: Vec2, color: Rgba, thickness: f32);

    fn rect(
        &mut self,
        min: Vec2,
        max: Vec2,
        color: Rgba,
        rounding: f32,
        corners: CornerMask,
        thickness: f32,
    );

    fn rect_filled(&mut self, min: Vec2, max: Vec2, color: Rgba, rounding: f32, corners: CornerMask);

    fn rect_filled_multicolor(
        &mut self,
        min: Vec2,
        max: Vec2,
        top_left: Rgba,
        top_right: Rgba,
        bottom_right: Rgba,
        bottom_left: Rgba,
    );

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba, segments: u32, thickness: f32);

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Rgba, segments: u32);

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba, thickness: f32);

    fn triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba);

    fn polyline(&mut self, points: &[Vec2], color: Rgba, closed: bool, thickness: f32);

    fn convex_polygon_filled(&mut self, points: &[Vec2], color: Rgba);

    fn text(&mut self, font: Option<FontId>, size: f32, position: Vec2, text: &str, color: Rgba);

    fn image(
        &mut self,
        texture: TextureId,
        min: Vec2,
        max: Vec2,
        tint: Rgba,
        rounding: f32,
        corners: CornerMask,
    );
}

/// One recorded [`DrawTarget`] call, with owned payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        start: Vec2,
        end: Vec2,
        color: Rgba,
        thickness: f32,
    },
    Rect {
        min: Vec2,
        max: Vec2,
        color: Rgba,
        rounding: f32,
        corners: CornerMask,
        thickness: f32,
    },
    RectFilled {
        min: Vec2,
        max: Vec2,
        color: Rgba,
        rounding: f32,
        corners: CornerMask,
    },
    RectFilledMultiColor {
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
        color: Rgba,
        segments: u32,
        thickness: f32,
    },
    CircleFilled {
        center: Vec2,
        radius: f32,
        color: Rgba,
        segments: u32,
    },
    Triangle {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Rgba,
        thickness: f32,
    },
    TriangleFilled {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Rgba,
    },
    Polyline {
        points: Vec<Vec2>,
        color: Rgba,
        closed: bool,
        thickness: f32,
    },
    ConvexPolygonFilled {
        points: Vec<Vec2>,
        color: Rgba,
    },
    Text {
        font: Option<FontId>,
        size: f32,
        position: Vec2,
        text: String,
        color: Rgba,
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

/// A [`DrawTarget`] that records every call in issue order.
///
/// Backs headless hosts and tests the same way the engine's dummy backend
/// does for GPU code: everything runs, nothing touches a device.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    calls: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, in issue order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Drop the recording and return the calls.
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl DrawTarget for RecordingTarget {
    fn line(&mut self, start: Vec2, end: Vec2, color: Rgba, thickness: f32) {
        self.calls.push(DrawCall::Line {
            start,
            end,
            color,
            thickness,
        });
    }

    fn rect(
        &mut self,
        min: Vec2,
        max: Vec2,
        color: Rgba,
        rounding: f32,
        corners: CornerMask,
        thickness: f32,
    ) {
        self.calls.push(DrawCall::Rect {
            min,
            max,
            color,
            rounding,
            corners,
            thickness,
        });
    }

    fn rect_filled(
        &mut self,
        min: Vec2,
        max: Vec2,
        color: Rgba,
        rounding: f32,
        corners: CornerMask,
    ) {
        self.calls.push(DrawCall::RectFilled {
            min,
            max,
            color,
            rounding,
            corners,
        });
    }

    fn rect_filled_multicolor(
        &mut self,
        min: Vec2,
        max: Vec2,
        top_left: Rgba,
        top_right: Rgba,
        bottom_right: Rgba,
        bottom_left: Rgba,
    ) {
        self.calls.push(DrawCall::RectFilledMultiColor {
            min,
            max,
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba, segments: u32, thickness: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            segments,
            thickness,
        });
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Rgba, segments: u32) {
        self.calls.push(DrawCall::CircleFilled {
            center,
            radius,
            color,
            segments,
        });
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba, thickness: f32) {
        self.calls.push(DrawCall::Triangle {
            a,
            b,
            c,
            color,
            thickness,
        });
    }

    fn triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.calls.push(DrawCall::TriangleFilled { a, b, c, color });
    }

    fn polyline(&mut self, points: &[Vec2], color: Rgba, closed: bool, thickness: f32) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            color,
            closed,
            thickness,
        });
    }

    fn convex_polygon_filled(&mut self, points: &[Vec2], color: Rgba) {
        self.calls.push(DrawCall::ConvexPolygonFilled {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, font: Option<FontId>, size: f32, position: Vec2, text: &str, color: Rgba) {
        self.calls.push(DrawCall::Text {
            font,
            size,
            position,
            text: text.to_owned(),
            color,
        });
    }

    fn image(
        &mut self,
        texture: TextureId,
        min: Vec2,
        max: Vec2,
        tint: Rgba,
        rounding: f32,
        corners: CornerMask,
    ) {
        self.calls.push(DrawCall::Image {
            texture,
            min,
            max,
            tint,
            rounding,
            corners,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_preserves_order() {
        let mut target = RecordingTarget::new();
        target.line(Vec2::ZERO, Vec2::ONE, Rgba::WHITE, 1.0);
        target.circle_filled(Vec2::ZERO, 4.0, Rgba::BLACK, 12);

        assert_eq!(target.calls().len(), 2);
        assert!(matches!(target.calls()[0], DrawCall::Line { .. }));
        assert!(matches!(target.calls()[1], DrawCall::CircleFilled { .. }));
    }
}
