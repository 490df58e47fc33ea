use parking_lot::{Mutex, RwLock};

use crate::primitive::{CircleFlags, DrawPrimitive, PolygonFlags, RectFlags, TextFlags, TriangleFlags};
use crate::target::DrawTarget;

use glam::Vec2;

/// Double-buffered draw-command queue shared between the simulation and
/// present timing domains.
///
/// The *producer sequence* collects primitives for the in-progress simulation
/// frame; the *consumer sequence* holds the previous frame, safe to render.
/// [`swap`](Self::swap) exchanges the two in O(1) under the consumer write
/// lock, so a render in progress always finishes over a consistent frame and
/// a pending swap waits for it. Insertion order defines paint order: later
/// primitives paint over earlier ones.
///
/// The swapped-out consumer data is deliberately left in the new producer
/// sequence until the next [`clear_producer`](Self::clear_producer); a late or
/// repeated present keeps re-rendering the same consumer frame, and nothing is
/// lost by a skipped render.
#[derive(Default)]
pub struct DrawQueue {
    producer: Mutex<Vec<DrawPrimitive>>,
    consumer: RwLock<Vec<DrawPrimitive>>,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive to the producer sequence.
    ///
    /// O(1) amortized, never fails. Producer side only; the renderer never
    /// observes the primitive before the next [`swap`](Self::swap).
    pub fn append(&self, primitive: DrawPrimitive) {
        self.producer.lock().push(primitive);
    }

    /// Number of primitives accumulated for the frame in progress.
    pub fn pending(&self) -> usize {
        self.producer.lock().len()
    }

    /// Empty the producer sequence.
    ///
    /// Called once at frame start, before any populator runs, so stale
    /// primitives from the swapped-out frame never leak into this frame.
    pub fn clear_producer(&self) {
        self.producer.lock().clear();
    }

    /// Exchange the producer and consumer sequences.
    ///
    /// Takes the consumer lock exclusively; blocks while a render holds it in
    /// shared mode. Pointer swap only, no element copies and no allocation
    /// inside the critical section.
    pub fn swap(&self) {
        let mut consumer = self.consumer.write();
        let mut producer = self.producer.lock();
        std::mem::swap(&mut *producer, &mut *consumer);
    }

    /// Drain the consumer sequence into `target`, in insertion order.
    ///
    /// Takes the consumer lock in shared mode: concurrent renders are safe
    /// and observe identical sequences; a pending [`swap`](Self::swap) waits.
    /// The sequence is not consumed; rendering twice without an intervening
    /// swap issues the same calls twice.
    pub fn render(&self, target: &mut dyn DrawTarget) {
        let consumer = self.consumer.read();
        if consumer.is_empty() {
            return;
        }
        for primitive in consumer.iter() {
            dispatch(primitive, target);
        }
    }
}

/// Lower one primitive onto the target, expanding its style flags.
fn dispatch(primitive: &DrawPrimitive, target: &mut dyn DrawTarget) {
    match primitive {
        DrawPrimitive::Line {
            start,
            end,
            color,
            thickness,
        } => target.line(*start, *end, *color, *thickness),
        DrawPrimitive::Rect {
            min,
            max,
            fill,
            flags,
            outline,
            rounding,
            corners,
            thickness,
        } => {
            if flags.contains(RectFlags::FILLED) {
                target.rect_filled(*min, *max, *fill, *rounding, *corners);
            } else {
                target.rect(*min, *max, *fill, *rounding, *corners, *thickness);
            }
            if flags.contains(RectFlags::BORDER) {
                target.rect(
                    *min + Vec2::ONE,
                    *max - Vec2::ONE,
                    *outline,
                    *rounding,
                    *corners,
                    1.0,
                );
            }
            if flags.contains(RectFlags::OUTLINE) {
                target.rect(
                    *min - Vec2::ONE,
                    *max + Vec2::ONE,
                    *outline,
                    *rounding,
                    *corners,
                    1.0,
                );
            }
        }
        DrawPrimitive::RectMultiColor {
            min,
            max,
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } => target.rect_filled_multicolor(
            *min,
            *max,
            *top_left,
            *top_right,
            *bottom_right,
            *bottom_left,
        ),
        DrawPrimitive::Circle {
            center,
            radius,
            fill,
            segments,
            flags,
            outline,
            thickness,
        } => {
            if flags.contains(CircleFlags::FILLED) {
                target.circle_filled(*center, *radius, *fill, *segments);
            } else {
                target.circle(*center, *radius, *fill, *segments, *thickness);
            }
            if flags.contains(CircleFlags::OUTLINE) {
                target.circle(*center, *radius + 1.0, *outline, *segments, *thickness + 1.0);
            }
        }
        DrawPrimitive::Triangle {
            a,
            b,
            c,
            fill,
            flags,
            outline,
            thickness,
        } => {
            if flags.contains(TriangleFlags::FILLED) {
                target.triangle_filled(*a, *b, *c, *fill);
            } else {
                target.triangle(*a, *b, *c, *fill, *thickness);
            }
            if flags.contains(TriangleFlags::OUTLINE) {
                target.triangle(*a, *b, *c, *outline, *thickness + 1.0);
            }
        }
        DrawPrimitive::Polygon {
            points,
            fill,
            flags,
            outline,
            closed,
            thickness,
        } => {
            if flags.contains(PolygonFlags::FILLED) {
                target.convex_polygon_filled(points, *fill);
            } else {
                target.polyline(points, *fill, *closed, *thickness);
            }
            if flags.contains(PolygonFlags::OUTLINE) {
                target.polyline(points, *outline, *closed, *thickness + 1.0);
            }
        }
        DrawPrimitive::Text {
            font,
            size,
            position,
            text,
            color,
            flags,
            outline,
        } => {
            if flags.contains(TextFlags::DROP_SHADOW) {
                target.text(*font, *size, *position + Vec2::new(1.0, -1.0), text, *outline);
            }
            target.text(*font, *size, *position, text, *color);
        }
        DrawPrimitive::Image {
            texture,
            min,
            max,
            tint,
            rounding,
            corners,
        } => target.image(*texture, *min, *max, *tint, *rounding, *corners),
    }
}
