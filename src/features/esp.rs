use glam::Vec2;

use crate::color::Rgba;
use crate::frame::{PopulateContext, ScenePopulator};
use crate::options::EspOptions;
use crate::painter::Painter;
use crate::world::{Entity, EntityKind, Relation, WorldSnapshot};

/// Half-length of one crosshair arm in pixels.
const CROSSHAIR_ARM: f32 = 6.0;
/// Width of the vertical health bar.
const BAR_WIDTH: f32 = 4.0;
/// Gap between a player box and its bars/labels.
const BAR_GAP: f32 = 2.0;

/// Enemy-outline drawing: boxes, labels, bars, snaplines, and world-item
/// markers, all appended through the frame's painter.
#[derive(Debug, Default)]
pub struct Esp;

impl ScenePopulator for Esp {
    fn populate(&mut self, ctx: &mut PopulateContext<'_>) {
        let options = &ctx.options.esp;
        if !options.enabled {
            return;
        }

        if options.crosshair {
            draw_crosshair(&ctx.painter, ctx.world, options);
        }

        for entity in &ctx.world.entities {
            match entity.kind {
                EntityKind::Player => draw_player(&ctx.painter, ctx.world, options, entity),
                EntityKind::DroppedWeapon if options.dropped_weapons => {
                    draw_marker(&ctx.painter, entity, options.weapon_color)
                }
                EntityKind::DefuseKit if options.defuse_kit => {
                    draw_marker(&ctx.painter, entity, options.defuse_color)
                }
                EntityKind::PlantedC4 if options.planted_c4 => {
                    draw_marker(&ctx.painter, entity, options.c4_color)
                }
                EntityKind::Item if options.items => {
                    draw_marker(&ctx.painter, entity, options.item_color)
                }
                _ => {}
            }
        }
    }
}

fn draw_crosshair(painter: &Painter<'_>, world: &WorldSnapshot, options: &EspOptions) {
    let center = world.screen_center();
    painter.line(
        center - Vec2::new(CROSSHAIR_ARM, 0.0),
        center + Vec2::new(CROSSHAIR_ARM, 0.0),
        options.crosshair_color,
        1.0,
    );
    painter.line(
        center - Vec2::new(0.0, CROSSHAIR_ARM),
        center + Vec2::new(0.0, CROSSHAIR_ARM),
        options.crosshair_color,
        1.0,
    );
}

fn draw_player(
    painter: &Painter<'_>,
    world: &WorldSnapshot,
    options: &EspOptions,
    entity: &Entity,
) {
    let Some(info) = &entity.player else {
        return;
    };
    if options.enemies_only && entity.relation != Relation::Enemy {
        return;
    }

    let color = match (entity.relation, entity.visible) {
        (Relation::Enemy, true) => options.enemy_visible,
        (Relation::Enemy, false) => options.enemy_occluded,
        (_, true) => options.ally_visible,
        (_, false) => options.ally_occluded,
    };

    if options.player_snaplines {
        let origin = Vec2::new(world.screen.x * 0.5, world.screen.y);
        painter.line(origin, entity.foot(), color, 1.0);
    }

    if options.player_boxes {
        painter.box_by_style(options.box_style, entity.min, entity.max, color, 1.0);
    }

    if options.player_health {
        draw_health_bar(painter, entity, info.health);
    }

    if options.player_armour && info.armour > 0 {
        draw_armour_bar(painter, entity, info.armour);
    }

    if options.player_names {
        painter.label(
            Vec2::new(entity.min.x, entity.min.y - 14.0),
            &info.name,
            0.0,
            Rgba::WHITE,
        );
    }

    if options.player_weapons {
        if let Some(weapon) = &info.weapon {
            painter.label(
                Vec2::new(entity.min.x, entity.max.y + BAR_WIDTH + 2.0 * BAR_GAP),
                weapon,
                0.0,
                Rgba::WHITE,
            );
        }
    }
}

/// Vertical bar left of the box, filled bottom-up, red at low health shading
/// into green.
fn draw_health_bar(painter: &Painter<'_>, entity: &Entity, health: i32) {
    let fraction = (health.clamp(0, 100) as f32) / 100.0;
    let right = entity.min.x - BAR_GAP;
    let left = right - BAR_WIDTH;

    painter.box_filled(
        Vec2::new(left, entity.min.y),
        Vec2::new(right, entity.max.y),
        Rgba::rgba(0, 0, 0, 180),
        0.0,
    );

    let top = entity.max.y - (entity.max.y - entity.min.y) * fraction;
    let current = health_color(fraction);
    painter.multicolor_rect(
        Vec2::new(left, top),
        Vec2::new(right, entity.max.y),
        current,
        current,
        Rgba::rgb(0, 255, 0),
        Rgba::rgb(0, 255, 0),
    );
}

/// Horizontal bar under the box, filled left to right.
fn draw_armour_bar(painter: &Painter<'_>, entity: &Entity, armour: i32) {
    let fraction = (armour.clamp(0, 100) as f32) / 100.0;
    let top = entity.max.y + BAR_GAP;

    painter.box_filled(
        Vec2::new(entity.min.x, top),
        Vec2::new(entity.max.x, top + BAR_WIDTH),
        Rgba::rgba(0, 0, 0, 180),
        0.0,
    );
    painter.box_filled(
        Vec2::new(entity.min.x, top),
        Vec2::new(
            entity.min.x + (entity.max.x - entity.min.x) * fraction,
            top + BAR_WIDTH,
        ),
        Rgba::rgb(0, 128, 255),
        0.0,
    );
}

/// Outlined label at a world entity's position.
fn draw_marker(painter: &Painter<'_>, entity: &Entity, color: Rgba) {
    if let Some(label) = &entity.label {
        painter.label(entity.foot(), label, 0.0, color);
    }
}

fn health_color(fraction: f32) -> Rgba {
    Rgba::from_f32(1.0 - fraction, fraction, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontBook;
    use crate::options::Options;
    use crate::queue::DrawQueue;
    use crate::target::{DrawCall, RecordingTarget};
    use crate::world::{EntityId, PlayerInfo};

    fn enemy(id: u64, visible: bool) -> Entity {
        Entity::player(
            EntityId(id),
            Relation::Enemy,
            visible,
            Vec2::new(100.0, 100.0),
            Vec2::new(140.0, 180.0),
            PlayerInfo {
                name: "enemy".to_owned(),
                health: 50,
                armour: 100,
                weapon: Some("ak47".to_owned()),
                carrying_c4: false,
            },
        )
    }

    fn ally(id: u64) -> Entity {
        Entity::player(
            EntityId(id),
            Relation::Ally,
            true,
            Vec2::new(200.0, 100.0),
            Vec2::new(240.0, 180.0),
            PlayerInfo {
                name: "ally".to_owned(),
                health: 100,
                armour: 0,
                weapon: None,
                carrying_c4: false,
            },
        )
    }

    fn run(world: &WorldSnapshot, options: &Options) -> Vec<DrawCall> {
        let queue = DrawQueue::new();
        let mut fonts = FontBook::new();
        let id = fonts.register("droid", 18.0);
        fonts.mark_ready(id);

        let mut esp = Esp;
        let mut ctx = PopulateContext {
            painter: Painter::new(&queue, &fonts),
            world,
            options,
        };
        esp.populate(&mut ctx);

        queue.swap();
        let mut target = RecordingTarget::new();
        queue.render(&mut target);
        target.into_calls()
    }

    #[test]
    fn test_disabled_draws_nothing() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(enemy(1, true));

        let mut options = Options::default();
        options.esp.player_boxes = true; // enabled stays false

        assert!(run(&world, &options).is_empty());
    }

    #[test]
    fn test_boxes_use_configured_enemy_color() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(enemy(1, true));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.player_boxes = true;

        let calls = run(&world, &options);
        assert_eq!(calls.len(), 1);
        assert!(matches!(
            calls[0],
            DrawCall::Rect { color, .. } if color == options.esp.enemy_visible
        ));
    }

    #[test]
    fn test_occluded_enemy_uses_occluded_color() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(enemy(1, false));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.player_boxes = true;
        options.esp.enemy_occluded = Rgba::rgb(255, 128, 0);

        let calls = run(&world, &options);
        assert!(matches!(
            calls[0],
            DrawCall::Rect { color, .. } if color == Rgba::rgb(255, 128, 0)
        ));
    }

    #[test]
    fn test_enemies_only_filters_allies() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(ally(1));
        world.entities.push(enemy(2, true));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.enemies_only = true;
        options.esp.player_boxes = true;

        let calls = run(&world, &options);
        assert_eq!(calls.len(), 1);
    }

    #[test]
    fn test_health_bar_gradient_and_background() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(enemy(1, true));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.player_health = true;

        let calls = run(&world, &options);
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], DrawCall::RectFilled { .. }));
        // 50 hp: bar fill starts halfway down the box.
        assert!(matches!(
            calls[1],
            DrawCall::RectFilledMultiColor { min, .. } if min.y == 140.0
        ));
    }

    #[test]
    fn test_armour_bar_skipped_at_zero() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(ally(1)); // armour: 0

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.player_armour = true;

        assert!(run(&world, &options).is_empty());
    }

    #[test]
    fn test_snapline_anchors_screen_bottom_to_feet() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(enemy(1, true));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.player_snaplines = true;

        let calls = run(&world, &options);
        assert_eq!(calls.len(), 1);
        assert!(matches!(
            calls[0],
            DrawCall::Line { start, end, .. }
                if start == Vec2::new(960.0, 1080.0) && end == Vec2::new(120.0, 180.0)
        ));
    }

    #[test]
    fn test_name_and_weapon_labels_are_outlined() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(enemy(1, true));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.player_names = true;
        options.esp.player_weapons = true;

        let calls = run(&world, &options);
        // Two outlined labels: (8 stroke stamps + 1 primary) each.
        assert_eq!(calls.len(), 18);
        assert!(calls.iter().all(|c| matches!(c, DrawCall::Text { .. })));
    }

    #[test]
    fn test_crosshair_draws_two_arms() {
        let world = WorldSnapshot::new(Vec2::new(800.0, 600.0));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.crosshair = true;

        let calls = run(&world, &options);
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            calls[0],
            DrawCall::Line { start, end, .. }
                if start == Vec2::new(394.0, 300.0) && end == Vec2::new(406.0, 300.0)
        ));
    }

    #[test]
    fn test_world_item_markers_follow_toggles() {
        let mut world = WorldSnapshot::new(Vec2::new(1920.0, 1080.0));
        world.entities.push(Entity::world_item(
            EntityId(1),
            EntityKind::DroppedWeapon,
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 20.0),
            "deagle",
        ));
        world.entities.push(Entity::world_item(
            EntityId(2),
            EntityKind::PlantedC4,
            Vec2::new(30.0, 30.0),
            Vec2::new(40.0, 40.0),
            "c4",
        ));

        let mut options = Options::default();
        options.esp.enabled = true;
        options.esp.dropped_weapons = true; // planted_c4 stays off

        let calls = run(&world, &options);
        assert_eq!(calls.len(), 9); // one outlined label
        assert!(matches!(
            &calls[8],
            DrawCall::Text { text, color, .. }
                if text == "deagle" && *color == options.esp.weapon_color
        ));
    }
}
