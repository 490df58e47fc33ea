use crate::color::Rgba;
use crate::frame::{PopulateContext, ScenePopulator};
use crate::world::{EntityId, EntityKind, Relation};

/// The host's silhouette-highlight capability.
///
/// Applying a color to an entity asks the game's own glow pass to outline it
/// this frame; entities not applied are left untouched.
pub trait GlowSink {
    fn apply(&mut self, entity: EntityId, color: Rgba);
}

/// Silhouette-glow feature: selects per-entity glow colors from the option
/// set and feeds them to the host's [`GlowSink`].
///
/// Runs in the populate phase alongside the drawing features but never
/// appends primitives; the glow itself is rendered by the game.
pub struct GlowPopulator<S: GlowSink> {
    sink: S,
}

impl<S: GlowSink> GlowPopulator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: GlowSink> ScenePopulator for GlowPopulator<S> {
    fn populate(&mut self, ctx: &mut PopulateContext<'_>) {
        let options = &ctx.options.glow;
        if !options.enabled {
            return;
        }

        for entity in &ctx.world.entities {
            match entity.kind {
                EntityKind::Player => {
                    if options.enemies_only && entity.relation != Relation::Enemy {
                        continue;
                    }
                    let carrying_c4 = entity
                        .player
                        .as_ref()
                        .map(|info| info.carrying_c4)
                        .unwrap_or(false);
                    if options.c4_carrier && carrying_c4 {
                        self.sink.apply(entity.id, options.c4_carrier_color);
                    } else if options.players {
                        let color = match entity.relation {
                            Relation::Enemy => options.enemy,
                            _ => options.ally,
                        };
                        self.sink.apply(entity.id, color);
                    }
                }
                EntityKind::Chicken if options.chickens => {
                    self.sink.apply(entity.id, options.chicken_color)
                }
                EntityKind::DroppedWeapon if options.weapons => {
                    self.sink.apply(entity.id, options.weapon_color)
                }
                EntityKind::PlantedC4 if options.planted_c4 => {
                    self.sink.apply(entity.id, options.planted_c4_color)
                }
                EntityKind::DefuseKit if options.defuse_kits => {
                    self.sink.apply(entity.id, options.defuse_color)
                }
                _ => {}
            }
        }
    }
}
