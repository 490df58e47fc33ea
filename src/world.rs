//! Per-frame snapshot of the visible game world.
//!
//! The game process is an opaque data source; its bindings hand the overlay a
//! [`WorldSnapshot`] of screen-space entities once per simulation tick. The
//! snapshot is read-only to every feature and never outlives the frame.

use glam::Vec2;

/// Stable identifier of a game entity, as reported by the host bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Relation of an entity to the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Ally,
    Enemy,
    /// World entities with no team (chickens, dropped items).
    Neutral,
}

/// Broad classification driving which feature handles the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Chicken,
    DroppedWeapon,
    DefuseKit,
    PlantedC4,
    Item,
}

/// Player-specific details, present when `kind == Player`.
#[derive(Debug, Clone, Default)]
pub struct PlayerInfo {
    pub name: String,
    /// Health in `0..=100`.
    pub health: i32,
    /// Armour in `0..=100`.
    pub armour: i32,
    pub weapon: Option<String>,
    pub carrying_c4: bool,
}

/// One visible entity, projected to screen space by the host bindings.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub relation: Relation,
    /// Unoccluded from the local viewpoint.
    pub visible: bool,
    /// Screen-space bounding box, min = top-left.
    pub min: Vec2,
    pub max: Vec2,
    pub player: Option<PlayerInfo>,
    /// Display label for world entities (weapon or item name).
    pub label: Option<String>,
}

impl Entity {
    pub fn player(
        id: EntityId,
        relation: Relation,
        visible: bool,
        min: Vec2,
        max: Vec2,
        info: PlayerInfo,
    ) -> Self {
        Self {
            id,
            kind: EntityKind::Player,
            relation,
            visible,
            min,
            max,
            player: Some(info),
            label: None,
        }
    }

    pub fn world_item(id: EntityId, kind: EntityKind, min: Vec2, max: Vec2, label: &str) -> Self {
        Self {
            id,
            kind,
            relation: Relation::Neutral,
            visible: true,
            min,
            max,
            player: None,
            label: Some(label.to_owned()),
        }
    }

    /// Bottom-center of the bounding box; snapline attachment point.
    pub fn foot(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) * 0.5, self.max.y)
    }
}

/// Everything the populators may read this frame.
#[derive(Debug, Clone, Default)]
pub struct WorldSnapshot {
    /// Viewport size in pixels.
    pub screen: Vec2,
    pub entities: Vec<Entity>,
}

impl WorldSnapshot {
    pub fn new(screen: Vec2) -> Self {
        Self {
            screen,
            entities: Vec::new(),
        }
    }

    pub fn screen_center(&self) -> Vec2 {
        self.screen * 0.5
    }
}
