//! Overlay configuration: a flat, read-only table of named toggles and
//! colors, grouped per feature. Consulted by the feature populators, never by
//! the queue or orchestrator.

use crate::color::Rgba;
use crate::painter::BoxStyle;

/// All overlay options. Owned by the host, passed by reference each frame.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub esp: EspOptions,
    pub glow: GlowOptions,
    pub chams: ChamsOptions,
}

/// Enemy-outline (ESP) toggles and colors.
#[derive(Debug, Clone)]
pub struct EspOptions {
    pub enabled: bool,
    pub enemies_only: bool,
    pub player_boxes: bool,
    pub box_style: BoxStyle,
    pub player_names: bool,
    pub player_health: bool,
    pub player_armour: bool,
    pub player_weapons: bool,
    pub player_snaplines: bool,
    pub crosshair: bool,
    pub dropped_weapons: bool,
    pub defuse_kit: bool,
    pub planted_c4: bool,
    pub items: bool,

    pub ally_visible: Rgba,
    pub enemy_visible: Rgba,
    pub ally_occluded: Rgba,
    pub enemy_occluded: Rgba,
    pub crosshair_color: Rgba,
    pub weapon_color: Rgba,
    pub defuse_color: Rgba,
    pub c4_color: Rgba,
    pub item_color: Rgba,
}

impl Default for EspOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            enemies_only: false,
            player_boxes: false,
            box_style: BoxStyle::Flat,
            player_names: false,
            player_health: false,
            player_armour: false,
            player_weapons: false,
            player_snaplines: false,
            crosshair: false,
            dropped_weapons: false,
            defuse_kit: false,
            planted_c4: false,
            items: false,

            ally_visible: Rgba::rgb(0, 128, 255),
            enemy_visible: Rgba::rgb(255, 0, 0),
            ally_occluded: Rgba::rgb(0, 128, 255),
            enemy_occluded: Rgba::rgb(255, 0, 0),
            crosshair_color: Rgba::rgb(255, 255, 255),
            weapon_color: Rgba::rgb(128, 0, 128),
            defuse_color: Rgba::rgb(0, 128, 255),
            c4_color: Rgba::rgb(255, 255, 0),
            item_color: Rgba::rgb(255, 255, 255),
        }
    }
}

/// Silhouette-glow toggles and colors.
#[derive(Debug, Clone)]
pub struct GlowOptions {
    pub enabled: bool,
    pub enemies_only: bool,
    pub players: bool,
    pub chickens: bool,
    pub c4_carrier: bool,
    pub planted_c4: bool,
    pub defuse_kits: bool,
    pub weapons: bool,

    pub ally: Rgba,
    pub enemy: Rgba,
    pub chicken_color: Rgba,
    pub c4_carrier_color: Rgba,
    pub planted_c4_color: Rgba,
    pub defuse_color: Rgba,
    pub weapon_color: Rgba,
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            enemies_only: false,
            players: false,
            chickens: false,
            c4_carrier: false,
            planted_c4: false,
            defuse_kits: false,
            weapons: false,

            ally: Rgba::rgb(0, 128, 255),
            enemy: Rgba::rgb(255, 0, 0),
            chicken_color: Rgba::rgb(0, 128, 0),
            c4_carrier_color: Rgba::rgb(255, 255, 0),
            planted_c4_color: Rgba::rgb(128, 0, 128),
            defuse_color: Rgba::rgb(255, 255, 255),
            weapon_color: Rgba::rgb(255, 128, 0),
        }
    }
}

/// Material-override (chams) toggles and colors.
#[derive(Debug, Clone)]
pub struct ChamsOptions {
    pub player_enabled: bool,
    pub player_enemies_only: bool,
    pub player_wireframe: bool,
    pub player_flat: bool,
    pub player_ignore_z: bool,
    pub player_glass: bool,
    pub arms_enabled: bool,
    pub arms_wireframe: bool,
    pub arms_flat: bool,
    pub arms_ignore_z: bool,
    pub arms_glass: bool,

    pub player_ally_visible: Rgba,
    pub player_ally_occluded: Rgba,
    pub player_enemy_visible: Rgba,
    pub player_enemy_occluded: Rgba,
    pub arms_visible: Rgba,
    pub arms_occluded: Rgba,
}

impl Default for ChamsOptions {
    fn default() -> Self {
        Self {
            player_enabled: false,
            player_enemies_only: false,
            player_wireframe: false,
            player_flat: false,
            player_ignore_z: false,
            player_glass: false,
            arms_enabled: false,
            arms_wireframe: false,
            arms_flat: false,
            arms_ignore_z: false,
            arms_glass: false,

            player_ally_visible: Rgba::rgb(0, 128, 255),
            player_ally_occluded: Rgba::rgb(0, 255, 128),
            player_enemy_visible: Rgba::rgb(255, 0, 0),
            player_enemy_occluded: Rgba::rgb(255, 128, 0),
            arms_visible: Rgba::rgb(0, 128, 255),
            arms_occluded: Rgba::rgb(0, 128, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_off_by_default() {
        let options = Options::default();
        assert!(!options.esp.enabled);
        assert!(!options.glow.enabled);
        assert!(!options.chams.player_enabled);
        assert!(!options.chams.arms_enabled);
    }

    #[test]
    fn test_default_colors() {
        let options = Options::default();
        assert_eq!(options.esp.enemy_visible, Rgba::rgb(255, 0, 0));
        assert_eq!(options.esp.ally_visible, Rgba::rgb(0, 128, 255));
        assert_eq!(options.glow.planted_c4_color, Rgba::rgb(128, 0, 128));
        assert_eq!(options.chams.player_enemy_occluded, Rgba::rgb(255, 128, 0));
    }
}
