use crate::color::Rgba;
use crate::options::ChamsOptions;
use crate::world::Relation;

/// Shading-state override handed to the host's model-draw hook.
///
/// The mechanics of swapping the bound material are the host's concern; the
/// overlay only decides whether and with what style to override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialStyle {
    /// Draw through world geometry.
    pub ignore_z: bool,
    /// Unlit flat shading instead of the regular material.
    pub flat: bool,
    pub wireframe: bool,
    /// Translucent glass-like blending.
    pub glass: bool,
    pub color: Rgba,
}

/// The host's "override the currently bound shading state" capability.
pub trait MaterialOverride {
    fn override_material(&mut self, style: &MaterialStyle);
}

/// What the host is about to draw when the hook fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelSlot {
    Player { relation: Relation, visible: bool },
    /// First-person viewmodel arms. The host invokes the hook a second time
    /// with `occluded_pass` set when it wants a through-walls layer.
    Arms { occluded_pass: bool },
}

/// Material-override feature (chams).
///
/// Invoked from the renderer's model-draw hook, not from the populate phase;
/// decides per model whether to override and with which style. Returns
/// whether an override was applied so the host knows to restore state.
#[derive(Debug, Default)]
pub struct Chams;

impl Chams {
    pub fn on_draw_model(
        &self,
        slot: ModelSlot,
        options: &ChamsOptions,
        materials: &mut dyn MaterialOverride,
    ) -> bool {
        match slot {
            ModelSlot::Player { relation, visible } => {
                if !options.player_enabled {
                    return false;
                }
                if options.player_enemies_only && relation != Relation::Enemy {
                    return false;
                }
                let color = match (relation, visible) {
                    (Relation::Enemy, true) => options.player_enemy_visible,
                    (Relation::Enemy, false) => options.player_enemy_occluded,
                    (_, true) => options.player_ally_visible,
                    (_, false) => options.player_ally_occluded,
                };
                materials.override_material(&MaterialStyle {
                    ignore_z: options.player_ignore_z,
                    flat: options.player_flat,
                    wireframe: options.player_wireframe,
                    glass: options.player_glass,
                    color,
                });
                true
            }
            ModelSlot::Arms { occluded_pass } => {
                if !options.arms_enabled {
                    return false;
                }
                // The extra pass only exists when drawing through geometry.
                if occluded_pass && !options.arms_ignore_z {
                    return false;
                }
                let color = if occluded_pass {
                    options.arms_occluded
                } else {
                    options.arms_visible
                };
                materials.override_material(&MaterialStyle {
                    ignore_z: occluded_pass,
                    flat: options.arms_flat,
                    wireframe: options.arms_wireframe,
                    glass: options.arms_glass,
                    color,
                });
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[derive(Default)]
    struct RecordingOverride {
        applied: Vec<MaterialStyle>,
    }

    impl MaterialOverride for RecordingOverride {
        fn override_material(&mut self, style: &MaterialStyle) {
            self.applied.push(*style);
        }
    }

    #[test]
    fn test_disabled_never_overrides() {
        let chams = Chams;
        let options = Options::default().chams;
        let mut materials = RecordingOverride::default();

        let overridden = chams.on_draw_model(
            ModelSlot::Player {
                relation: Relation::Enemy,
                visible: true,
            },
            &options,
            &mut materials,
        );
        assert!(!overridden);
        assert!(materials.applied.is_empty());
    }

    #[test]
    fn test_player_style_and_color_selection() {
        let chams = Chams;
        let mut options = Options::default().chams;
        options.player_enabled = true;
        options.player_flat = true;
        options.player_ignore_z = true;
        let mut materials = RecordingOverride::default();

        let overridden = chams.on_draw_model(
            ModelSlot::Player {
                relation: Relation::Enemy,
                visible: false,
            },
            &options,
            &mut materials,
        );
        assert!(overridden);
        assert_eq!(
            materials.applied,
            vec![MaterialStyle {
                ignore_z: true,
                flat: true,
                wireframe: false,
                glass: false,
                color: options.player_enemy_occluded,
            }]
        );
    }

    #[test]
    fn test_enemies_only_skips_allies() {
        let chams = Chams;
        let mut options = Options::default().chams;
        options.player_enabled = true;
        options.player_enemies_only = true;
        let mut materials = RecordingOverride::default();

        let overridden = chams.on_draw_model(
            ModelSlot::Player {
                relation: Relation::Ally,
                visible: true,
            },
            &options,
            &mut materials,
        );
        assert!(!overridden);
    }

    #[test]
    fn test_arms_passes() {
        let chams = Chams;
        let mut options = Options::default().chams;
        options.arms_enabled = true;
        options.arms_glass = true;
        let mut materials = RecordingOverride::default();

        assert!(chams.on_draw_model(
            ModelSlot::Arms {
                occluded_pass: false
            },
            &options,
            &mut materials,
        ));
        assert_eq!(materials.applied[0].color, options.arms_visible);
        assert!(materials.applied[0].glass);

        // Occluded pass refused without ignore-Z.
        assert!(!chams.on_draw_model(
            ModelSlot::Arms {
                occluded_pass: true
            },
            &options,
            &mut materials,
        ));

        options.arms_ignore_z = true;
        assert!(chams.on_draw_model(
            ModelSlot::Arms {
                occluded_pass: true
            },
            &options,
            &mut materials,
        ));
        let last = materials.applied.last().unwrap();
        assert!(last.ignore_z);
        assert_eq!(last.color, options.arms_occluded);
    }
}
