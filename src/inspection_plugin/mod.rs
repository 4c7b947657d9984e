use bevy::prelude::*;

pub mod systems;

pub use systems::{compose_inspection_text_system, format_watts, rewrite_idle_wattage};

pub struct InspectionPlugin;

impl Plugin for InspectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            compose_inspection_text_system
                .after(crate::standby_power_plugin::systems::apply_charging_transitions_system)
                .after(crate::standby_power_plugin::systems::resync_power_on_init_system),
        );
    }
}
