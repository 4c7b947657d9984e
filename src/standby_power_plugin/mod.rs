use bevy::prelude::*;

pub mod compat;
pub mod resources;
pub mod systems;

pub use compat::{CompatCache, PeerModule, SuperchargerCompat};
pub use resources::{StandbyPowerConfig, StandbyPowerRegistry};
pub use systems::{apply_charging_transitions_system, resync_power_on_init_system};

pub struct StandbyPowerPlugin;

impl Plugin for StandbyPowerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StandbyPowerRegistry>()
            .init_resource::<SuperchargerCompat>()
            .add_systems(
                Update,
                (
                    apply_charging_transitions_system
                        .after(crate::charging_plugin::systems::apply_dock_commands_system),
                    resync_power_on_init_system.after(apply_charging_transitions_system),
                ),
            );
    }
}
