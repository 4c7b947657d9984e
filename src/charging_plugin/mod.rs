use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::{ChargeTarget, ChargeableUnit};
pub use events::{ChargingTransitionEvent, DockCommandEvent};
pub use systems::apply_dock_commands_system;

pub struct ChargingPlugin;

impl Plugin for ChargingPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ChargeTarget>()
            .register_type::<ChargeableUnit>()
            .add_event::<DockCommandEvent>()
            .add_event::<ChargingTransitionEvent>()
            .add_systems(
                Update,
                apply_dock_commands_system
                    .after(crate::external_comms_plugin::systems::ingest_dock_commands_from_channel_system),
            );
    }
}
