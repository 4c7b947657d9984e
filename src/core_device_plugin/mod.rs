use bevy::prelude::*;

use crate::common::types::{EDeviceKind, EOperationalStatus};

pub mod components;
pub mod events;

pub use components::*;
pub use events::PowerVarsInitializedEvent;

pub struct CoreDevicePlugin;

impl Plugin for CoreDevicePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::ExternalId>()
            .register_type::<components::DeviceInfo>()
            .register_type::<components::DeviceTypeId>()
            .register_type::<EDeviceKind>()
            .register_type::<EOperationalStatus>()
            .register_type::<components::PowerTrader>()
            .register_type::<components::InspectionText>()
            .register_type::<components::ExternallyManagedPower>()
            .add_event::<PowerVarsInitializedEvent>()
            .add_systems(
                Update,
                (
                    activate_powered_devices_system,
                    update_grid_import_system
                        .after(crate::standby_power_plugin::systems::apply_charging_transitions_system)
                        .after(crate::standby_power_plugin::systems::resync_power_on_init_system),
                ),
            );

        // Debug‐log power output changes only in debug mode
        #[cfg(debug_assertions)]
        app.add_systems(Update, debug_power_changes_system);
    }
}

/// A device is operational once its power component exists.
pub fn activate_powered_devices_system(
    mut query: Query<&mut EOperationalStatus, Added<components::PowerTrader>>,
) {
    for mut status in query.iter_mut() {
        *status = EOperationalStatus::Online;
    }
}

/// The site's grid connection meters total import: the sum of every consuming
/// device's draw this frame.
pub fn update_grid_import_system(mut query: Query<(&EDeviceKind, &mut components::PowerTrader)>) {
    let total_draw_w: f32 = query
        .iter()
        .filter(|(kind, power)| **kind == EDeviceKind::Charger && power.power_output_w < 0.0)
        .map(|(_, power)| -power.power_output_w)
        .sum();

    for (kind, mut power) in query.iter_mut() {
        if *kind == EDeviceKind::GridConnection && power.power_output_w != total_draw_w {
            power.power_output_w = total_draw_w;
        }
    }
}

#[cfg(debug_assertions)]
fn debug_power_changes_system(
    query: Query<
        (
            Entity,
            &components::ExternalId,
            &EDeviceKind,
            &components::PowerTrader,
        ),
        Changed<components::PowerTrader>,
    >,
) {
    for (e, id, kind, power) in query.iter() {
        debug!(
            "Entity {:?} [{}|{:?}] → nominal: {} W, output: {} W",
            e, id.0, kind, power.nominal_power_w, power.power_output_w
        );
    }
}
