use crate::charging_plugin::{ChargeTarget, ChargingTransitionEvent};
use crate::core_device_plugin::{
    DeviceTypeId, ExternalId, ExternallyManagedPower, PowerTrader, PowerVarsInitializedEvent,
};
use bevy::prelude::*;

use super::compat::SuperchargerCompat;
use super::resources::StandbyPowerRegistry;

/// Sets a charger's output to the negated draw selected by its charging
/// state: nominal while a unit is docked, the template's standby draw while
/// idle. Every failure path leaves the output untouched and warns.
fn update_power_state(
    external_id: &ExternalId,
    type_id: &DeviceTypeId,
    power: Option<Mut<PowerTrader>>,
    is_charging: bool,
    externally_managed: bool,
    standby_registry: &StandbyPowerRegistry,
    compat: &SuperchargerCompat,
) {
    if compat.active && externally_managed {
        return;
    }

    let Some(mut power) = power else {
        warn!("Missing power trader on mech charger '{}'", external_id.0);
        return;
    };

    let draw_w = if is_charging {
        power.nominal_power_w
    } else {
        let Some(standby) = standby_registry.0.get(&type_id.0) else {
            warn!(
                "Missing standby power config on mech charger template '{}'",
                type_id.0
            );
            return;
        };
        standby.standby_power_w
    };

    power.power_output_w = -draw_w;
}

pub fn apply_charging_transitions_system(
    mut transitions: EventReader<ChargingTransitionEvent>,
    mut chargers: Query<(
        &ExternalId,
        &DeviceTypeId,
        Option<&mut PowerTrader>,
        Option<&ExternallyManagedPower>,
    )>,
    standby_registry: Res<StandbyPowerRegistry>,
    compat: Res<SuperchargerCompat>,
) {
    for event in transitions.read() {
        let Ok((external_id, type_id, power, managed)) = chargers.get_mut(event.charger) else {
            continue;
        };
        update_power_state(
            external_id,
            type_id,
            power,
            event.is_charging,
            managed.is_some(),
            &standby_registry,
            &compat,
        );
    }
}

/// Reinitialization wipes the power component back to host defaults, which
/// can happen with no charging transition attached. Re-derive the output from
/// the charging state the charger is actually in.
pub fn resync_power_on_init_system(
    mut inits: EventReader<PowerVarsInitializedEvent>,
    mut chargers: Query<(
        &ExternalId,
        &DeviceTypeId,
        &ChargeTarget,
        Option<&mut PowerTrader>,
        Option<&ExternallyManagedPower>,
    )>,
    standby_registry: Res<StandbyPowerRegistry>,
    compat: Res<SuperchargerCompat>,
) {
    for event in inits.read() {
        // Non-charger devices reinitialize too; only chargers carry a
        // charging state to resync against.
        let Ok((external_id, type_id, charge_target, power, managed)) =
            chargers.get_mut(event.device)
        else {
            continue;
        };
        update_power_state(
            external_id,
            type_id,
            power,
            charge_target.is_charging(),
            managed.is_some(),
            &standby_registry,
            &compat,
        );
    }
}
