use crate::common::id_map::ExternalIdMap;
use crate::core_device_plugin::ExternalId;
use bevy::prelude::*;
use chrono::Utc;

use super::components::{ChargeTarget, ChargeableUnit};
use super::events::{ChargingTransitionEvent, DockCommandEvent};

pub fn apply_dock_commands_system(
    mut commands: Commands,
    mut events: EventReader<DockCommandEvent>,
    mut id_map: ResMut<ExternalIdMap>,
    mut chargers: Query<&mut ChargeTarget>,
    mut transitions: EventWriter<ChargingTransitionEvent>,
) {
    for event in events.read() {
        let Some(charger_entity) = id_map.resolve(&event.charger_external_id) else {
            warn!(
                "Received dock command for unknown ExtID '{}'",
                event.charger_external_id
            );
            continue;
        };
        let Ok(mut charge_target) = chargers.get_mut(charger_entity) else {
            warn!(
                "Received dock command for non-charger ExtID '{}'",
                event.charger_external_id
            );
            continue;
        };

        let new_target = event.unit_external_id.as_ref().map(|unit_id| {
            *id_map.0.entry(unit_id.clone()).or_insert_with(|| {
                commands
                    .spawn((ExternalId(unit_id.clone()), ChargeableUnit))
                    .id()
            })
        });

        let was_charging = charge_target.is_charging();
        let is_charging = new_target.is_some();
        charge_target.target = new_target;
        if was_charging != is_charging {
            charge_target.last_transition = Some(Utc::now());
            info!(
                "Charger '{}' {} charging",
                event.charger_external_id,
                if is_charging { "started" } else { "stopped" }
            );
        }

        transitions.write(ChargingTransitionEvent {
            charger: charger_entity,
            is_charging,
        });
    }
}
