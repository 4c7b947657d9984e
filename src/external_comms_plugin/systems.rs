use crate::charging_plugin::DockCommandEvent;
use crate::core_device_plugin::{ExternalId, PowerTrader};
use bevy::prelude::*;
use chrono::Utc;

use super::{ExternalPowerTelemetry, IncomingDockCommandChannel, OutgoingTelemetryChannel};

pub fn ingest_dock_commands_from_channel_system(
    channel: Res<IncomingDockCommandChannel>,
    mut event_writer: EventWriter<DockCommandEvent>,
) {
    while let Ok(data) = channel.0.try_recv() {
        info!(
            "ExternalComms: Ingested dock command from channel for ExtID '{}': unit {:?}",
            data.charger_external_id, data.unit_external_id
        );
        event_writer.write(DockCommandEvent {
            charger_external_id: data.charger_external_id,
            unit_external_id: data.unit_external_id,
        });
    }
}

pub fn export_power_telemetry_to_channel_system(
    query: Query<(&ExternalId, &PowerTrader), Changed<PowerTrader>>,
    channel: Res<OutgoingTelemetryChannel>,
) {
    for (external_id_comp, power) in query.iter() {
        let data = ExternalPowerTelemetry {
            external_id: external_id_comp.0.clone(),
            power_output_w: power.power_output_w,
            timestamp: Utc::now(),
        };
        if let Err(e) = channel.0.send(data) {
            error!(
                "ExternalComms: Failed to send power telemetry for ExtID '{}' to channel: {}",
                external_id_comp.0, e
            );
        } else {
            info!(
                "ExternalComms: Exported power telemetry for ExtID '{}': {:.1} W",
                external_id_comp.0, power.power_output_w
            );
        }
    }
}
