use bevy::prelude::*;
use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender};
use serde::Serialize;

pub mod systems;

pub use systems::*;

// Data Transfer Objects crossing the app boundary.
#[derive(Debug, Clone)]
pub struct ExternalDockCommand {
    pub charger_external_id: String,
    /// `Some` docks the unit, `None` clears the bay.
    pub unit_external_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalPowerTelemetry {
    pub external_id: String,
    pub power_output_w: f32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

pub struct ExternalCommsPlugin;

impl Plugin for ExternalCommsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                ingest_dock_commands_from_channel_system,
                export_power_telemetry_to_channel_system
                    .after(crate::inspection_plugin::systems::compose_inspection_text_system)
                    .after(crate::core_device_plugin::update_grid_import_system),
            ),
        );
    }
}

// Resources holding the Bevy-side channel ends
#[derive(Resource)]
pub struct IncomingDockCommandChannel(pub Receiver<ExternalDockCommand>);

#[derive(Resource)]
pub struct OutgoingTelemetryChannel(pub Sender<ExternalPowerTelemetry>);
