use crate::charging_plugin::ChargingPlugin;
use crate::core_device_plugin::CoreDevicePlugin;
use crate::device_template_plugin::{DeviceTemplatePlugin, SiteConfig};
use crate::external_comms_plugin::{
    ExternalCommsPlugin, ExternalDockCommand, ExternalPowerTelemetry, IncomingDockCommandChannel,
    OutgoingTelemetryChannel,
};
use crate::inspection_plugin::InspectionPlugin;
use crate::standby_power_plugin::{CompatCache, StandbyPowerPlugin, SuperchargerCompat};
use bevy::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// External channel ends for production integration or tests.
pub struct AppExternalChannelEnds {
    pub dock_command_sender: Sender<ExternalDockCommand>,
    pub dock_command_receiver: Receiver<ExternalDockCommand>,
    pub telemetry_sender: Sender<ExternalPowerTelemetry>,
    pub telemetry_receiver: Receiver<ExternalPowerTelemetry>,
}

pub fn setup_bevy_app(config: SiteConfig) -> (App, AppExternalChannelEnds) {
    let mut app = App::new();

    let (dock_command_sender, dock_command_receiver) = unbounded();
    let (telemetry_sender, telemetry_receiver) = unbounded();

    // The peer-module scan happens exactly once, before any system can read
    // the resulting flag.
    let compat = CompatCache::new();
    let supercharger_active = compat.resolve(&config.peer_modules);

    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .insert_resource(SuperchargerCompat {
            active: supercharger_active,
        })
        .add_plugins(CoreDevicePlugin)
        .add_plugins(DeviceTemplatePlugin)
        .add_plugins(ChargingPlugin)
        .add_plugins(StandbyPowerPlugin)
        .add_plugins(InspectionPlugin)
        .add_plugins(ExternalCommsPlugin)
        // insert only the halves needed by ECS/plugin logic:
        .insert_resource(IncomingDockCommandChannel(dock_command_receiver.clone()))
        .insert_resource(OutgoingTelemetryChannel(telemetry_sender.clone()));

    let channels = AppExternalChannelEnds {
        dock_command_sender,
        dock_command_receiver,
        telemetry_sender,
        telemetry_receiver,
    };
    (app, channels)
}
