use bevy::prelude::*;
use mech_depot_sim::app_setup::setup_bevy_app;
use mech_depot_sim::depot_sim_task::run_depot_activity_sim;
use mech_depot_sim::device_template_plugin::SiteConfig;
use mech_depot_sim::types::EDeviceKind;
use tracing_subscriber::EnvFilter;

fn main() {
    // Defaults to info-level logs for the whole process; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Mech Depot ECS sim...");

    let config =
        SiteConfig::from_file("assets/site_config.json").expect("Failed to load site_config.json");

    let charger_ids: Vec<String> = config
        .devices
        .iter()
        .filter(|device| {
            config
                .device_templates
                .get(&device.template_id)
                .is_some_and(|template| template.device_kind == EDeviceKind::Charger)
        })
        .map(|device| device.external_id.clone())
        .collect();

    let (mut app, channels) = setup_bevy_app(config);

    let dock_sender = channels.dock_command_sender.clone();
    let telemetry_receiver = channels.telemetry_receiver.clone();
    std::thread::spawn(move || {
        run_depot_activity_sim(charger_ids, dock_sender, telemetry_receiver)
    });

    app.run();

    info!("Mech Depot sim shutting down.");
}
