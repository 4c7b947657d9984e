use bevy::prelude::*;
use crossbeam_channel::Receiver;
use mech_depot_sim::app_setup::{setup_bevy_app, AppExternalChannelEnds};
use mech_depot_sim::common::id_map::ExternalIdMap;
use mech_depot_sim::core_device_plugin::{InspectionText, PowerTrader, PowerVarsInitializedEvent};
use mech_depot_sim::device_template_plugin::SiteConfig;
use mech_depot_sim::external_comms_plugin::{ExternalDockCommand, ExternalPowerTelemetry};

const BASE_CONFIG: &str = r#"{
    "device_templates": {
        "mech_charger_standard": {
            "device_kind": "Charger",
            "components": [
                { "type": "device_info", "make": "Heremeus Robotics", "model": "Dock MkII" },
                { "type": "power_trader", "nominal_power_w": 500.0 },
                { "type": "standby_power", "standby_power_w": 120.0 }
            ]
        },
        "site_grid_connection": {
            "device_kind": "GridConnection",
            "components": [
                { "type": "power_trader", "nominal_power_w": 0.0 }
            ]
        }
    },
    "devices": [
        { "external_id": "CH001", "template_id": "mech_charger_standard" },
        { "external_id": "CH002", "template_id": "mech_charger_standard" },
        { "external_id": "GRID01", "template_id": "site_grid_connection" }
    ]
}"#;

const MISSING_STANDBY_CONFIG: &str = r#"{
    "device_templates": {
        "mech_charger_unconfigured": {
            "device_kind": "Charger",
            "components": [
                { "type": "power_trader", "nominal_power_w": 500.0 }
            ]
        }
    },
    "devices": [
        { "external_id": "CH001", "template_id": "mech_charger_unconfigured" }
    ]
}"#;

const POWERLESS_CHARGER_CONFIG: &str = r#"{
    "device_templates": {
        "mech_charger_powerless": {
            "device_kind": "Charger",
            "components": [
                { "type": "device_info", "make": "Heremeus Robotics", "model": "Dud" }
            ]
        }
    },
    "devices": [
        { "external_id": "CH001", "template_id": "mech_charger_powerless" }
    ]
}"#;

const SUPERCHARGER_TEMPLATES: &str = r#"
    "device_templates": {
        "mech_supercharger": {
            "device_kind": "Charger",
            "components": [
                { "type": "power_trader", "nominal_power_w": 1600.0 },
                { "type": "standby_power", "standby_power_w": 200.0 },
                { "type": "externally_managed_power" }
            ]
        }
    },
    "devices": [
        { "external_id": "SUPER01", "template_id": "mech_supercharger" }
    ]
"#;

fn supercharger_config(peer_module_loaded: bool) -> String {
    let peers = if peer_module_loaded {
        r#""peer_modules": [
            { "name": "MechSupercharger", "package_id": "rselbo.mechsupercharger.core" }
        ],"#
    } else {
        ""
    };
    format!("{{ {peers} {SUPERCHARGER_TEMPLATES} }}")
}

fn build_app(config_json: &str) -> (App, AppExternalChannelEnds) {
    let config = SiteConfig::from_json(config_json).unwrap();
    let (mut app, channels) = setup_bevy_app(config);
    // First update runs Startup (spawn + power init), second settles events.
    app.update();
    app.update();
    (app, channels)
}

fn device_entity(app: &App, external_id: &str) -> Entity {
    app.world()
        .resource::<ExternalIdMap>()
        .resolve(external_id)
        .unwrap_or_else(|| panic!("unknown device '{external_id}'"))
}

fn power_output(app: &App, external_id: &str) -> f32 {
    app.world()
        .get::<PowerTrader>(device_entity(app, external_id))
        .unwrap()
        .power_output_w
}

fn inspection_text(app: &App, external_id: &str) -> String {
    app.world()
        .get::<InspectionText>(device_entity(app, external_id))
        .unwrap()
        .0
        .clone()
}

fn send_dock(channels: &AppExternalChannelEnds, charger_id: &str, unit_id: Option<&str>) {
    channels
        .dock_command_sender
        .send(ExternalDockCommand {
            charger_external_id: charger_id.to_string(),
            unit_external_id: unit_id.map(str::to_string),
        })
        .unwrap();
}

fn drain_telemetry(receiver: &Receiver<ExternalPowerTelemetry>) -> Vec<ExternalPowerTelemetry> {
    let mut collected = Vec::new();
    while let Ok(telemetry) = receiver.try_recv() {
        collected.push(telemetry);
    }
    collected
}

#[test]
fn idle_charger_settles_at_standby_draw() {
    let (app, _channels) = build_app(BASE_CONFIG);

    assert_eq!(power_output(&app, "CH001"), -120.0);

    let text = inspection_text(&app, "CH001");
    assert!(text.contains("120 W"), "unexpected text: {text}");
    assert!(text.contains("idle"), "unexpected text: {text}");
    assert!(!text.contains("500 W"), "unexpected text: {text}");
}

#[test]
fn docking_switches_to_nominal_draw() {
    let (mut app, channels) = build_app(BASE_CONFIG);

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();

    assert_eq!(power_output(&app, "CH001"), -500.0);
    let text = inspection_text(&app, "CH001");
    assert!(text.contains("500 W"), "unexpected text: {text}");
    assert!(text.contains("charging"), "unexpected text: {text}");

    send_dock(&channels, "CH001", None);
    app.update();
    app.update();

    assert_eq!(power_output(&app, "CH001"), -120.0);
    let text = inspection_text(&app, "CH001");
    assert!(text.contains("120 W"), "unexpected text: {text}");
    assert!(text.contains("idle"), "unexpected text: {text}");
}

#[test]
fn repeated_transitions_are_idempotent() {
    let (mut app, channels) = build_app(BASE_CONFIG);

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();
    let after_first_dock = power_output(&app, "CH001");

    // Same transition again must settle on the same output.
    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();
    assert_eq!(power_output(&app, "CH001"), after_first_dock);

    send_dock(&channels, "CH001", None);
    app.update();
    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();
    assert_eq!(power_output(&app, "CH001"), after_first_dock);
}

#[test]
fn missing_standby_config_leaves_output_unchanged() {
    let (mut app, channels) = build_app(MISSING_STANDBY_CONFIG);

    // Idle resolution cannot run without a standby record; the power
    // component keeps reporting its host default.
    assert_eq!(power_output(&app, "CH001"), -500.0);

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();
    assert_eq!(power_output(&app, "CH001"), -500.0);

    send_dock(&channels, "CH001", None);
    app.update();
    app.update();
    assert_eq!(power_output(&app, "CH001"), -500.0);
}

#[test]
fn charger_without_power_trader_is_skipped() {
    let (mut app, channels) = build_app(POWERLESS_CHARGER_CONFIG);

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();

    let entity = device_entity(&app, "CH001");
    assert!(app.world().get::<PowerTrader>(entity).is_none());
    // Without a power component there is nothing to compose text from.
    assert_eq!(inspection_text(&app, "CH001"), "");
}

#[test]
fn supercharger_untouched_while_peer_module_loaded() {
    let (mut app, channels) = build_app(&supercharger_config(true));

    // Host default stands; the standby record is ignored for exempt chargers.
    assert_eq!(power_output(&app, "SUPER01"), -1600.0);

    send_dock(&channels, "SUPER01", Some("MECH-001"));
    app.update();
    app.update();
    send_dock(&channels, "SUPER01", None);
    app.update();
    app.update();
    assert_eq!(power_output(&app, "SUPER01"), -1600.0);
}

#[test]
fn supercharger_managed_normally_without_peer_module() {
    let (mut app, channels) = build_app(&supercharger_config(false));

    assert_eq!(power_output(&app, "SUPER01"), -200.0);

    send_dock(&channels, "SUPER01", Some("MECH-001"));
    app.update();
    app.update();
    assert_eq!(power_output(&app, "SUPER01"), -1600.0);
}

#[test]
fn grid_meter_reports_total_site_import() {
    let (mut app, channels) = build_app(BASE_CONFIG);

    // Two idle chargers at 120 W each.
    assert_eq!(power_output(&app, "GRID01"), 240.0);

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();
    assert_eq!(power_output(&app, "GRID01"), 620.0);
}

#[test]
fn power_vars_reinit_resyncs_idle_draw() {
    let (mut app, _channels) = build_app(BASE_CONFIG);
    let entity = device_entity(&app, "CH001");

    // Host-side reinitialization wipes the output back to nominal draw.
    app.world_mut()
        .get_mut::<PowerTrader>(entity)
        .unwrap()
        .power_output_w = -500.0;
    app.world_mut()
        .send_event(PowerVarsInitializedEvent { device: entity });
    app.update();
    app.update();

    assert_eq!(power_output(&app, "CH001"), -120.0);
}

#[test]
fn power_vars_reinit_resyncs_charging_draw() {
    let (mut app, channels) = build_app(BASE_CONFIG);
    let entity = device_entity(&app, "CH001");

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();

    app.world_mut()
        .get_mut::<PowerTrader>(entity)
        .unwrap()
        .power_output_w = 0.0;
    app.world_mut()
        .send_event(PowerVarsInitializedEvent { device: entity });
    app.update();
    app.update();

    assert_eq!(power_output(&app, "CH001"), -500.0);
}

#[test]
fn telemetry_exported_on_power_changes() {
    let (mut app, channels) = build_app(BASE_CONFIG);

    let startup = drain_telemetry(&channels.telemetry_receiver);
    assert!(startup
        .iter()
        .any(|t| t.external_id == "CH001" && t.power_output_w == -120.0));

    send_dock(&channels, "CH001", Some("MECH-001"));
    app.update();
    app.update();

    let after_dock = drain_telemetry(&channels.telemetry_receiver);
    assert!(after_dock
        .iter()
        .any(|t| t.external_id == "CH001" && t.power_output_w == -500.0));
}

#[test]
fn unknown_charger_dock_command_is_ignored() {
    let (mut app, channels) = build_app(BASE_CONFIG);

    send_dock(&channels, "CH999", Some("MECH-001"));
    app.update();
    app.update();

    assert_eq!(power_output(&app, "CH001"), -120.0);
}
