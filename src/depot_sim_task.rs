use crate::external_comms_plugin::{ExternalDockCommand, ExternalPowerTelemetry};
use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;
use tracing::{info, warn};

fn drain_telemetry(telemetry_receiver: &Receiver<ExternalPowerTelemetry>) {
    while let Ok(telemetry) = telemetry_receiver.try_recv() {
        info!(
            "Depot sim: telemetry '{}': {:.0} W",
            telemetry.external_id, telemetry.power_output_w
        );
    }
}

/// Stand-in for depot activity: cycles every configured charger through a
/// dock / undock duty cycle and logs the telemetry coming back. Runs until
/// the app side drops its channel ends.
pub fn run_depot_activity_sim(
    charger_ids: Vec<String>,
    dock_sender: Sender<ExternalDockCommand>,
    telemetry_receiver: Receiver<ExternalPowerTelemetry>,
) {
    if charger_ids.is_empty() {
        info!("Depot sim: no chargers configured, nothing to simulate.");
        return;
    }
    info!(
        "Depot activity simulator started for {} charger(s).",
        charger_ids.len()
    );

    let mut cycle: u32 = 0;
    loop {
        cycle += 1;

        for (slot, charger_id) in charger_ids.iter().enumerate() {
            let unit_id = format!("MECH-{:03}", slot + 1);
            if dock_sender
                .send(ExternalDockCommand {
                    charger_external_id: charger_id.clone(),
                    unit_external_id: Some(unit_id.clone()),
                })
                .is_err()
            {
                warn!("Depot sim: dock channel closed, stopping.");
                return;
            }
            info!("Depot sim: sent dock of '{}' at '{}'", unit_id, charger_id);
        }

        std::thread::sleep(Duration::from_secs(10));
        drain_telemetry(&telemetry_receiver);

        for charger_id in &charger_ids {
            if dock_sender
                .send(ExternalDockCommand {
                    charger_external_id: charger_id.clone(),
                    unit_external_id: None,
                })
                .is_err()
            {
                warn!("Depot sim: dock channel closed, stopping.");
                return;
            }
            info!("Depot sim: sent undock at '{}'", charger_id);
        }

        std::thread::sleep(Duration::from_secs(10));
        drain_telemetry(&telemetry_receiver);

        info!("Depot sim: completed duty cycle {}", cycle);
    }
}
