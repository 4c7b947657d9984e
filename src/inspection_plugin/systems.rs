use crate::charging_plugin::ChargeTarget;
use crate::core_device_plugin::{InspectionText, PowerTrader};
use bevy::prelude::*;

/// Wattage rendering shared by composition and rewrite. Both sides must agree
/// on this format or the rewrite token will never match.
pub fn format_watts(watts: f32) -> String {
    format!("{} W", watts.round() as i64)
}

/// Rewrites the nominal wattage token in a composed inspection line to the
/// draw actually reported while the charger is idle. Charging text passes
/// through untouched; so does text where the nominal token is absent (the
/// output value is still correct, only the display stays nominal).
pub fn rewrite_idle_wattage(
    base_text: &str,
    nominal_power_w: f32,
    power_output_w: f32,
    is_charging: bool,
) -> String {
    if is_charging {
        return base_text.to_owned();
    }

    let nominal_token = format_watts(nominal_power_w);
    let live_token = format_watts(-power_output_w);
    if !base_text.contains(nominal_token.as_str()) {
        debug!(
            "Inspection text has no '{}' token to rewrite: {:?}",
            nominal_token, base_text
        );
        return base_text.to_owned();
    }

    base_text.replacen(&nominal_token, &live_token, 1)
}

pub fn compose_inspection_text_system(
    mut chargers: Query<
        (&PowerTrader, &ChargeTarget, &mut InspectionText),
        Or<(Changed<PowerTrader>, Changed<ChargeTarget>)>,
    >,
) {
    for (power, charge_target, mut text) in chargers.iter_mut() {
        let is_charging = charge_target.is_charging();
        let status = if is_charging { "charging" } else { "idle" };
        let base_text = format!(
            "Power needed: {}\nStatus: {}",
            format_watts(power.nominal_power_w),
            status
        );
        text.0 = rewrite_idle_wattage(
            &base_text,
            power.nominal_power_w,
            power.power_output_w,
            is_charging,
        );
    }
}
