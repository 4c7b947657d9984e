use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct ExternalId(pub String);

#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub make: String,
    pub model: String,
}

/// Template ID the device was spawned from. Standby power is configured per
/// template, so this is the key into the standby registry.
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct DeviceTypeId(pub String);

/// The power component of a device: nominal draw from config, signed live
/// output. Negative output means the device is consuming.
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component, Serialize, Deserialize)]
pub struct PowerTrader {
    pub nominal_power_w: f32,
    pub power_output_w: f32,
}

impl PowerTrader {
    /// A fresh power component reports full nominal draw until the standby
    /// resolver re-syncs it.
    pub fn new(nominal_power_w: f32) -> Self {
        Self {
            nominal_power_w,
            power_output_w: -nominal_power_w,
        }
    }
}

/// Human-readable inspection line for the device, recomposed whenever its
/// power state or charging state changes.
#[derive(Component, Debug, Clone, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component, Default, Serialize, Deserialize)]
pub struct InspectionText(pub String);

/// Declared by a template whose power draw is managed by a peer system.
/// Only honored while the matching peer module is actually loaded.
#[derive(Component, Debug, Clone, Copy, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component, Default, Serialize, Deserialize)]
pub struct ExternallyManagedPower;
