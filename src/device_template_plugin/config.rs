// a strongly typed configuration schema for device templates and instances

use crate::common::types::EDeviceKind;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct DeviceTemplate {
    pub device_kind: EDeviceKind,
    #[serde(rename = "components")]
    pub component_configs: Vec<ComponentConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct DeviceInstance {
    pub external_id: String,
    pub template_id: String,
    #[serde(default)]
    pub instance_components: Vec<ComponentConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentConfig {
    DeviceInfo { make: String, model: String },
    PowerTrader { nominal_power_w: f32 },
    /// Per-template extension: the draw a charger reports while no unit is
    /// docked. Consumed into the standby registry, never an entity component.
    StandbyPower { standby_power_w: f32 },
    ExternallyManagedPower,
}
