use bevy::prelude::Resource;
use std::collections::HashMap;

/// The standby draw a charger template declares for its idle state.
#[derive(Debug, Clone, Copy)]
pub struct StandbyPowerConfig {
    pub standby_power_w: f32,
}

/// Per-template standby records, filled once while spawning from config and
/// shared by every instance of the template. A charger template missing here
/// is a misconfiguration surfaced at resolution time, not a silent zero.
#[derive(Resource, Default)]
pub struct StandbyPowerRegistry(pub HashMap<String, StandbyPowerConfig>);
