use crate::common::id_map::ExternalIdMap;
use bevy::prelude::*;

pub mod config;
pub mod resources;
pub mod systems;

pub use resources::SiteConfig;
pub use systems::spawn_devices_from_config_system;

pub struct DeviceTemplatePlugin;

impl Plugin for DeviceTemplatePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ExternalIdMap::default())
            .add_systems(Startup, spawn_devices_from_config_system);
    }
}
