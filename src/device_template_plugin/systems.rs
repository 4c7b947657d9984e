use crate::charging_plugin::ChargeTarget;
use crate::common::id_map::ExternalIdMap;
use crate::common::types::{EDeviceKind, EOperationalStatus};
use crate::core_device_plugin::{
    DeviceInfo, DeviceTypeId, ExternalId, ExternallyManagedPower, InspectionText,
    PowerVarsInitializedEvent, PowerTrader,
};
use crate::device_template_plugin::SiteConfig;
use crate::standby_power_plugin::{StandbyPowerConfig, StandbyPowerRegistry};
use bevy::prelude::*;

use super::config::ComponentConfig;

fn apply_component(commands: &mut Commands, entity: Entity, cfg: &ComponentConfig) {
    match cfg {
        ComponentConfig::DeviceInfo { make, model } => {
            commands.entity(entity).insert(DeviceInfo {
                make: make.clone(),
                model: model.clone(),
            });
        }
        ComponentConfig::PowerTrader { nominal_power_w } => {
            commands.entity(entity).insert(PowerTrader::new(*nominal_power_w));
        }
        ComponentConfig::ExternallyManagedPower => {
            commands.entity(entity).insert(ExternallyManagedPower);
        }
        // Template-level extensions carry no entity component
        _ => (),
    }
}

pub fn spawn_devices_from_config_system(
    mut commands: Commands,
    mut id_map: ResMut<ExternalIdMap>,
    config: Res<SiteConfig>,
    mut standby_registry: ResMut<StandbyPowerRegistry>,
    mut init_events: EventWriter<PowerVarsInitializedEvent>,
) {
    // Standby draw is a property of the template, shared by every instance
    // spawned from it.
    for (template_id, template) in &config.device_templates {
        for cfg in &template.component_configs {
            if let ComponentConfig::StandbyPower { standby_power_w } = cfg {
                standby_registry.0.insert(
                    template_id.clone(),
                    StandbyPowerConfig {
                        standby_power_w: *standby_power_w,
                    },
                );
            }
        }
    }

    for instance in &config.devices {
        let template = match config.device_templates.get(&instance.template_id) {
            Some(t) => t,
            None => {
                warn!("Missing template '{}'", instance.template_id);
                continue;
            }
        };

        let entity = commands
            .spawn_empty()
            .insert((
                ExternalId(instance.external_id.clone()),
                DeviceTypeId(instance.template_id.clone()),
                template.device_kind,
                EOperationalStatus::default(),
            ))
            .id();

        // record the mapping once:
        id_map.0.insert(instance.external_id.clone(), entity);

        // Charger-specific defaults
        if template.device_kind == EDeviceKind::Charger {
            commands
                .entity(entity)
                .insert((ChargeTarget::default(), InspectionText::default()));
        }

        // Apply both template and instance components
        for cfg in template.component_configs.iter().chain(&instance.instance_components) {
            apply_component(&mut commands, entity, cfg);
        }

        init_events.write(PowerVarsInitializedEvent { device: entity });
        info!("Spawned '{}'", instance.external_id);
    }
}
