use bevy::prelude::*;
use std::collections::HashMap;

/// Lookup from config-assigned external ID → ECS Entity. Devices are entered
/// at spawn time, chargeable units as they first dock.
#[derive(Resource, Default)]
pub struct ExternalIdMap(pub HashMap<String, Entity>);

impl ExternalIdMap {
    pub fn resolve(&self, external_id: &str) -> Option<Entity> {
        self.0.get(external_id).copied()
    }
}
