use bevy::prelude::*;

/// Fired whenever a device's power component has (re)computed its base
/// parameters: at spawn, and again after anything that rebuilds them. Listeners
/// must re-derive dependent state rather than trust previous output values.
#[derive(Event, Debug, Clone, Copy)]
pub struct PowerVarsInitializedEvent {
    pub device: Entity,
}
