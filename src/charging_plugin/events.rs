use bevy::prelude::*;

/// A unit arriving at (`Some`) or leaving (`None`) a charger.
#[derive(Event, Debug, Clone)]
pub struct DockCommandEvent {
    pub charger_external_id: String,
    pub unit_external_id: Option<String>,
}

/// Emitted every time the charging state machine runs a start or stop, with
/// the target presence it settled on. Handlers must tolerate repeats of the
/// same state.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChargingTransitionEvent {
    pub charger: Entity,
    pub is_charging: bool,
}
