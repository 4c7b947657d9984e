use bevy::prelude::*;
use chrono::{DateTime, Utc};

/// Host-owned charging state of a charger. Presence of a target is the one
/// signal downstream power logic keys off.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component, Default)]
pub struct ChargeTarget {
    pub target: Option<Entity>,
    #[reflect(ignore)]
    pub last_transition: Option<DateTime<Utc>>,
}

impl ChargeTarget {
    pub fn is_charging(&self) -> bool {
        self.target.is_some()
    }
}

/// A unit that can occupy a charger. Spawned lazily the first time an unknown
/// unit ID docks.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component, Default)]
pub struct ChargeableUnit;
