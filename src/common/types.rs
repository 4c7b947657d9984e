use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Component, Reflect)]
#[reflect(Component, Serialize, Deserialize)]
pub enum EDeviceKind {
    Charger,
    GridConnection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Component, Reflect, Default)]
#[reflect(Component, Serialize, Deserialize, Default)]
pub enum EOperationalStatus {
    #[default]
    Initializing,
    Online,
    Offline,
    Faulted,
}
