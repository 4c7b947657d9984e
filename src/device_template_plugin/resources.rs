use crate::error::AppError;
use crate::standby_power_plugin::compat::PeerModule;
use bevy::prelude::Resource;
use serde::Deserialize;
use std::collections::HashMap;

use super::config::{DeviceInstance, DeviceTemplate};

#[derive(Debug, Deserialize, Resource, Clone)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    pub device_templates: HashMap<String, DeviceTemplate>,
    pub devices: Vec<DeviceInstance>,
    /// Peer modules the host has loaded alongside this one, as reported at
    /// startup. Scanned once for compatibility handling.
    #[serde(default)]
    pub peer_modules: Vec<PeerModule>,
}

impl SiteConfig {
    pub fn from_json(config_json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(config_json)?)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, AppError> {
        let config_json = std::fs::read_to_string(path)?;
        Self::from_json(&config_json)
    }
}
