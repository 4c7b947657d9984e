use bevy::prelude::Resource;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::info;

/// Display name the supercharger peer mod registers under.
pub const SUPERCHARGER_MOD_NAME: &str = "MechSupercharger";
/// Package identifier prefix shared by every release of that mod.
pub const SUPERCHARGER_PACKAGE_PREFIX: &str = "rselbo.mechsupercharger";

/// One entry of the host's loaded-module list, as reported at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PeerModule {
    pub name: String,
    pub package_id: String,
}

pub fn supercharger_loaded(peer_modules: &[PeerModule]) -> bool {
    peer_modules.iter().any(|module| {
        module.name == SUPERCHARGER_MOD_NAME
            && module.package_id.starts_with(SUPERCHARGER_PACKAGE_PREFIX)
    })
}

/// Memoizes the peer-module scan: the first `resolve` fixes the answer for
/// the lifetime of the cache, later calls return it unchanged.
#[derive(Debug, Default)]
pub struct CompatCache {
    resolved: OnceLock<bool>,
}

impl CompatCache {
    pub const fn new() -> Self {
        Self {
            resolved: OnceLock::new(),
        }
    }

    pub fn resolve(&self, peer_modules: &[PeerModule]) -> bool {
        *self.resolved.get_or_init(|| {
            let loaded = supercharger_loaded(peer_modules);
            if loaded {
                info!("Supercharger peer module detected; its chargers manage their own power draw");
            }
            loaded
        })
    }
}

/// Resolved before the app runs, read-only afterwards.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SuperchargerCompat {
    pub active: bool,
}
