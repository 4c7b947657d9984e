// Declare all modules that make up the library
pub mod common;
pub mod error;
pub mod app_setup;
pub mod depot_sim_task;

pub mod core_device_plugin;
pub mod device_template_plugin;
pub mod charging_plugin;
pub mod standby_power_plugin;
pub mod inspection_plugin;
pub mod external_comms_plugin;

pub use common::types;
