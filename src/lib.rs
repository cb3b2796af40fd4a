// SGI - Save Game Installer
//
// This is the library crate containing the discovery-and-relocation engine.
// The binary crate (main.rs) wires host lifecycle events to the engine.

pub mod config;
pub mod host;
pub mod logging;
pub mod models;
pub mod paths;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use host::{HostEvent, LogNotifier, Notifier, NotifyKind};
pub use models::{SgiSettings, Title, UserConfig};
pub use paths::{EnvPathProvider, HostPathProvider, PathRole};
pub use report::RunLog;
pub use services::SweepEngine;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
