use serde::{Deserialize, Serialize};

/// User configuration from SGI Settings.yaml
///
/// Contains the policy switches for the save mover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "SGI_Settings")]
    pub sgi_settings: SgiSettings,
}

/// Policy switches controlling the relocation engine.
///
/// Loaded once at startup and threaded immutably into the sweep engine;
/// there is no ambient mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SgiSettings {
    /// If true (default), sources are deleted after a successful copy.
    /// If false, saves are copied and the staged originals left in place.
    #[serde(rename = "Move Instead Of Copy", default = "default_move_instead_of_copy")]
    pub move_instead_of_copy: bool,

    /// Enables debug-level logging and the diagnostic toast after an
    /// empty sweep.
    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,

    /// Delay before the single retry when an install event moved nothing
    /// on the first pass (the archive may still be finalizing on disk).
    #[serde(rename = "Install Retry Delay MS", default = "default_install_retry_delay_ms")]
    pub install_retry_delay_ms: u64,

    /// Delay between the startup signal and the startup sweep.
    #[serde(rename = "Startup Delay MS", default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,
}

impl Default for SgiSettings {
    fn default() -> Self {
        Self {
            move_instead_of_copy: true,
            debug_mode: false,
            install_retry_delay_ms: 1500,
            startup_delay_ms: 300,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            sgi_settings: SgiSettings::default(),
        }
    }
}

fn default_move_instead_of_copy() -> bool {
    true
}

fn default_install_retry_delay_ms() -> u64 {
    1500
}

fn default_startup_delay_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = SgiSettings::default();
        assert!(settings.move_instead_of_copy);
        assert!(!settings.debug_mode);
        assert_eq!(settings.install_retry_delay_ms, 1500);
        assert_eq!(settings.startup_delay_ms, 300);
    }

    #[test]
    fn test_user_config_default() {
        let config = UserConfig::default();
        assert!(config.sgi_settings.move_instead_of_copy);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: UserConfig = serde_yaml_ng::from_str("SGI_Settings: {}").unwrap();
        assert!(config.sgi_settings.move_instead_of_copy);
        assert_eq!(config.sgi_settings.install_retry_delay_ms, 1500);
    }
}
