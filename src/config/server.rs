//! Server settings read from the environment.

use std::path::PathBuf;

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "PAYROLL_ADDR";

/// Environment variable holding the payroll rules path.
pub const CONFIG_VAR: &str = "PAYROLL_CONFIG";

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the server binds to.
    pub addr: String,
    /// Path of the payroll rules YAML file.
    pub config_path: PathBuf,
    /// Service version.
    pub version: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            config_path: PathBuf::from("./config/payroll.yaml"),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ServerSettings {
    /// Reads the settings from `PAYROLL_ADDR` and `PAYROLL_CONFIG`, falling
    /// back to the defaults for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(addr) = lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            settings.addr = addr;
        }

        if let Some(path) = lookup(CONFIG_VAR).filter(|v| !v.trim().is_empty()) {
            settings.config_path = PathBuf::from(path);
        }

        settings
    }
}
