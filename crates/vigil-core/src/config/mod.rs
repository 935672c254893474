//! Poller configuration.
//!
//! Engine tunables an embedding dashboard may override via TOML. Missing
//! files fall back to defaults; parse failures and invalid values are
//! errors. The backoff curve and fingerprint algorithm are intentionally
//! not configurable.

pub mod errors;

pub use errors::ConfigError;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Activity codes recognized as "the machine finished its first boot".
const DEFAULT_BOOT_SIGNAL_CODES: &[&str] = &["wakeup", "guest_agent_ready"];

/// Tunables for the poll engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Send a desktop notification when an unfocused session terminates.
    pub notifications_enabled: bool,
    /// Activity codes that reveal the first-boot hint.
    pub boot_signal_codes: Vec<String>,
    /// Initial value of the per-session "show all activities" filter.
    pub default_show_all: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            boot_signal_codes: DEFAULT_BOOT_SIGNAL_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            default_show_all: false,
        }
    }
}

impl PollerConfig {
    /// Parse and validate a TOML document.
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: PollerConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    event = "core.config.file_missing",
                    path = %path.display(),
                );
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::IoError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };
        Self::load_from_str(&content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for code in &self.boot_signal_codes {
            if code.trim().is_empty() {
                return Err(ConfigError::InvalidBootSignalCode { code: code.clone() });
            }
        }
        Ok(())
    }

    /// Whether `code` names a recognized boot signal.
    pub fn is_boot_signal(&self, code: &str) -> bool {
        self.boot_signal_codes.iter().any(|c| c == code)
    }
}
