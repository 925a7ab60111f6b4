//! Configuration for the event listener wiring.
//!
//! The listen table normally comes from [`app::LISTEN`](crate::app::LISTEN),
//! but it can also be loaded from TOML so deployments can rewire listeners
//! without a rebuild.
//!
//! # Example
//!
//! ```rust
//! use eventwire::config::WiringConfig;
//!
//! // Use the application's table
//! let config = WiringConfig::default();
//! assert!(config.listen.contains_key("App\\Events\\OrderShipped"));
//!
//! // Or load one
//! let config = WiringConfig::from_toml_str(r#"
//!     [listen]
//!     "App\\Events\\OrderShipped" = ["App\\Listeners\\SendShipmentNotification"]
//! "#)?;
//! assert_eq!(config.listen.len(), 1);
//! # Ok::<(), eventwire::WiringError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::WiringError;
use crate::app;
use crate::events::{EventName, ListenMap, ListenerName};

/// Main configuration struct for the wiring.
///
/// Listener lists are not checked for emptiness here. An event with no
/// listeners is rejected when the provider boots, so the error names the
/// offending event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringConfig {
    /// Event to listener bindings registered before the boot hook runs.
    #[serde(default)]
    pub listen: ListenMap,
}

impl Default for WiringConfig {
    fn default() -> Self {
        let listen = app::LISTEN
            .iter()
            .filter_map(|(event, listeners)| {
                let event = EventName::new(*event).ok()?;
                let listeners = listeners
                    .iter()
                    .map(|l| ListenerName::new(*l))
                    .collect::<Result<Vec<_>, _>>()
                    .ok()?;
                Some((event, listeners))
            })
            .collect();

        Self { listen }
    }
}

impl WiringConfig {
    /// Creates a configuration with the application's listen table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no bindings.
    pub fn empty() -> Self {
        Self {
            listen: ListenMap::new(),
        }
    }

    /// Parses a TOML document. Table order is preserved.
    pub fn from_toml_str(source: &str) -> Result<Self, WiringError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WiringError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WiringError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            target: "eventwire",
            "msg=\"loading wiring configuration\" path={}",
            path.display()
        );

        Self::from_toml_str(&source)
    }
}
