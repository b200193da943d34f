//! Bridge configuration files.
//!
//! ```json
//! {
//!   "bridges": [
//!     { "topic": "/chatter", "ros1_type": "std_msgs/String", "ign_type": "ignition.msgs.StringMsg" },
//!     { "topic": "/imu", "ign_type": "ignition.msgs.IMU", "direction": "ign_to_ros1" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bridge::{BridgeSpec, ResolvedBridge};
use crate::error::{BridgeError, Result};
use crate::registry::ConverterRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    #[serde(default)]
    pub bridges: Vec<BridgeSpec>,
}

impl BridgeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        debug!("[CFG] Loaded {} bridge(s)", config.bridges.len());
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BridgeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("[CFG] Reading {}", path.display());
        Self::from_json_str(&json)
    }

    /// Build a configuration from `topic@ros1_type@ign_type` arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let bridges = args
            .iter()
            .map(|arg| arg.as_ref().parse())
            .collect::<Result<Vec<BridgeSpec>>>()?;
        Ok(Self { bridges })
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve every bridge, stopping at the first one without a converter.
    pub fn resolve_all(&self, registry: &ConverterRegistry) -> Result<Vec<ResolvedBridge>> {
        self.bridges.iter().map(|spec| spec.resolve(registry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeDirection;
    use crate::builtin_registry;

    const CONFIG: &str = r#"{
        "bridges": [
            { "topic": "/chatter", "ros1_type": "std_msgs/String", "ign_type": "ignition.msgs.StringMsg" },
            { "topic": "/imu", "ign_type": "ignition.msgs.IMU", "direction": "ign_to_ros1" }
        ]
    }"#;

    #[test]
    fn test_parse_config() {
        let config = BridgeConfig::from_json_str(CONFIG).unwrap();
        assert_eq!(config.bridges.len(), 2);
        assert_eq!(config.bridges[0].direction, BridgeDirection::Bidirectional);
        assert_eq!(config.bridges[1].ros1_type, "");
        assert_eq!(config.bridges[1].direction, BridgeDirection::IgnToRos1);
    }

    #[test]
    fn test_resolve_all() {
        let config = BridgeConfig::from_json_str(CONFIG).unwrap();
        let bridges = config.resolve_all(builtin_registry()).unwrap();
        assert_eq!(bridges[1].converter().ros1_type_name(), "sensor_msgs/Imu");
    }

    #[test]
    fn test_resolve_all_stops_on_unknown_pair() {
        let config = BridgeConfig::from_args(&[
            "/chatter@std_msgs/String@ignition.msgs.StringMsg",
            "/odd@std_msgs/String@ignition.msgs.Header",
        ])
        .unwrap();
        assert!(matches!(
            config.resolve_all(builtin_registry()),
            Err(BridgeError::UnrecognizedPair { .. })
        ));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            BridgeConfig::from_json_str(r#"{ "bridges": [ { "topic": "/a" } ] }"#),
            Err(BridgeError::Config(_))
        ));
        assert!(matches!(
            BridgeConfig::from_json_str(r#"{ "bridge": [] }"#),
            Err(BridgeError::Config(_))
        ));
        assert_eq!(BridgeConfig::from_json_str("{}").unwrap(), BridgeConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = BridgeConfig::from_path("/nonexistent/bridges.json").unwrap_err();
        assert!(matches!(err, BridgeError::ConfigRead { .. }));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BridgeConfig::from_json_str(CONFIG).unwrap();
        let json = config.to_json_string().unwrap();
        assert_eq!(BridgeConfig::from_json_str(&json).unwrap(), config);
    }
}
