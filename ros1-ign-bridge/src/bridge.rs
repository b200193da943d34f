//! Bridge specifications.
//!
//! A bridge names a topic, the pair of message types carried on it and the
//! direction messages flow. On the command line it is written
//! `topic@ros1_type@ign_type`, with `]` in place of the second `@` for
//! ROS 1 to Ignition only and `[` for Ignition to ROS 1 only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BridgeError, Result};
use crate::factory::ConverterHandle;
use crate::registry::ConverterRegistry;

#[derive(
    Default,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Clone,
    Copy,
    strum::EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
pub enum BridgeDirection {
    #[default]
    #[strum(serialize = "bidirectional")]
    #[serde(rename = "bidirectional")]
    Bidirectional,
    #[strum(serialize = "ros1_to_ign")]
    #[serde(rename = "ros1_to_ign")]
    Ros1ToIgn,
    #[strum(serialize = "ign_to_ros1")]
    #[serde(rename = "ign_to_ros1")]
    IgnToRos1,
}

impl BridgeDirection {
    /// Separator between the two type names in the textual form.
    pub fn delimiter(self) -> char {
        match self {
            Self::Bidirectional => '@',
            Self::Ros1ToIgn => ']',
            Self::IgnToRos1 => '[',
        }
    }

    fn from_delimiter(c: char) -> Option<Self> {
        match c {
            '@' => Some(Self::Bidirectional),
            ']' => Some(Self::Ros1ToIgn),
            '[' => Some(Self::IgnToRos1),
            _ => None,
        }
    }

    pub fn forwards_ros1_to_ign(self) -> bool {
        matches!(self, Self::Bidirectional | Self::Ros1ToIgn)
    }

    pub fn forwards_ign_to_ros1(self) -> bool {
        matches!(self, Self::Bidirectional | Self::IgnToRos1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSpec {
    pub topic: String,
    /// Empty selects the first pair registered for `ign_type`.
    #[serde(default)]
    pub ros1_type: String,
    pub ign_type: String,
    #[serde(default)]
    pub direction: BridgeDirection,
}

impl BridgeSpec {
    pub fn new(
        topic: impl Into<String>,
        ros1_type: impl Into<String>,
        ign_type: impl Into<String>,
        direction: BridgeDirection,
    ) -> Self {
        Self {
            topic: topic.into(),
            ros1_type: ros1_type.into(),
            ign_type: ign_type.into(),
            direction,
        }
    }

    /// Look up the converter for this bridge.
    pub fn resolve(&self, registry: &ConverterRegistry) -> Result<ResolvedBridge> {
        let converter = registry.resolve(&self.ros1_type, &self.ign_type)?;
        info!(
            "[BRIDGE] {} ({}): {} <-> {}",
            self.topic,
            self.direction,
            converter.ros1_type_name(),
            converter.ign_type_name()
        );
        Ok(ResolvedBridge {
            spec: self.clone(),
            converter,
        })
    }
}

impl FromStr for BridgeSpec {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &'static str| BridgeError::InvalidBridgeSpec {
            spec: s.to_string(),
            reason,
        };

        let (topic, types) = s.split_once('@').ok_or_else(|| invalid("missing '@' after topic"))?;
        if topic.is_empty() {
            return Err(invalid("empty topic"));
        }

        let (split, delim) = types
            .char_indices()
            .find(|&(_, c)| BridgeDirection::from_delimiter(c).is_some())
            .ok_or_else(|| invalid("missing separator between ROS 1 and Ignition types"))?;
        let direction =
            BridgeDirection::from_delimiter(delim).ok_or_else(|| invalid("unknown separator"))?;

        let ros1_type = &types[..split];
        let ign_type = &types[split + delim.len_utf8()..];
        if ign_type.is_empty() {
            return Err(invalid("empty Ignition type"));
        }
        if ign_type.contains(['@', '[', ']']) {
            return Err(invalid("too many separators"));
        }

        Ok(BridgeSpec::new(topic, ros1_type, ign_type, direction))
    }
}

impl fmt::Display for BridgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}{}{}",
            self.topic,
            self.ros1_type,
            self.direction.delimiter(),
            self.ign_type
        )
    }
}

/// A bridge whose converter has been resolved.
#[derive(Debug, Clone)]
pub struct ResolvedBridge {
    spec: BridgeSpec,
    converter: ConverterHandle,
}

impl ResolvedBridge {
    pub fn spec(&self) -> &BridgeSpec {
        &self.spec
    }

    pub fn converter(&self) -> &ConverterHandle {
        &self.converter
    }

    /// Convert a ROS 1 payload received on this bridge's topic.
    pub fn ros1_to_ign_payload(&self, payload: &[u8]) -> Result<Vec<u8>> {
        if !self.spec.direction.forwards_ros1_to_ign() {
            return Err(self.disabled(BridgeDirection::Ros1ToIgn));
        }
        self.converter.convert_1_to_ign_payload(payload)
    }

    /// Convert an Ignition payload received on this bridge's topic.
    pub fn ign_to_ros1_payload(&self, payload: &[u8]) -> Result<Vec<u8>> {
        if !self.spec.direction.forwards_ign_to_ros1() {
            return Err(self.disabled(BridgeDirection::IgnToRos1));
        }
        self.converter.convert_ign_to_1_payload(payload)
    }

    fn disabled(&self, direction: BridgeDirection) -> BridgeError {
        BridgeError::DirectionDisabled {
            topic: self.spec.topic.clone(),
            direction,
        }
    }
}
