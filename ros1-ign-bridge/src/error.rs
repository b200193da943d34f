//! Error types for converter resolution and message conversion

use std::path::PathBuf;

use crate::bridge::BridgeDirection;
use crate::convert::ConversionError;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no conversion available for pair ({ros1_type:?}, {ign_type:?})")]
    UnrecognizedPair { ros1_type: String, ign_type: String },

    #[error("pair ({ros1_type}, {ign_type}) is registered more than once")]
    DuplicatePair {
        ros1_type: &'static str,
        ign_type: &'static str,
    },

    #[error("registered names ({requested_ros1}, {requested_ign}) do not match bound types ({bound_ros1}, {bound_ign})")]
    MismatchedBinding {
        requested_ros1: String,
        requested_ign: String,
        bound_ros1: &'static str,
        bound_ign: &'static str,
    },

    #[error("converter {ros1_type} <-> {ign_type} expected a value of type {expected}")]
    TypeMismatch {
        ros1_type: &'static str,
        ign_type: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("ROS 1 wire error: {0}")]
    Ros1Wire(#[from] ros1_wire::Error),

    #[error("ignition payload decode error: {0}")]
    IgnDecode(#[from] prost::DecodeError),

    #[error("invalid bridge specification {spec:?}: {reason}")]
    InvalidBridgeSpec { spec: String, reason: &'static str },

    #[error("bridge on {topic} does not forward in direction {direction}")]
    DirectionDisabled {
        topic: String,
        direction: BridgeDirection,
    },

    #[error("invalid bridge configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
