//! Field-by-field conversion for the builtin message pairs.
//!
//! Each pair implements [`BridgePair`](crate::msg::BridgePair) on its ROS 1
//! type. Conversion failures are reported as [`ConversionError`] and reach the
//! caller unchanged through the converter handle.

mod geometry_msgs;
mod sensor_msgs;
mod std_msgs;

pub use sensor_msgs::ImageEncoding;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("timestamp {sec}s {nsec}ns is not representable as a ROS 1 time")]
    TimeOutOfRange { sec: i64, nsec: i64 },

    #[error("header entry {key:?} has invalid value {value:?}")]
    InvalidHeaderValue { key: String, value: String },

    #[error("unsupported image encoding {0:?}")]
    UnsupportedEncoding(String),

    #[error("unsupported pixel format {0}")]
    UnsupportedPixelFormat(i32),

    #[error("point cloud has no FLOAT32 field named {0:?}")]
    MissingPointField(&'static str),

    #[error("malformed point cloud: {0}")]
    MalformedPointCloud(String),
}
