//! ROS 1 wire format serialization for the bridge.
//!
//! The ROS 1 format is little-endian with no alignment padding. Strings and
//! variable-length arrays carry a `u32` length prefix, fixed-size arrays do not.

pub mod deserializer;
pub mod error;
pub mod serializer;

pub use deserializer::{Ros1Deserializer, from_bytes, from_slice};
pub use error::{Error, Result};
pub use serializer::{Ros1Serializer, to_vec, to_vec_reuse};
