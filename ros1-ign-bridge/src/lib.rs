//! Bidirectional message conversion between ROS 1 and Ignition Transport.
//!
//! Converters are resolved by a pair of type names and returned as type-erased
//! [`ConverterHandle`]s, while the field mapping for each pair is implemented
//! statically through [`msg::BridgePair`].

pub mod bridge;
pub mod builtin;
pub mod config;
pub mod convert;
pub mod error;
pub mod factory;
pub mod ign_msg;
pub mod msg;
pub mod registry;
pub mod ros1_msg;

pub use builtin::{builtin_registry, get_factory};
pub use error::{BridgeError, Result};
pub use factory::{ConverterHandle, MessageConverter, TypedConverter};
pub use registry::{ConverterRegistry, RegistryBuilder, WILDCARD};

pub trait Builder {
    type Output;
    fn build(self) -> Result<Self::Output>;
}
