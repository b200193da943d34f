use std::marker::PhantomData;

use prost::Message as ProstMessage;
use serde::{Serialize, de::DeserializeOwned};

use crate::Result;
use crate::convert::ConversionError;

pub trait WireSerializer {
    type Input;
    fn serialize(input: &Self::Input) -> Result<Vec<u8>>;
}

pub trait WireDeserializer {
    type Output;
    fn deserialize(payload: &[u8]) -> Result<Self::Output>;
}

/// A message type on the ROS 1 side of the bridge.
pub trait Ros1Message: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Fully qualified ROS 1 type name, e.g. `std_msgs/Header`.
    const TYPE_NAME: &'static str;

    fn to_payload(&self) -> Result<Vec<u8>> {
        Ros1Serdes::<Self>::serialize(self)
    }

    fn from_payload(payload: &[u8]) -> Result<Self> {
        Ros1Serdes::<Self>::deserialize(payload)
    }
}

/// A message type on the Ignition Transport side of the bridge.
pub trait IgnMessage: ProstMessage + Default + Send + Sync + 'static {
    /// Fully qualified protobuf type name, e.g. `ignition.msgs.Header`.
    const TYPE_NAME: &'static str;

    fn to_payload(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn from_payload(payload: &[u8]) -> Result<Self> {
        ProtobufSerdes::<Self>::deserialize(payload)
    }
}

/// Field-level conversion between a ROS 1 message and its Ignition counterpart.
///
/// Implemented on the ROS 1 type, once per supported pair. A pair can only be
/// registered with a [`ConverterRegistry`](crate::ConverterRegistry) if this
/// trait is implemented for it.
pub trait BridgePair<I: IgnMessage>: Ros1Message + Sized {
    fn ros1_to_ign(&self) -> std::result::Result<I, ConversionError>;

    fn ign_to_ros1(ign: &I) -> std::result::Result<Self, ConversionError>;
}

// ROS 1 wire

pub struct Ros1Serdes<T>(PhantomData<T>);

impl<T> WireSerializer for Ros1Serdes<T>
where
    T: Serialize,
{
    type Input = T;

    fn serialize(input: &T) -> Result<Vec<u8>> {
        Ok(ros1_wire::to_vec(input)?)
    }
}

impl<T> WireDeserializer for Ros1Serdes<T>
where
    T: DeserializeOwned,
{
    type Output = T;

    fn deserialize(payload: &[u8]) -> Result<T> {
        Ok(ros1_wire::from_slice(payload)?)
    }
}

// Protobuf

pub struct ProtobufSerdes<T>(PhantomData<T>);

impl<T> WireSerializer for ProtobufSerdes<T>
where
    T: ProstMessage,
{
    type Input = T;

    fn serialize(input: &T) -> Result<Vec<u8>> {
        Ok(input.encode_to_vec())
    }
}

impl<T> WireDeserializer for ProtobufSerdes<T>
where
    T: ProstMessage + Default,
{
    type Output = T;

    fn deserialize(payload: &[u8]) -> Result<T> {
        Ok(T::decode(payload)?)
    }
}

#[macro_export]
macro_rules! impl_ros1_message {
    ($($type:ty => $name:literal),* $(,)?) => {
        $(
            impl $crate::msg::Ros1Message for $type {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_ign_message {
    ($($type:ty => $name:literal),* $(,)?) => {
        $(
            impl $crate::msg::IgnMessage for $type {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}
