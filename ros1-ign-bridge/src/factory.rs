//! Type-erased converters.
//!
//! A [`MessageConverter`] translates one ROS 1 message type to one Ignition
//! message type and back. Callers that only know the pair by name hold it as a
//! [`ConverterHandle`] and pass messages as `&dyn Any`; the concrete type is
//! checked on every call.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::trace;

use crate::error::{BridgeError, Result};
use crate::msg::{BridgePair, IgnMessage, Ros1Message};

/// Converts messages of one (ROS 1, Ignition) type pair in both directions.
pub trait MessageConverter: Send + Sync {
    /// ROS 1 type name this converter was registered under.
    fn ros1_type_name(&self) -> &'static str;

    /// Ignition type name this converter was registered under.
    fn ign_type_name(&self) -> &'static str;

    /// Convert a ROS 1 message to its Ignition counterpart.
    ///
    /// Fails with [`BridgeError::TypeMismatch`] if `ros1` is not the ROS 1
    /// type of this pair.
    fn convert_1_to_ign(&self, ros1: &dyn Any) -> Result<Box<dyn Any + Send>>;

    /// Convert an Ignition message to its ROS 1 counterpart.
    fn convert_ign_to_1(&self, ign: &dyn Any) -> Result<Box<dyn Any + Send>>;

    /// Decode a ROS 1 wire payload, convert it and encode the result as protobuf.
    fn convert_1_to_ign_payload(&self, payload: &[u8]) -> Result<Vec<u8>>;

    /// Decode a protobuf payload, convert it and encode the result for the ROS 1 wire.
    fn convert_ign_to_1_payload(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Shared, thread-safe converter instance.
pub type ConverterHandle = Arc<dyn MessageConverter>;

impl std::fmt::Debug for dyn MessageConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageConverter")
            .field("ros1_type", &self.ros1_type_name())
            .field("ign_type", &self.ign_type_name())
            .finish()
    }
}

impl dyn MessageConverter {
    /// Statically typed front end to [`MessageConverter::convert_1_to_ign`].
    pub fn ros1_to_ign<R, I>(&self, ros1: &R) -> Result<I>
    where
        R: Ros1Message,
        I: IgnMessage,
    {
        let out = self.convert_1_to_ign(ros1)?;
        downcast(out, self.ros1_type_name(), self.ign_type_name(), I::TYPE_NAME)
    }

    /// Statically typed front end to [`MessageConverter::convert_ign_to_1`].
    pub fn ign_to_ros1<I, R>(&self, ign: &I) -> Result<R>
    where
        I: IgnMessage,
        R: Ros1Message,
    {
        let out = self.convert_ign_to_1(ign)?;
        downcast(out, self.ros1_type_name(), self.ign_type_name(), R::TYPE_NAME)
    }
}

fn downcast<T: 'static>(
    value: Box<dyn Any + Send>,
    ros1_type: &'static str,
    ign_type: &'static str,
    expected: &'static str,
) -> Result<T> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| BridgeError::TypeMismatch {
            ros1_type,
            ign_type,
            expected,
        })
}

/// Converter backed by the [`BridgePair`] implementation of `R` for `I`.
pub struct TypedConverter<R, I> {
    _marker: PhantomData<fn() -> (R, I)>,
}

impl<R, I> TypedConverter<R, I>
where
    R: BridgePair<I>,
    I: IgnMessage,
{
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Wrap a fresh converter into a shareable handle.
    pub fn handle() -> ConverterHandle {
        Arc::new(Self::new())
    }

    fn mismatch(expected: &'static str) -> BridgeError {
        BridgeError::TypeMismatch {
            ros1_type: R::TYPE_NAME,
            ign_type: I::TYPE_NAME,
            expected,
        }
    }
}

impl<R, I> Default for TypedConverter<R, I>
where
    R: BridgePair<I>,
    I: IgnMessage,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, I> MessageConverter for TypedConverter<R, I>
where
    R: BridgePair<I>,
    I: IgnMessage,
{
    fn ros1_type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    fn ign_type_name(&self) -> &'static str {
        I::TYPE_NAME
    }

    fn convert_1_to_ign(&self, ros1: &dyn Any) -> Result<Box<dyn Any + Send>> {
        let ros1 = ros1
            .downcast_ref::<R>()
            .ok_or_else(|| Self::mismatch(R::TYPE_NAME))?;
        trace!("[CONV] {} -> {}", R::TYPE_NAME, I::TYPE_NAME);
        let ign: I = <R as BridgePair<I>>::ros1_to_ign(ros1)?;
        Ok(Box::new(ign))
    }

    fn convert_ign_to_1(&self, ign: &dyn Any) -> Result<Box<dyn Any + Send>> {
        let ign = ign
            .downcast_ref::<I>()
            .ok_or_else(|| Self::mismatch(I::TYPE_NAME))?;
        trace!("[CONV] {} -> {}", I::TYPE_NAME, R::TYPE_NAME);
        let ros1: R = <R as BridgePair<I>>::ign_to_ros1(ign)?;
        Ok(Box::new(ros1))
    }

    fn convert_1_to_ign_payload(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let ros1 = <R as Ros1Message>::from_payload(payload)?;
        let ign: I = <R as BridgePair<I>>::ros1_to_ign(&ros1)?;
        let out = ign.to_payload();
        trace!(
            "[CONV] {} -> {}: {} -> {} bytes",
            R::TYPE_NAME,
            I::TYPE_NAME,
            payload.len(),
            out.len()
        );
        Ok(out)
    }

    fn convert_ign_to_1_payload(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let ign = <I as IgnMessage>::from_payload(payload)?;
        let ros1 = <R as BridgePair<I>>::ign_to_ros1(&ign)?;
        let out = ros1.to_payload()?;
        trace!(
            "[CONV] {} -> {}: {} -> {} bytes",
            I::TYPE_NAME,
            R::TYPE_NAME,
            payload.len(),
            out.len()
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ign_msg;
    use crate::ros1_msg::std_msgs::RosString;

    fn string_converter() -> ConverterHandle {
        TypedConverter::<RosString, ign_msg::StringMsg>::handle()
    }

    #[test]
    fn test_converter_names() {
        let conv = string_converter();
        assert_eq!(conv.ros1_type_name(), "std_msgs/String");
        assert_eq!(conv.ign_type_name(), "ignition.msgs.StringMsg");
    }

    #[test]
    fn test_typed_front_end() {
        let conv = string_converter();
        let msg = RosString { data: "ping".into() };
        let ign: ign_msg::StringMsg = conv.ros1_to_ign(&msg).unwrap();
        assert_eq!(ign.data, "ping");
        let back: RosString = conv.ign_to_ros1(&ign).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_wrong_input_type_rejected() {
        let conv = string_converter();
        let err = conv.convert_1_to_ign(&42u32).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TypeMismatch { expected: "std_msgs/String", .. }
        ));

        let err = conv
            .convert_ign_to_1(&RosString::default())
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TypeMismatch { expected: "ignition.msgs.StringMsg", .. }
        ));
    }

    #[test]
    fn test_wrong_output_type_rejected() {
        let conv = string_converter();
        let msg = RosString::default();
        let err = conv
            .ros1_to_ign::<RosString, ign_msg::Header>(&msg)
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::TypeMismatch { expected: "ignition.msgs.Header", .. }
        ));
    }

    #[test]
    fn test_payload_roundtrip() {
        let conv = string_converter();
        let ros1 = RosString { data: "over the wire".into() };
        let ros1_payload = ros1.to_payload().unwrap();

        let ign_payload = conv.convert_1_to_ign_payload(&ros1_payload).unwrap();
        let ign = ign_msg::StringMsg::from_payload(&ign_payload).unwrap();
        assert_eq!(ign.data, "over the wire");

        let back = conv.convert_ign_to_1_payload(&ign_payload).unwrap();
        assert_eq!(back, ros1_payload);
    }

    #[test]
    fn test_truncated_payload_rejected() {
        let conv = string_converter();
        let err = conv.convert_1_to_ign_payload(&[5, 0, 0, 0, b'a']).unwrap_err();
        assert!(matches!(err, BridgeError::Ros1Wire(_)));
    }
}
