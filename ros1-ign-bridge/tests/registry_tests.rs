use std::sync::Arc;

use ros1_ign_bridge::convert::ConversionError;
use ros1_ign_bridge::msg::BridgePair;
use ros1_ign_bridge::{
    BridgeError, Builder, ConverterRegistry, WILDCARD, builtin_registry, get_factory,
    impl_ign_message, impl_ros1_message,
};
use serde::{Deserialize, Serialize};

const BUILTIN_PAIRS: [(&str, &str); 10] = [
    ("std_msgs/Header", "ignition.msgs.Header"),
    ("std_msgs/String", "ignition.msgs.StringMsg"),
    ("geometry_msgs/Quaternion", "ignition.msgs.Quaternion"),
    ("geometry_msgs/Vector3", "ignition.msgs.Vector3d"),
    ("sensor_msgs/FluidPressure", "ignition.msgs.FluidPressure"),
    ("sensor_msgs/Imu", "ignition.msgs.IMU"),
    ("sensor_msgs/Image", "ignition.msgs.Image"),
    ("sensor_msgs/LaserScan", "ignition.msgs.LaserScan"),
    ("sensor_msgs/MagneticField", "ignition.msgs.Magnetometer"),
    ("sensor_msgs/PointCloud2", "ignition.msgs.PointCloud"),
];

// Minimal pair with its own names, independent of the builtin table.

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct TypeHeader {
    stamp: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
struct MsgHeader {
    #[prost(int64, tag = "1")]
    stamp: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct OtherHeader {
    stamp: u32,
}

impl_ros1_message! {
    TypeHeader => "TypeHeader",
    OtherHeader => "OtherHeader",
}

impl_ign_message! {
    MsgHeader => "MsgHeader",
}

impl BridgePair<MsgHeader> for TypeHeader {
    fn ros1_to_ign(&self) -> Result<MsgHeader, ConversionError> {
        Ok(MsgHeader {
            stamp: i64::from(self.stamp),
        })
    }

    fn ign_to_ros1(ign: &MsgHeader) -> Result<Self, ConversionError> {
        let stamp = u32::try_from(ign.stamp).map_err(|_| ConversionError::TimeOutOfRange {
            sec: ign.stamp,
            nsec: 0,
        })?;
        Ok(TypeHeader { stamp })
    }
}

impl BridgePair<MsgHeader> for OtherHeader {
    fn ros1_to_ign(&self) -> Result<MsgHeader, ConversionError> {
        Ok(MsgHeader {
            stamp: i64::from(self.stamp) * 2,
        })
    }

    fn ign_to_ros1(ign: &MsgHeader) -> Result<Self, ConversionError> {
        Ok(OtherHeader {
            stamp: (ign.stamp / 2) as u32,
        })
    }
}

fn header_registry() -> ConverterRegistry {
    ConverterRegistry::builder()
        .register::<TypeHeader, MsgHeader>()
        .register::<OtherHeader, MsgHeader>()
        .build()
        .unwrap()
}

#[test]
fn test_every_builtin_pair_resolves() {
    for (ros1, ign) in BUILTIN_PAIRS {
        let conv = get_factory(ros1, ign).unwrap();
        assert_eq!(conv.ros1_type_name(), ros1);
        assert_eq!(conv.ign_type_name(), ign);
    }
    assert_eq!(builtin_registry().len(), BUILTIN_PAIRS.len());
}

#[test]
fn test_builtin_declaration_order() {
    let pairs: Vec<_> = builtin_registry()
        .entries()
        .iter()
        .map(|e| (e.ros1_type(), e.ign_type()))
        .collect();
    assert_eq!(pairs, BUILTIN_PAIRS);
}

#[test]
fn test_unregistered_pairs_fail() {
    for (ros1, ign) in [
        ("std_msgs/Header", "ignition.msgs.StringMsg"),
        ("UnknownType", "ignition.msgs.Header"),
        ("SomeConcreteA", "ignition.msgs.Header"),
        ("std_msgs/Header", "ignition.msgs.Unknown"),
        (WILDCARD, "ignition.msgs.Unknown"),
        ("sensor_msgs/FluidPressure", "ignition.msgs.Fluid"),
    ] {
        match get_factory(ros1, ign) {
            Err(BridgeError::UnrecognizedPair { ros1_type, ign_type }) => {
                assert_eq!((ros1_type.as_str(), ign_type.as_str()), (ros1, ign));
            }
            other => panic!("({ros1}, {ign}) resolved unexpectedly: {other:?}"),
        }
    }
}

#[test]
fn test_wildcard_resolves_every_ignition_type() {
    for (ros1, ign) in BUILTIN_PAIRS {
        let conv = get_factory(WILDCARD, ign).unwrap();
        assert_eq!(conv.ros1_type_name(), ros1);
    }
}

#[test]
fn test_wildcard_picks_first_declared_entry() {
    let reg = header_registry();
    let conv = reg.resolve(WILDCARD, "MsgHeader").unwrap();
    assert_eq!(conv.ros1_type_name(), "TypeHeader");

    let conv = reg.resolve("OtherHeader", "MsgHeader").unwrap();
    assert_eq!(conv.ros1_type_name(), "OtherHeader");
}

#[test]
fn test_repeated_resolves_are_equivalent() {
    let a = get_factory("sensor_msgs/Imu", "ignition.msgs.IMU").unwrap();
    let b = get_factory("sensor_msgs/Imu", "ignition.msgs.IMU").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a.ros1_type_name(), b.ros1_type_name());
    assert_eq!(a.ign_type_name(), b.ign_type_name());
}

#[test]
fn test_header_scenario_timestamp() {
    let reg = header_registry();
    let conv = reg.resolve("TypeHeader", "MsgHeader").unwrap();

    let ign: MsgHeader = conv.ros1_to_ign(&TypeHeader { stamp: 42 }).unwrap();
    assert_eq!(ign.stamp, 42);

    let back: TypeHeader = conv.ign_to_ros1(&MsgHeader { stamp: 42 }).unwrap();
    assert_eq!(back, TypeHeader { stamp: 42 });

    assert!(matches!(
        reg.resolve("UnknownType", "MsgHeader"),
        Err(BridgeError::UnrecognizedPair { .. })
    ));
}

#[test]
fn test_conversion_errors_pass_through() {
    let conv = header_registry().resolve("TypeHeader", "MsgHeader").unwrap();
    let err = conv
        .ign_to_ros1::<MsgHeader, TypeHeader>(&MsgHeader { stamp: -1 })
        .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Conversion(ConversionError::TimeOutOfRange { sec: -1, nsec: 0 })
    ));
}

#[test]
fn test_opaque_value_of_wrong_type() {
    let conv = header_registry().resolve("TypeHeader", "MsgHeader").unwrap();
    let err = conv.convert_1_to_ign(&OtherHeader { stamp: 1 }).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::TypeMismatch {
            ros1_type: "TypeHeader",
            ign_type: "MsgHeader",
            expected: "TypeHeader"
        }
    ));
}

#[test]
fn test_registry_shared_across_threads() {
    let handles: Vec<_> = BUILTIN_PAIRS
        .into_iter()
        .map(|(ros1, ign)| {
            std::thread::spawn(move || get_factory(ros1, ign).map(|c| c.ign_type_name()))
        })
        .collect();
    for (handle, (_, ign)) in handles.into_iter().zip(BUILTIN_PAIRS) {
        assert_eq!(handle.join().unwrap().unwrap(), ign);
    }
}
