//! Builtin conversion pairs and the process-wide registry holding them.

use std::sync::OnceLock;

use crate::Builder;
use crate::error::Result;
use crate::factory::ConverterHandle;
use crate::ign_msg;
use crate::registry::{ConverterRegistry, RegistryBuilder};
use crate::ros1_msg::geometry_msgs::{Quaternion, Vector3};
use crate::ros1_msg::sensor_msgs::{
    FluidPressure, Image, Imu, LaserScan, MagneticField, PointCloud2,
};
use crate::ros1_msg::std_msgs::{Header, RosString};

/// Registration table for every pair shipped with the bridge.
///
/// Order matters for wildcard lookups; new pairs go at the end.
pub fn builtin_table() -> RegistryBuilder {
    ConverterRegistry::builder()
        .register::<Header, ign_msg::Header>()
        .register::<RosString, ign_msg::StringMsg>()
        .register::<Quaternion, ign_msg::Quaternion>()
        .register::<Vector3, ign_msg::Vector3d>()
        .register::<FluidPressure, ign_msg::FluidPressure>()
        .register::<Imu, ign_msg::Imu>()
        .register::<Image, ign_msg::Image>()
        .register::<LaserScan, ign_msg::LaserScan>()
        .register::<MagneticField, ign_msg::Magnetometer>()
        .register::<PointCloud2, ign_msg::PointCloud>()
}

/// Get the builtin registry (lazy initialized).
///
/// # Panics
///
/// Panics if the builtin table fails validation, which the crate tests rule out.
pub fn builtin_registry() -> &'static ConverterRegistry {
    static REGISTRY: OnceLock<ConverterRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        builtin_table()
            .build()
            .expect("builtin conversion table is invalid")
    })
}

/// Resolve a converter from the builtin registry.
///
/// `ros1_type` may be empty to select the first pair registered for
/// `ign_type`.
pub fn get_factory(ros1_type: &str, ign_type: &str) -> Result<ConverterHandle> {
    builtin_registry().resolve(ros1_type, ign_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_builds() {
        let reg = builtin_table().build().unwrap();
        assert_eq!(reg.len(), 10);
    }

    #[test]
    fn test_builtin_registry_is_shared() {
        assert!(std::ptr::eq(builtin_registry(), builtin_registry()));
    }

    #[test]
    fn test_get_factory_uses_entry_names() {
        let conv = get_factory("", "ignition.msgs.Magnetometer").unwrap();
        assert_eq!(conv.ros1_type_name(), "sensor_msgs/MagneticField");
        assert_eq!(conv.ign_type_name(), "ignition.msgs.Magnetometer");
    }
}
