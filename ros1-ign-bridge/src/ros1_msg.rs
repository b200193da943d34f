//! ROS 1 message definitions.
//!
//! Field order matches the `.msg` definitions since the ROS 1 wire format is
//! purely positional.

use crate::impl_ros1_message;

pub mod std_msgs {
    use serde::{Deserialize, Serialize};

    /// ROS 1 `time` primitive.
    #[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Time {
        pub secs: u32,
        pub nsecs: u32,
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
    pub struct Header {
        pub seq: u32,
        pub stamp: Time,
        pub frame_id: String,
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
    pub struct RosString {
        pub data: String,
    }
}

pub mod geometry_msgs {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq)]
    pub struct Quaternion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub w: f64,
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }
}

pub mod sensor_msgs {
    use serde::{Deserialize, Serialize};

    use super::geometry_msgs::{Quaternion, Vector3};
    use super::std_msgs::Header;

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
    pub struct FluidPressure {
        pub header: Header,
        pub fluid_pressure: f64,
        pub variance: f64,
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
    pub struct Imu {
        pub header: Header,
        pub orientation: Quaternion,
        pub orientation_covariance: [f64; 9],
        pub angular_velocity: Vector3,
        pub angular_velocity_covariance: [f64; 9],
        pub linear_acceleration: Vector3,
        pub linear_acceleration_covariance: [f64; 9],
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
    pub struct Image {
        pub header: Header,
        pub height: u32,
        pub width: u32,
        pub encoding: String,
        pub is_bigendian: u8,
        pub step: u32,
        pub data: Vec<u8>,
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
    pub struct LaserScan {
        pub header: Header,
        pub angle_min: f32,
        pub angle_max: f32,
        pub angle_increment: f32,
        pub time_increment: f32,
        pub scan_time: f32,
        pub range_min: f32,
        pub range_max: f32,
        pub ranges: Vec<f32>,
        pub intensities: Vec<f32>,
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
    pub struct MagneticField {
        pub header: Header,
        pub magnetic_field: Vector3,
        pub magnetic_field_covariance: [f64; 9],
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
    pub struct PointField {
        pub name: String,
        pub offset: u32,
        pub datatype: u8,
        pub count: u32,
    }

    impl PointField {
        pub const INT8: u8 = 1;
        pub const UINT8: u8 = 2;
        pub const INT16: u8 = 3;
        pub const UINT16: u8 = 4;
        pub const INT32: u8 = 5;
        pub const UINT32: u8 = 6;
        pub const FLOAT32: u8 = 7;
        pub const FLOAT64: u8 = 8;

        pub fn new(name: &str, offset: u32, datatype: u8, count: u32) -> Self {
            Self {
                name: name.to_string(),
                offset,
                datatype,
                count,
            }
        }
    }

    #[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
    pub struct PointCloud2 {
        pub header: Header,
        pub height: u32,
        pub width: u32,
        pub fields: Vec<PointField>,
        pub is_bigendian: bool,
        pub point_step: u32,
        pub row_step: u32,
        pub data: Vec<u8>,
        pub is_dense: bool,
    }

    impl PointCloud2 {
        pub fn field(&self, name: &str) -> Option<&PointField> {
            self.fields.iter().find(|f| f.name == name)
        }
    }
}

impl_ros1_message! {
    std_msgs::Header => "std_msgs/Header",
    std_msgs::RosString => "std_msgs/String",
    geometry_msgs::Quaternion => "geometry_msgs/Quaternion",
    geometry_msgs::Vector3 => "geometry_msgs/Vector3",
    sensor_msgs::FluidPressure => "sensor_msgs/FluidPressure",
    sensor_msgs::Imu => "sensor_msgs/Imu",
    sensor_msgs::Image => "sensor_msgs/Image",
    sensor_msgs::LaserScan => "sensor_msgs/LaserScan",
    sensor_msgs::MagneticField => "sensor_msgs/MagneticField",
    sensor_msgs::PointCloud2 => "sensor_msgs/PointCloud2",
}
