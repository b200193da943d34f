//! Ignition message definitions.
//!
//! Hand-written prost types with the field tags of the `ignition.msgs`
//! protobuf package, so payloads are wire compatible with Ignition Transport.

use crate::impl_ign_message;

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Time {
    #[prost(int64, tag = "1")]
    pub sec: i64,
    #[prost(int32, tag = "2")]
    pub nsec: i32,
}

pub mod header {
    /// Key/values entry of a [`Header`](super::Header).
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Map {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "2")]
        pub value: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    #[prost(message, optional, tag = "1")]
    pub stamp: ::core::option::Option<Time>,
    #[prost(message, repeated, tag = "2")]
    pub data: ::prost::alloc::vec::Vec<header::Map>,
}

impl Header {
    /// First value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.value.first())
            .map(String::as_str)
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringMsg {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(string, tag = "2")]
    pub data: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Quaternion {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
    #[prost(double, tag = "4")]
    pub z: f64,
    #[prost(double, tag = "5")]
    pub w: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vector3d {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
    #[prost(double, tag = "4")]
    pub z: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pose {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub id: u32,
    #[prost(message, optional, tag = "4")]
    pub position: ::core::option::Option<Vector3d>,
    #[prost(message, optional, tag = "5")]
    pub orientation: ::core::option::Option<Quaternion>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FluidPressure {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(double, tag = "2")]
    pub pressure: f64,
    #[prost(double, tag = "3")]
    pub variance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Imu {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(string, tag = "2")]
    pub entity_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub orientation: ::core::option::Option<Quaternion>,
    #[prost(message, optional, tag = "4")]
    pub angular_velocity: ::core::option::Option<Vector3d>,
    #[prost(message, optional, tag = "5")]
    pub linear_acceleration: ::core::option::Option<Vector3d>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PixelFormatType {
    UnknownPixelFormat = 0,
    LInt8 = 1,
    LInt16 = 2,
    RgbInt8 = 3,
    RgbaInt8 = 4,
    BgraInt8 = 5,
    RgbInt16 = 6,
    RgbInt32 = 7,
    BgrInt8 = 8,
    BgrInt16 = 9,
    BgrInt32 = 10,
    RFloat16 = 11,
    RgbFloat16 = 12,
    RFloat32 = 13,
    RgbFloat32 = 14,
    BayerRggb8 = 15,
    BayerBggr8 = 16,
    BayerGbrg8 = 17,
    BayerGrbg8 = 18,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Image {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(uint32, tag = "2")]
    pub width: u32,
    #[prost(uint32, tag = "3")]
    pub height: u32,
    /// Legacy pixel format field, mirrors `pixel_format_type`.
    #[prost(uint32, tag = "4")]
    pub pixel_format: u32,
    #[prost(uint32, tag = "5")]
    pub step: u32,
    #[prost(bytes = "vec", tag = "6")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "PixelFormatType", tag = "7")]
    pub pixel_format_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LaserScan {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(string, tag = "2")]
    pub frame: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub world_pose: ::core::option::Option<Pose>,
    #[prost(double, tag = "4")]
    pub angle_min: f64,
    #[prost(double, tag = "5")]
    pub angle_max: f64,
    #[prost(double, tag = "6")]
    pub angle_step: f64,
    #[prost(double, tag = "7")]
    pub range_min: f64,
    #[prost(double, tag = "8")]
    pub range_max: f64,
    #[prost(uint32, tag = "9")]
    pub count: u32,
    #[prost(double, tag = "10")]
    pub vertical_angle_min: f64,
    #[prost(double, tag = "11")]
    pub vertical_angle_max: f64,
    #[prost(double, tag = "12")]
    pub vertical_angle_step: f64,
    #[prost(uint32, tag = "13")]
    pub vertical_count: u32,
    #[prost(double, repeated, tag = "14")]
    pub ranges: ::prost::alloc::vec::Vec<f64>,
    #[prost(double, repeated, tag = "15")]
    pub intensities: ::prost::alloc::vec::Vec<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Magnetometer {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub field_tesla: ::core::option::Option<Vector3d>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PointCloud {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(message, repeated, tag = "2")]
    pub points: ::prost::alloc::vec::Vec<Vector3d>,
    #[prost(float, repeated, tag = "3")]
    pub intensity: ::prost::alloc::vec::Vec<f32>,
}

impl_ign_message! {
    Header => "ignition.msgs.Header",
    StringMsg => "ignition.msgs.StringMsg",
    Quaternion => "ignition.msgs.Quaternion",
    Vector3d => "ignition.msgs.Vector3d",
    FluidPressure => "ignition.msgs.FluidPressure",
    Imu => "ignition.msgs.IMU",
    Image => "ignition.msgs.Image",
    LaserScan => "ignition.msgs.LaserScan",
    Magnetometer => "ignition.msgs.Magnetometer",
    PointCloud => "ignition.msgs.PointCloud",
}
