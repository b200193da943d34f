use crate::convert::ConversionError;
use crate::convert::std_msgs::header_from_ign;
use crate::ign_msg::{self, PixelFormatType};
use crate::msg::BridgePair;
use crate::ros1_msg::geometry_msgs::{Quaternion, Vector3};
use crate::ros1_msg::sensor_msgs::{
    FluidPressure, Image, Imu, LaserScan, MagneticField, PointCloud2, PointField,
};

impl BridgePair<ign_msg::FluidPressure> for FluidPressure {
    fn ros1_to_ign(&self) -> Result<ign_msg::FluidPressure, ConversionError> {
        Ok(ign_msg::FluidPressure {
            header: Some(self.header.ros1_to_ign()?),
            pressure: self.fluid_pressure,
            variance: self.variance,
        })
    }

    fn ign_to_ros1(ign: &ign_msg::FluidPressure) -> Result<Self, ConversionError> {
        Ok(FluidPressure {
            header: header_from_ign(ign.header.as_ref())?,
            fluid_pressure: ign.pressure,
            variance: ign.variance,
        })
    }
}

// Covariances have no Ignition counterpart and come back zeroed.
impl BridgePair<ign_msg::Imu> for Imu {
    fn ros1_to_ign(&self) -> Result<ign_msg::Imu, ConversionError> {
        Ok(ign_msg::Imu {
            header: Some(self.header.ros1_to_ign()?),
            entity_name: String::new(),
            orientation: Some((&self.orientation).into()),
            angular_velocity: Some((&self.angular_velocity).into()),
            linear_acceleration: Some((&self.linear_acceleration).into()),
        })
    }

    fn ign_to_ros1(ign: &ign_msg::Imu) -> Result<Self, ConversionError> {
        Ok(Imu {
            header: header_from_ign(ign.header.as_ref())?,
            orientation: ign.orientation.as_ref().map(Quaternion::from).unwrap_or_default(),
            angular_velocity: ign.angular_velocity.as_ref().map(Vector3::from).unwrap_or_default(),
            linear_acceleration: ign
                .linear_acceleration
                .as_ref()
                .map(Vector3::from)
                .unwrap_or_default(),
            ..Default::default()
        })
    }
}

/// ROS 1 image encodings that have an Ignition pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter)]
pub enum ImageEncoding {
    #[strum(serialize = "mono8")]
    Mono8,
    #[strum(serialize = "mono16")]
    Mono16,
    #[strum(serialize = "rgb8")]
    Rgb8,
    #[strum(serialize = "rgba8")]
    Rgba8,
    #[strum(serialize = "bgra8")]
    Bgra8,
    #[strum(serialize = "rgb16")]
    Rgb16,
    #[strum(serialize = "bgr8")]
    Bgr8,
    #[strum(serialize = "bgr16")]
    Bgr16,
    #[strum(serialize = "16FC1")]
    Float16C1,
    #[strum(serialize = "32FC1")]
    Float32C1,
    #[strum(serialize = "32FC3")]
    Float32C3,
    #[strum(serialize = "bayer_rggb8")]
    BayerRggb8,
    #[strum(serialize = "bayer_bggr8")]
    BayerBggr8,
    #[strum(serialize = "bayer_gbrg8")]
    BayerGbrg8,
    #[strum(serialize = "bayer_grbg8")]
    BayerGrbg8,
}

impl ImageEncoding {
    pub fn pixel_format(self) -> PixelFormatType {
        match self {
            Self::Mono8 => PixelFormatType::LInt8,
            Self::Mono16 => PixelFormatType::LInt16,
            Self::Rgb8 => PixelFormatType::RgbInt8,
            Self::Rgba8 => PixelFormatType::RgbaInt8,
            Self::Bgra8 => PixelFormatType::BgraInt8,
            Self::Rgb16 => PixelFormatType::RgbInt16,
            Self::Bgr8 => PixelFormatType::BgrInt8,
            Self::Bgr16 => PixelFormatType::BgrInt16,
            Self::Float16C1 => PixelFormatType::RFloat16,
            Self::Float32C1 => PixelFormatType::RFloat32,
            Self::Float32C3 => PixelFormatType::RgbFloat32,
            Self::BayerRggb8 => PixelFormatType::BayerRggb8,
            Self::BayerBggr8 => PixelFormatType::BayerBggr8,
            Self::BayerGbrg8 => PixelFormatType::BayerGbrg8,
            Self::BayerGrbg8 => PixelFormatType::BayerGrbg8,
        }
    }

    pub fn from_pixel_format(format: PixelFormatType) -> Option<Self> {
        Some(match format {
            PixelFormatType::LInt8 => Self::Mono8,
            PixelFormatType::LInt16 => Self::Mono16,
            PixelFormatType::RgbInt8 => Self::Rgb8,
            PixelFormatType::RgbaInt8 => Self::Rgba8,
            PixelFormatType::BgraInt8 => Self::Bgra8,
            PixelFormatType::RgbInt16 => Self::Rgb16,
            PixelFormatType::BgrInt8 => Self::Bgr8,
            PixelFormatType::BgrInt16 => Self::Bgr16,
            PixelFormatType::RFloat16 => Self::Float16C1,
            PixelFormatType::RFloat32 => Self::Float32C1,
            PixelFormatType::RgbFloat32 => Self::Float32C3,
            PixelFormatType::BayerRggb8 => Self::BayerRggb8,
            PixelFormatType::BayerBggr8 => Self::BayerBggr8,
            PixelFormatType::BayerGbrg8 => Self::BayerGbrg8,
            PixelFormatType::BayerGrbg8 => Self::BayerGrbg8,
            PixelFormatType::UnknownPixelFormat
            | PixelFormatType::RgbInt32
            | PixelFormatType::BgrInt32
            | PixelFormatType::RgbFloat16 => return None,
        })
    }
}

/// Raw pixel format of an Ignition image, preferring the typed field over the
/// legacy one.
fn raw_pixel_format(ign: &ign_msg::Image) -> i32 {
    if ign.pixel_format_type != PixelFormatType::UnknownPixelFormat as i32 {
        ign.pixel_format_type
    } else {
        i32::try_from(ign.pixel_format).unwrap_or(i32::MAX)
    }
}

impl BridgePair<ign_msg::Image> for Image {
    fn ros1_to_ign(&self) -> Result<ign_msg::Image, ConversionError> {
        let encoding: ImageEncoding = self
            .encoding
            .parse()
            .map_err(|_| ConversionError::UnsupportedEncoding(self.encoding.clone()))?;
        let format = encoding.pixel_format();

        Ok(ign_msg::Image {
            header: Some(self.header.ros1_to_ign()?),
            width: self.width,
            height: self.height,
            pixel_format: format as u32,
            step: self.step,
            data: self.data.clone(),
            pixel_format_type: format as i32,
        })
    }

    fn ign_to_ros1(ign: &ign_msg::Image) -> Result<Self, ConversionError> {
        let raw = raw_pixel_format(ign);
        let encoding = PixelFormatType::try_from(raw)
            .ok()
            .and_then(ImageEncoding::from_pixel_format)
            .ok_or(ConversionError::UnsupportedPixelFormat(raw))?;

        Ok(Image {
            header: header_from_ign(ign.header.as_ref())?,
            height: ign.height,
            width: ign.width,
            encoding: encoding.to_string(),
            is_bigendian: 0,
            step: ign.step,
            data: ign.data.clone(),
        })
    }
}

// Ranges are widened to f64 on the way out and narrowed back on the way in.
impl BridgePair<ign_msg::LaserScan> for LaserScan {
    fn ros1_to_ign(&self) -> Result<ign_msg::LaserScan, ConversionError> {
        Ok(ign_msg::LaserScan {
            header: Some(self.header.ros1_to_ign()?),
            frame: self.header.frame_id.clone(),
            world_pose: None,
            angle_min: f64::from(self.angle_min),
            angle_max: f64::from(self.angle_max),
            angle_step: f64::from(self.angle_increment),
            range_min: f64::from(self.range_min),
            range_max: f64::from(self.range_max),
            count: u32::try_from(self.ranges.len()).unwrap_or(u32::MAX),
            vertical_angle_min: 0.0,
            vertical_angle_max: 0.0,
            vertical_angle_step: 0.0,
            vertical_count: 1,
            ranges: self.ranges.iter().copied().map(f64::from).collect(),
            intensities: self.intensities.iter().copied().map(f64::from).collect(),
        })
    }

    fn ign_to_ros1(ign: &ign_msg::LaserScan) -> Result<Self, ConversionError> {
        let mut header = header_from_ign(ign.header.as_ref())?;
        if header.frame_id.is_empty() {
            header.frame_id = ign.frame.clone();
        }

        Ok(LaserScan {
            header,
            angle_min: ign.angle_min as f32,
            angle_max: ign.angle_max as f32,
            angle_increment: ign.angle_step as f32,
            time_increment: 0.0,
            scan_time: 0.0,
            range_min: ign.range_min as f32,
            range_max: ign.range_max as f32,
            ranges: ign.ranges.iter().map(|&r| r as f32).collect(),
            intensities: ign.intensities.iter().map(|&i| i as f32).collect(),
        })
    }
}

impl BridgePair<ign_msg::Magnetometer> for MagneticField {
    fn ros1_to_ign(&self) -> Result<ign_msg::Magnetometer, ConversionError> {
        Ok(ign_msg::Magnetometer {
            header: Some(self.header.ros1_to_ign()?),
            field_tesla: Some((&self.magnetic_field).into()),
        })
    }

    fn ign_to_ros1(ign: &ign_msg::Magnetometer) -> Result<Self, ConversionError> {
        Ok(MagneticField {
            header: header_from_ign(ign.header.as_ref())?,
            magnetic_field: ign.field_tesla.as_ref().map(Vector3::from).unwrap_or_default(),
            magnetic_field_covariance: [0.0; 9],
        })
    }
}

const INTENSITY_FIELD: &str = "intensity";

fn float32_offset(cloud: &PointCloud2, name: &str) -> Option<usize> {
    cloud
        .field(name)
        .filter(|f| f.datatype == PointField::FLOAT32 && f.count == 1)
        .map(|f| f.offset as usize)
}

fn read_f32(cloud: &PointCloud2, at: usize) -> Result<f32, ConversionError> {
    let bytes: [u8; 4] = at
        .checked_add(4)
        .and_then(|end| cloud.data.get(at..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| {
            ConversionError::MalformedPointCloud(format!(
                "{} data bytes, point field at byte {at}",
                cloud.data.len()
            ))
        })?;
    Ok(if cloud.is_bigendian {
        f32::from_be_bytes(bytes)
    } else {
        f32::from_le_bytes(bytes)
    })
}

/// Number of points in the cloud once its strides are known to fit in `data`.
fn checked_point_count(cloud: &PointCloud2, fields_end: usize) -> Result<usize, ConversionError> {
    let (width, height) = (cloud.width as usize, cloud.height as usize);
    let (point_step, row_step) = (cloud.point_step as usize, cloud.row_step as usize);
    if width == 0 || height == 0 {
        return Ok(0);
    }
    if point_step < fields_end {
        return Err(ConversionError::MalformedPointCloud(format!(
            "point_step {point_step} shorter than fields ending at byte {fields_end}"
        )));
    }

    let malformed = || {
        ConversionError::MalformedPointCloud(format!(
            "{width}x{height} points of {point_step} bytes with row_step {row_step} overflow"
        ))
    };
    let row_len = width.checked_mul(point_step).ok_or_else(malformed)?;
    if row_step < row_len {
        return Err(ConversionError::MalformedPointCloud(format!(
            "row_step {row_step} shorter than {width} points of {point_step} bytes"
        )));
    }
    let needed = (height - 1)
        .checked_mul(row_step)
        .and_then(|n| n.checked_add(row_len))
        .ok_or_else(malformed)?;
    if cloud.data.len() < needed {
        return Err(ConversionError::MalformedPointCloud(format!(
            "{} data bytes, layout needs {needed}",
            cloud.data.len()
        )));
    }
    // needed >= width * height * 4, so this cannot overflow
    Ok(width * height)
}

// Only packed FLOAT32 x/y/z (and optional intensity) survive the trip; the
// cloud comes back dense, little-endian and with height 1.
impl BridgePair<ign_msg::PointCloud> for PointCloud2 {
    fn ros1_to_ign(&self) -> Result<ign_msg::PointCloud, ConversionError> {
        let x = float32_offset(self, "x").ok_or(ConversionError::MissingPointField("x"))?;
        let y = float32_offset(self, "y").ok_or(ConversionError::MissingPointField("y"))?;
        let z = float32_offset(self, "z").ok_or(ConversionError::MissingPointField("z"))?;
        let intensity = float32_offset(self, INTENSITY_FIELD);

        let fields_end = [x, y, z, intensity.unwrap_or(0)]
            .into_iter()
            .max()
            .unwrap_or(0)
            .saturating_add(4);
        let count = checked_point_count(self, fields_end)?;
        let mut points = Vec::with_capacity(count);
        let mut intensities = Vec::with_capacity(if intensity.is_some() { count } else { 0 });

        for row in 0..self.height as usize {
            for col in 0..self.width as usize {
                let base = row * self.row_step as usize + col * self.point_step as usize;
                points.push(ign_msg::Vector3d {
                    header: None,
                    x: f64::from(read_f32(self, base + x)?),
                    y: f64::from(read_f32(self, base + y)?),
                    z: f64::from(read_f32(self, base + z)?),
                });
                if let Some(offset) = intensity {
                    intensities.push(read_f32(self, base + offset)?);
                }
            }
        }

        Ok(ign_msg::PointCloud {
            header: Some(self.header.ros1_to_ign()?),
            points,
            intensity: intensities,
        })
    }

    fn ign_to_ros1(ign: &ign_msg::PointCloud) -> Result<Self, ConversionError> {
        let with_intensity = !ign.intensity.is_empty();
        if with_intensity && ign.intensity.len() != ign.points.len() {
            return Err(ConversionError::MalformedPointCloud(format!(
                "{} intensities for {} points",
                ign.intensity.len(),
                ign.points.len()
            )));
        }

        let mut fields = vec![
            PointField::new("x", 0, PointField::FLOAT32, 1),
            PointField::new("y", 4, PointField::FLOAT32, 1),
            PointField::new("z", 8, PointField::FLOAT32, 1),
        ];
        if with_intensity {
            fields.push(PointField::new(INTENSITY_FIELD, 12, PointField::FLOAT32, 1));
        }
        let point_step: u32 = if with_intensity { 16 } else { 12 };

        let width = u32::try_from(ign.points.len())
            .ok()
            .filter(|w| w.checked_mul(point_step).is_some())
            .ok_or_else(|| {
                ConversionError::MalformedPointCloud(format!("{} points", ign.points.len()))
            })?;

        let mut data = Vec::with_capacity(width as usize * point_step as usize);
        for (i, point) in ign.points.iter().enumerate() {
            data.extend_from_slice(&(point.x as f32).to_le_bytes());
            data.extend_from_slice(&(point.y as f32).to_le_bytes());
            data.extend_from_slice(&(point.z as f32).to_le_bytes());
            if with_intensity {
                data.extend_from_slice(&ign.intensity[i].to_le_bytes());
            }
        }

        Ok(PointCloud2 {
            header: header_from_ign(ign.header.as_ref())?,
            height: 1,
            width,
            fields,
            is_bigendian: false,
            point_step,
            row_step: point_step * width,
            data,
            is_dense: true,
        })
    }
}
