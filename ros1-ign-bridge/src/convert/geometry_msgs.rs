use crate::convert::ConversionError;
use crate::ign_msg;
use crate::msg::BridgePair;
use crate::ros1_msg::geometry_msgs::{Quaternion, Vector3};

impl From<&Quaternion> for ign_msg::Quaternion {
    fn from(q: &Quaternion) -> Self {
        ign_msg::Quaternion {
            header: None,
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}

impl From<&ign_msg::Quaternion> for Quaternion {
    fn from(q: &ign_msg::Quaternion) -> Self {
        Quaternion {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }
}

impl From<&Vector3> for ign_msg::Vector3d {
    fn from(v: &Vector3) -> Self {
        ign_msg::Vector3d {
            header: None,
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<&ign_msg::Vector3d> for Vector3 {
    fn from(v: &ign_msg::Vector3d) -> Self {
        Vector3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl BridgePair<ign_msg::Quaternion> for Quaternion {
    fn ros1_to_ign(&self) -> Result<ign_msg::Quaternion, ConversionError> {
        Ok(self.into())
    }

    fn ign_to_ros1(ign: &ign_msg::Quaternion) -> Result<Self, ConversionError> {
        Ok(ign.into())
    }
}

impl BridgePair<ign_msg::Vector3d> for Vector3 {
    fn ros1_to_ign(&self) -> Result<ign_msg::Vector3d, ConversionError> {
        Ok(self.into())
    }

    fn ign_to_ros1(ign: &ign_msg::Vector3d) -> Result<Self, ConversionError> {
        Ok(ign.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quaternion_fields() {
        let q = Quaternion {
            x: 0.1,
            y: -0.2,
            z: 0.3,
            w: 0.9,
        };
        let ign: ign_msg::Quaternion = q.ros1_to_ign().unwrap();
        assert_eq!((ign.x, ign.y, ign.z, ign.w), (0.1, -0.2, 0.3, 0.9));
        assert!(ign.header.is_none());
        assert_eq!(Quaternion::ign_to_ros1(&ign).unwrap(), q);
    }

    #[test]
    fn test_vector3_ignores_ign_header() {
        let ign = ign_msg::Vector3d {
            header: Some(ign_msg::Header::default()),
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        assert_eq!(
            Vector3::ign_to_ros1(&ign).unwrap(),
            Vector3 {
                x: 1.0,
                y: 2.0,
                z: 3.0
            }
        );
    }
}
