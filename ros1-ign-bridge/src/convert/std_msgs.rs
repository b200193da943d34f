use crate::convert::ConversionError;
use crate::ign_msg::{self, header::Map};
use crate::msg::BridgePair;
use crate::ros1_msg::std_msgs::{Header, RosString, Time};

const SEQ_KEY: &str = "seq";
const FRAME_ID_KEY: &str = "frame_id";

impl BridgePair<ign_msg::Header> for Header {
    fn ros1_to_ign(&self) -> Result<ign_msg::Header, ConversionError> {
        Ok(ign_msg::Header {
            stamp: Some(ign_msg::Time {
                sec: i64::from(self.stamp.secs),
                nsec: i32::try_from(self.stamp.nsecs).map_err(|_| {
                    ConversionError::TimeOutOfRange {
                        sec: i64::from(self.stamp.secs),
                        nsec: i64::from(self.stamp.nsecs),
                    }
                })?,
            }),
            data: vec![
                Map {
                    key: SEQ_KEY.to_string(),
                    value: vec![self.seq.to_string()],
                },
                Map {
                    key: FRAME_ID_KEY.to_string(),
                    value: vec![self.frame_id.clone()],
                },
            ],
        })
    }

    fn ign_to_ros1(ign: &ign_msg::Header) -> Result<Self, ConversionError> {
        let stamp = match ign.stamp {
            Some(ign_msg::Time { sec, nsec }) => {
                let out_of_range = |_| ConversionError::TimeOutOfRange {
                    sec,
                    nsec: i64::from(nsec),
                };
                Time {
                    secs: u32::try_from(sec).map_err(out_of_range)?,
                    nsecs: u32::try_from(nsec).map_err(out_of_range)?,
                }
            }
            None => Time::default(),
        };

        let seq = match ign.value(SEQ_KEY) {
            Some(value) => value
                .parse()
                .map_err(|_| ConversionError::InvalidHeaderValue {
                    key: SEQ_KEY.to_string(),
                    value: value.to_string(),
                })?,
            None => 0,
        };

        Ok(Header {
            seq,
            stamp,
            frame_id: ign.value(FRAME_ID_KEY).unwrap_or_default().to_string(),
        })
    }
}

/// Header of an Ignition message that may omit it.
pub(crate) fn header_from_ign(header: Option<&ign_msg::Header>) -> Result<Header, ConversionError> {
    header.map_or_else(|| Ok(Header::default()), Header::ign_to_ros1)
}

impl BridgePair<ign_msg::StringMsg> for RosString {
    fn ros1_to_ign(&self) -> Result<ign_msg::StringMsg, ConversionError> {
        Ok(ign_msg::StringMsg {
            header: None,
            data: self.data.clone(),
        })
    }

    fn ign_to_ros1(ign: &ign_msg::StringMsg) -> Result<Self, ConversionError> {
        Ok(RosString {
            data: ign.data.clone(),
        })
    }
}
