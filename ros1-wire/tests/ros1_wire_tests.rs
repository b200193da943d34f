//! Integration tests for ros1-wire

use ros1_wire::{Error, Ros1Deserializer, from_bytes, from_slice, to_vec, to_vec_reuse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Example {
    a: u32,
    b: [u8; 4],
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Stamp {
    secs: u32,
    nsecs: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Header {
    seq: u32,
    stamp: Stamp,
    frame_id: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Unaligned {
    flag: u8,
    value: f64,
    covariance: [f64; 2],
    samples: Vec<i16>,
}

#[test]
fn test_fixed_array_has_no_length_prefix() {
    let bytes = to_vec(&Example { a: 1, b: [9, 8, 7, 6] }).unwrap();
    assert_eq!(bytes, vec![1, 0, 0, 0, 9, 8, 7, 6]);
}

#[test]
fn test_header_layout() {
    let header = Header {
        seq: 3,
        stamp: Stamp { secs: 42, nsecs: 7 },
        frame_id: "map".into(),
    };
    let bytes = to_vec(&header).unwrap();
    assert_eq!(
        bytes,
        vec![
            3, 0, 0, 0, // seq
            42, 0, 0, 0, // secs
            7, 0, 0, 0, // nsecs
            3, 0, 0, 0, b'm', b'a', b'p', // frame_id, no terminator
        ]
    );

    let decoded: Header = from_slice(&bytes).unwrap();
    assert_eq!(decoded, header);
}

#[test]
fn test_no_alignment_padding() {
    let msg = Unaligned {
        flag: 1,
        value: 0.5,
        covariance: [1.0, -1.0],
        samples: vec![-2, 300],
    };
    let bytes = to_vec(&msg).unwrap();
    // 1 + 8 + 16 + (4 + 2 * 2)
    assert_eq!(bytes.len(), 33);
    assert_eq!(&bytes[1..9], &0.5f64.to_le_bytes());

    let (decoded, consumed): (Unaligned, usize) = from_bytes(&bytes).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(decoded, msg);
}

#[test]
fn test_byte_vector_is_length_prefixed() {
    let bytes = to_vec(&vec![0xAAu8, 0xBB]).unwrap();
    assert_eq!(bytes, vec![2, 0, 0, 0, 0xAA, 0xBB]);
}

#[test]
fn test_to_vec_reuse_clears_buffer() {
    let mut buffer = vec![0xFF; 16];
    to_vec_reuse(&5u32, &mut buffer).unwrap();
    assert_eq!(buffer, vec![5, 0, 0, 0]);
}

#[test]
fn test_truncated_input() {
    let bytes = to_vec(&Example { a: 1, b: [1, 2, 3, 4] }).unwrap();
    let result: Result<Example, _> = from_slice(&bytes[..6]);
    assert!(matches!(result, Err(Error::UnexpectedEof)));
}

#[test]
fn test_string_length_past_end() {
    let bytes = [10u8, 0, 0, 0, b'a'];
    let result: Result<String, _> = from_slice(&bytes);
    assert!(matches!(result, Err(Error::UnexpectedEof)));
}

#[test]
fn test_trailing_bytes_rejected() {
    let bytes = [1u8, 0, 0, 0, 0xFF];
    let result: Result<u32, _> = from_slice(&bytes);
    assert!(matches!(result, Err(Error::TrailingBytes(1))));

    let (value, consumed): (u32, usize) = from_bytes(&bytes).unwrap();
    assert_eq!(value, 1);
    assert_eq!(consumed, 4);
}

#[test]
fn test_invalid_bool() {
    let result: Result<bool, _> = from_slice(&[2u8]);
    assert!(matches!(result, Err(Error::InvalidBool(2))));
}

#[test]
fn test_invalid_utf8() {
    let bytes = [2u8, 0, 0, 0, 0xC3, 0x28];
    let result: Result<String, _> = from_slice(&bytes);
    assert!(matches!(result, Err(Error::Utf8(_))));
}

#[test]
fn test_bytes_consumed_tracking() {
    let bytes = to_vec(&Stamp { secs: 1, nsecs: 2 }).unwrap();
    let mut de = Ros1Deserializer::new(&bytes);
    let stamp = Stamp::deserialize(&mut de).unwrap();
    assert_eq!(stamp, Stamp { secs: 1, nsecs: 2 });
    assert_eq!(de.bytes_consumed(), 8);
}
