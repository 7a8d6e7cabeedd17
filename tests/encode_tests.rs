// Integration tests for the encoding pipeline
//
// These tests verify the byte-level properties of the OSC 1.0 encoding:
// 4-byte alignment of every segment, big-endian numeric layout, and two
// reference datagrams worked out by hand against OSC 1.0. The rosc
// decoder acts as an independent cross-check that our bytes are what a
// third-party OSC implementation expects.

use assert2::{assert, check};
use float_cmp::approx_eq;
use rosc::{OscPacket, OscType};

use kuldonc_rust::osc::assemble;
use kuldonc_rust::osc::encode::{encode_f32, encode_i32, encode_str, type_tag};
use kuldonc_rust::{OscArg, OscMessage, SendError};

#[test]
fn test_string_encoding_is_aligned_and_terminated() {
    for s in ["", "a", "ab", "abc", "abcd", "/volume", "/some/longer/path"] {
        let encoded = encode_str(s);
        check!(encoded.len() % 4 == 0, "'{s}' not aligned");
        check!(&encoded[..s.len()] == s.as_bytes());
        check!(encoded[s.len()] == 0, "'{s}' missing NUL terminator");
    }
}

#[test]
fn test_empty_string_encodes_to_four_nuls() {
    assert!(encode_str("") == vec![0u8; 4]);
}

#[test]
fn test_int_round_trips_through_big_endian() {
    for n in [0, 1, -1, 8000, -8000, i32::MAX, i32::MIN] {
        assert!(i32::from_be_bytes(encode_i32(n)) == n);
    }
}

#[test]
fn test_float_round_trips_through_big_endian() {
    for f in [0.0f32, 0.75, -0.75, 1.0, 440.0, f32::MIN, f32::MAX] {
        let back = f32::from_be_bytes(encode_f32(f));
        assert!(approx_eq!(f32, back, f, ulps = 0), "{f} came back as {back}");
    }
}

#[test]
fn test_type_tag_starts_with_comma_and_pads_to_alignment() {
    for args in [
        vec![],
        vec![OscArg::Int(1)],
        vec![OscArg::Float(1.0), OscArg::Str("x".to_string())],
        vec![OscArg::Int(1), OscArg::Int(2), OscArg::Int(3), OscArg::Int(4)],
    ] {
        let tag = type_tag(&args).unwrap();
        check!(tag.starts_with(','));
        check!(tag.len() == args.len() + 1);
        check!(encode_str(&tag).len() % 4 == 0);
    }
}

// Hand-worked reference: /volume 0.75
#[test]
fn test_volume_float_datagram() {
    let msg = OscMessage::new("/volume").arg(0.75f32);
    let buf = assemble(&msg, None).unwrap();

    assert!(buf.len() == 16);
    check!(&buf[..8] == &[0x2F, 0x76, 0x6F, 0x6C, 0x75, 0x6D, 0x65, 0x00]);
    check!(&buf[8..12] == &[0x2C, 0x66, 0x00, 0x00]);
    check!(&buf[12..] == &[0x3F, 0x40, 0x00, 0x00]);
}

// Hand-worked reference: /test 1 2
#[test]
fn test_two_int_datagram() {
    let msg = OscMessage::new("/test").arg(1).arg(2);
    let buf = assemble(&msg, None).unwrap();

    assert!(buf.len() == 20, "expected 8 + 4 + 4 + 4 bytes");
    check!(&buf[8..12] == &[0x2C, 0x69, 0x69, 0x00]);
    check!(&buf[12..16] == &[0x00, 0x00, 0x00, 0x01]);
    check!(&buf[16..20] == &[0x00, 0x00, 0x00, 0x02]);
}

#[test]
fn test_rosc_decodes_our_datagrams() {
    let msg = OscMessage::new("/mixer/ch/3")
        .arg(3)
        .arg(0.5f32)
        .arg("gain");
    let buf = assemble(&msg, None).unwrap();

    let (rest, packet) = rosc::decoder::decode_udp(&buf).expect("rosc rejected our bytes");
    assert!(rest.is_empty());
    let decoded = match packet {
        OscPacket::Message(m) => m,
        OscPacket::Bundle(_) => panic!("a single message must not decode as a bundle"),
    };

    assert!(decoded.addr == "/mixer/ch/3");
    assert!(decoded.args.len() == 3);
    check!(decoded.args[0] == OscType::Int(3));
    match decoded.args[1] {
        OscType::Float(f) => {
            check!(approx_eq!(f32, f, 0.5, ulps = 0));
        }
        ref other => panic!("expected float, got {other:?}"),
    }
    check!(decoded.args[2] == OscType::String("gain".to_string()));
}

#[test]
fn test_message_with_no_arguments_still_carries_a_tag_segment() {
    let buf = assemble(&OscMessage::new("/ping"), None).unwrap();
    // "/ping" padded to 8, then "," + NUL + pad to 4
    assert!(buf.len() == 12);
    check!(&buf[8..12] == &[0x2C, 0x00, 0x00, 0x00]);
}

// An argument with no wire mapping must fail the whole call
#[test]
fn test_unsupported_argument_fails_the_call() {
    let msg = OscMessage::new("/toggle").arg(1).arg(false).arg(2);
    match assemble(&msg, None) {
        Err(SendError::UnsupportedArg { index }) => assert!(index == 1),
        other => panic!("expected UnsupportedArg, got {other:?}"),
    }
}
