//! Tests for ASEF header validation.

mod common;

use asef_core::decode_document;
use asef_core::error::{AseError, FormatError};
use asef_core::model::Version;
use asef_core::parser::{HEADER_LEN, parse_header};

#[test]
fn test_parse_header_fields() {
    let data = common::header(1, 0, 7);
    let (header, cursor) = parse_header(&data).unwrap();

    assert_eq!(header.version, Version::new(1, 0));
    assert_eq!(header.block_count, 7);
    assert_eq!(cursor.position(), HEADER_LEN);
    assert!(cursor.is_empty());
}

#[test]
fn test_parse_header_big_endian_version() {
    let mut data = common::header(0x0102, 0x0304, 0x0A0B_0C0D);
    data.extend_from_slice(&[0xAA, 0xBB]);
    let (header, cursor) = parse_header(&data).unwrap();

    assert_eq!(header.version, Version::new(0x0102, 0x0304));
    assert_eq!(header.block_count, 0x0A0B_0C0D);
    assert_eq!(cursor.remaining(), 2);
}

#[test]
fn test_bad_magic() {
    for data in [
        b"ASEX\x00\x01\x00\x00\x00\x00\x00\x00".to_vec(),
        b"asef\x00\x01\x00\x00\x00\x00\x00\x00".to_vec(),
        b"%PDF-1.4".to_vec(),
        b"ASE".to_vec(),
        Vec::new(),
    ] {
        let err = parse_header(&data).unwrap_err();
        assert!(
            matches!(err, AseError::Format(FormatError::BadMagic)),
            "{data:?} -> {err:?}"
        );
    }
}

#[test]
fn test_bad_magic_yields_no_document() {
    // The remainder is a well-formed color block; it must not be looked at.
    let mut data = common::SwatchBuilder::new().rgb("Red", 1.0, 0.0, 0.0).build();
    data[0] = b'X';

    let result = decode_document(&data, None);
    assert!(matches!(result, Err(AseError::Format(FormatError::BadMagic))));
}

#[test]
fn test_truncated_header() {
    let data = b"ASEF\x00\x01\x00".to_vec();
    let err = parse_header(&data).unwrap_err();
    assert!(matches!(err, AseError::Format(FormatError::TruncatedHeader(7))));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        FormatError::BadMagic.to_string(),
        "not a valid ASE file: missing \"ASEF\" signature"
    );
    assert_eq!(
        FormatError::TruncatedHeader(5).to_string(),
        "ASE header truncated: need 12 bytes, got 5"
    );
}
