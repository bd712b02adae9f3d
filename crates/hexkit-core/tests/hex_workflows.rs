//! # Cross-Module Workflow Tests
//!
//! Exercises `Hex` the way downstream code actually combines it: parsing a
//! wire dump, decoding a TLV-style fixed layout with the strict extractors,
//! masking and whitening with the bitwise algebra, and pushing bytes through
//! an injected digest provider.

use hexkit_core::{DigestAlgorithm, DigestProvider, FormatError, Hex, HexError, RangeError};

// ---------------------------------------------------------------------------
// TLV-style field extraction
// ---------------------------------------------------------------------------

#[test]
fn test_tlv_record_decoding() {
    // tag(1) | length(1) | value(length) | trailer(2)
    let record = Hex::parse("6F 04 DE AD BE EF CA FE").unwrap();

    let tag = record.u1(0).unwrap();
    assert_eq!(tag.to_hex_string(), "6F");

    let length = record.byte_at(1).unwrap() as usize;
    assert_eq!(length, 4);

    let value = record.un(2, length).unwrap();
    assert_eq!(value.to_hex_string(), "DEADBEEF");

    let trailer = record.right(2);
    assert_eq!(trailer.to_hex_string(), "CAFE");
}

#[test]
fn test_tlv_decoding_fails_loudly_on_truncated_record() {
    // Length byte claims 4 value bytes but only 2 are present.
    let truncated = Hex::parse("6F 04 DE AD").unwrap();
    let length = truncated.byte_at(1).unwrap() as usize;
    let err = truncated.un(2, length).unwrap_err();
    assert_eq!(
        err,
        RangeError::SpanOutOfBounds {
            offset: 2,
            length: 4,
            size: 4
        }
    );
}

#[test]
fn test_forgiving_preview_of_truncated_record() {
    // The clamping family is the right tool for a best-effort preview of the
    // same truncated record.
    let truncated = Hex::parse("6F 04 DE AD").unwrap();
    assert_eq!(truncated.mid(2, 4).to_hex_string(), "DEAD");
    assert_eq!(truncated.left(16), truncated);
}

// ---------------------------------------------------------------------------
// Building fixed-width fields
// ---------------------------------------------------------------------------

#[test]
fn test_assemble_fixed_width_message() {
    let header = Hex::parse("A5").unwrap();
    let counter = Hex::from_bytes(&[0x01, 0x0F]);
    let payload = Hex::from_ascii("OK").unwrap();

    let message = header.concat(&counter).concat(&payload.rpad(8));
    assert_eq!(message.len(), 1 + 2 + 8);
    assert_eq!(message.to_hex_string(), "A5010F4F4B000000000000");
}

#[test]
fn test_key_whitening_round_trip() {
    let key = Hex::parse("0123456789ABCDEF").unwrap();
    let mask = Hex::parse("FFFFFFFF00000000").unwrap();

    let whitened = key.xor(&mask).unwrap();
    assert_ne!(whitened, key);
    // XOR with the same mask restores the key.
    assert_eq!(whitened.xor(&mask).unwrap(), key);
}

#[test]
fn test_mismatched_mask_is_rejected_not_truncated() {
    let key = Hex::parse("0123456789ABCDEF").unwrap();
    let short_mask = Hex::parse("FFFF").unwrap();
    let err: HexError = key.xor(&short_mask).unwrap_err().into();
    assert!(matches!(err, HexError::SizeMismatch(_)));
}

// ---------------------------------------------------------------------------
// Parsing real-world dump formats
// ---------------------------------------------------------------------------

#[test]
fn test_parse_mac_address_style() {
    let mac = Hex::parse("C8-58-B3-B2-99-DB").unwrap();
    assert_eq!(mac.to_hex_string(), "C858B3B299DB");
    assert_eq!(mac.len(), 6);
}

#[test]
fn test_parse_multiline_hexdump() {
    let dump = "0102 0304\n0506 0708\n090A 0B0C";
    let h = Hex::parse(dump).unwrap();
    assert_eq!(h.len(), 12);
    assert_eq!(h.left(4).to_hex_string(), "01020304");
}

#[test]
fn test_umbrella_error_from_parse() {
    let err: HexError = Hex::parse("0102030").unwrap_err().into();
    assert_eq!(err, HexError::Format(FormatError::OddLength(7)));
}

// ---------------------------------------------------------------------------
// Digest seam with an injected provider
// ---------------------------------------------------------------------------

/// Counts calls and records the requested algorithm; returns a fixed-length
/// zero digest. Verifies the seam without real cryptography.
struct RecordingDigests {
    calls: std::cell::RefCell<Vec<(DigestAlgorithm, Vec<u8>)>>,
}

impl RecordingDigests {
    fn new() -> Self {
        Self {
            calls: std::cell::RefCell::new(Vec::new()),
        }
    }
}

impl DigestProvider for RecordingDigests {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
        self.calls.borrow_mut().push((algorithm, data.to_vec()));
        vec![0u8; algorithm.output_len()]
    }
}

#[test]
fn test_digest_seam_passes_full_content() {
    let provider = RecordingDigests::new();
    let v = Hex::parse("C858B3B299DB").unwrap();

    let d = v.digest_with(&provider, DigestAlgorithm::Sha256);
    assert_eq!(d.len(), 32);

    let calls = provider.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, DigestAlgorithm::Sha256);
    assert_eq!(calls[0].1, v.to_bytes());
}

#[test]
fn test_digest_seam_per_algorithm() {
    let provider = RecordingDigests::new();
    let v = Hex::from_ascii("abc").unwrap();

    assert_eq!(v.digest_with(&provider, DigestAlgorithm::Md5).len(), 16);
    assert_eq!(v.digest_with(&provider, DigestAlgorithm::Sha1).len(), 20);
    assert_eq!(v.digest_with(&provider, DigestAlgorithm::Sha256).len(), 32);
    assert_eq!(provider.calls.borrow().len(), 3);
}
