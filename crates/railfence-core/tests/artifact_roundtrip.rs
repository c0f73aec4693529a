// crates/railfence-core/tests/artifact_roundtrip.rs

use railfence_core::artifact;

// Mirrors the .rfz layout so individual fields can be forged with a valid
// trailing crc.
fn build_rfz(version: u16, rails: u32, data: &[u8], data_len: u64) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"RFZ1");
    out.extend_from_slice(&version.to_le_bytes());
    out.extend_from_slice(&rails.to_le_bytes());
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(data);

    let mut h = crc32fast::Hasher::new();
    h.update(&out);
    out.extend_from_slice(&h.finalize().to_le_bytes());
    out
}

#[test]
fn roundtrip_preserves_rails_and_ciphertext() {
    let bytes = artifact::encode(3, "HOELL");
    let (rails, cipher) = artifact::decode(&bytes).expect("decode ok");
    assert_eq!(rails, 3);
    assert_eq!(cipher, "HOELL");
}

#[test]
fn roundtrip_empty_ciphertext() {
    let bytes = artifact::encode(7, "");
    let (rails, cipher) = artifact::decode(&bytes).expect("decode ok");
    assert_eq!(rails, 7);
    assert_eq!(cipher, "");
}

#[test]
fn roundtrip_multibyte_ciphertext() {
    let bytes = artifact::encode(4, "héllo ✓ 猫");
    let (rails, cipher) = artifact::decode(&bytes).expect("decode ok");
    assert_eq!(rails, 4);
    assert_eq!(cipher, "héllo ✓ 猫");
}

#[test]
fn rejects_truncated_input() {
    let bytes = artifact::encode(3, "HOELL");
    assert!(artifact::decode(&bytes[..10]).is_err());
    assert!(artifact::decode(&bytes[..bytes.len() - 1]).is_err());
    assert!(artifact::decode(&[]).is_err());
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = artifact::encode(3, "HOELL");
    bytes[0] ^= 0xFF;
    let err = artifact::decode(&bytes).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("magic"), "got: {msg}");
}

#[test]
fn rejects_corrupted_payload() {
    let mut bytes = artifact::encode(3, "HOELL");
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0x01;
    let err = artifact::decode(&bytes).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("crc32"), "got: {msg}");
}

#[test]
fn rejects_unknown_version() {
    let bytes = build_rfz(2, 3, b"HOELL", 5);
    let err = artifact::decode(&bytes).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("version"), "got: {msg}");
}

#[test]
fn rejects_zero_rails() {
    let bytes = build_rfz(artifact::VERSION, 0, b"HOELL", 5);
    let err = artifact::decode(&bytes).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("rails"), "got: {msg}");
}

#[test]
fn rejects_length_mismatch() {
    // data_len disagrees with the actual payload span.
    let bytes = build_rfz(artifact::VERSION, 3, b"HOELL", 4);
    let err = artifact::decode(&bytes).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("data_len"), "got: {msg}");
}

#[test]
fn rejects_non_utf8_payload() {
    let bytes = build_rfz(artifact::VERSION, 3, &[0xFF, 0xFE, 0x80], 3);
    let err = artifact::decode(&bytes).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("UTF-8"), "got: {msg}");
}

#[test]
fn matches_cipher_output_end_to_end() {
    let plain = "WEAREDISCOVEREDFLEEATONCE";
    let cipher = railfence_core::encode(plain, 3).unwrap();

    let bytes = artifact::encode(3, &cipher);
    let (rails, stored) = artifact::decode(&bytes).expect("decode ok");
    assert_eq!(railfence_core::decode(&stored, rails).unwrap(), plain);
}
