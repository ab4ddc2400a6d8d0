//! Integration tests for the memory image loaders
//!
//! Tests loading from disk:
//! - Instruction binaries, including trailing fragments
//! - Configuration text files
//! - I/O errors carrying the failing path

use std::io::Write;

use tempfile::NamedTempFile;
use vhdmem_loader::{ConfigLoader, InstructionDecoder, LoaderError};

fn temp_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Instruction Binary Tests
// ============================================================================

#[test]
fn test_decode_file_pads_to_capacity() {
    let file = temp_file(&[
        0x01, 0x00, 0x00, 0x00, //
        0x02, 0x00, 0x00, 0x00, //
        0xFF, 0xFF, 0xFF, 0xFF,
    ]);

    let list = InstructionDecoder::new(5).decode_file(file.path()).unwrap();
    assert_eq!(
        list.hex_words(),
        vec!["00000001", "00000002", "FFFFFFFF", "00000000", "00000000"]
    );
    assert_eq!(list.decoded_len(), 3);
}

#[test]
fn test_decode_file_trailing_fragment() {
    let file = temp_file(&[0xEF, 0xBE, 0xAD, 0xDE, 0x01, 0x02]);

    let list = InstructionDecoder::new(1).decode_file(file.path()).unwrap();
    assert_eq!(list.hex_words(), vec!["DEADBEEF"]);
}

#[test]
fn test_decode_empty_file() {
    let file = temp_file(&[]);

    let list = InstructionDecoder::new(4).decode_file(file.path()).unwrap();
    assert_eq!(list.hex_words(), vec!["00000000"; 4]);
    assert_eq!(list.decoded_len(), 0);
}

#[test]
fn test_decode_large_file() {
    let data: Vec<u8> = (0..1024u32).flat_map(|i| i.to_le_bytes()).collect();
    let file = temp_file(&data);

    let list = InstructionDecoder::new(256).decode_file(file.path()).unwrap();
    assert_eq!(list.len(), 1024);
    assert_eq!(list.hex_words()[1023], "000003FF");
}

#[test]
fn test_decode_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adding.6.out.0");

    let err = InstructionDecoder::new(4).decode_file(&path).unwrap_err();
    let LoaderError::Io { path: failed, .. } = &err else {
        panic!("Expected Io error, got {err:?}");
    };
    assert_eq!(failed, &path);
    assert!(err.to_string().contains("adding.6.out.0"));
}

#[test]
fn test_decode_file_capacity_above_ceiling() {
    let file = temp_file(&[0x13, 0x00, 0x00, 0x00]);

    let err = InstructionDecoder::new(vhdmem_spec::MAX_CAPACITY + 1)
        .decode_file(file.path())
        .unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));
}

// ============================================================================
// Configuration File Tests
// ============================================================================

#[test]
fn test_load_config_file() {
    let file = temp_file(b"DEADBEEF\n");

    let config = ConfigLoader::new(16).load_file(file.path()).unwrap();
    assert_eq!(config.as_str(), "00000000DEADBEEF");
    assert_eq!(config.original_len(), 8);
}

#[test]
fn test_load_config_file_oversized() {
    let file = temp_file(b"  0123456789ABCDEF  \r\n");

    let config = ConfigLoader::new(4).load_file(file.path()).unwrap();
    assert_eq!(config.as_str(), "0123456789ABCDEF");
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new(4).load_file(dir.path().join("adding.6.cfg"));
    assert!(matches!(result, Err(LoaderError::Io { .. })));
}
