//! Instruction stream decoder

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use vhdmem_spec::{InstructionList, Word, WORD_BYTES};

use crate::error::{LoaderError, Result};

/// Decode a little-endian stream of 32-bit words.
///
/// Decoding stops at the first chunk shorter than 4 bytes; a trailing
/// fragment of 1-3 bytes is dropped.
pub fn decode_words(bytes: &[u8]) -> InstructionList {
    let chunks = bytes.chunks_exact(WORD_BYTES);
    let trailing = chunks.remainder().len();
    if trailing > 0 {
        debug!(bytes = trailing, "dropping trailing partial word");
    }

    let words: Vec<Word> = chunks
        .map(|c| Word::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    InstructionList::new(words)
}

/// Decode `bytes` and pad the result with zero words up to `capacity`
pub fn decode(bytes: &[u8], capacity: usize) -> Result<InstructionList> {
    let mut list = decode_words(bytes);
    if list.len() > capacity {
        warn!(
            words = list.len(),
            capacity,
            "program exceeds memory capacity, leaving it unpadded"
        );
    }
    list.pad_to(capacity)?;
    Ok(list)
}

/// Reads an instruction binary into a padded [`InstructionList`]
#[derive(Debug, Clone, Copy)]
pub struct InstructionDecoder {
    capacity: usize,
}

impl InstructionDecoder {
    /// Decoder padding to `capacity` words
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<InstructionList> {
        decode(bytes, self.capacity)
    }

    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<InstructionList> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = self.decode_bytes(&bytes)?;
        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            decoded = list.decoded_len(),
            padded = list.padding_len(),
            "decoded instruction binary"
        );
        Ok(list)
    }
}
