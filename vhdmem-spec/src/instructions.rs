//! # Program Memory Contents
//!
//! Ordered 32-bit instruction words. Padding is append-only: the list grows
//! with zero words up to the program capacity and is never truncated.

use std::fmt;

use crate::error::Result;
use crate::memory::MemoryKind;

/// One instruction slot
pub type Word = u32;

/// Bytes per instruction word in the binary stream
pub const WORD_BYTES: usize = 4;

/// Rendered form of a padding word
pub const ZERO_WORD_HEX: &str = "00000000";

/// Format a word as 8 uppercase hex digits
#[inline]
pub fn word_hex(word: Word) -> String {
    format!("{:08X}", word)
}

/// Instruction words with the length of the originally decoded prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionList {
    words: Vec<Word>,
    decoded_len: usize,
}

impl InstructionList {
    /// Wrap freshly decoded words; all of them count as decoded
    pub fn new(words: Vec<Word>) -> Self {
        let decoded_len = words.len();
        Self { words, decoded_len }
    }

    /// Append zero words until the list holds `capacity` entries.
    ///
    /// Returns the number of words appended. A list already at or above
    /// capacity is left untouched. Capacities above
    /// [`MAX_CAPACITY`](crate::MAX_CAPACITY) are rejected.
    pub fn pad_to(&mut self, capacity: usize) -> Result<usize> {
        MemoryKind::Program.check_capacity(capacity)?;
        let missing = capacity.saturating_sub(self.words.len());
        self.words.resize(self.words.len() + missing, 0);
        Ok(missing)
    }

    /// All words, decoded prefix first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words including padding
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when nothing was decoded and no padding was added
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words that came from the input stream
    pub fn decoded_len(&self) -> usize {
        self.decoded_len
    }

    /// Number of zero words added by padding
    pub fn padding_len(&self) -> usize {
        self.words.len() - self.decoded_len
    }

    /// Words as 8-digit uppercase hex strings, in order
    pub fn hex_words(&self) -> Vec<String> {
        self.words.iter().map(|&w| word_hex(w)).collect()
    }

    /// Little-endian byte image of the decoded prefix
    pub fn decoded_le_bytes(&self) -> Vec<u8> {
        self.words[..self.decoded_len]
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .collect()
    }
}

impl fmt::Display for InstructionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:08X}", word)?;
        }
        Ok(())
    }
}
