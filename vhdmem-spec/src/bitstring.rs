//! # Configuration Memory Contents

use std::fmt;

use crate::error::Result;
use crate::memory::MemoryKind;

/// Character used for left padding
pub const PAD_CHAR: char = '0';

/// Configuration characters, left-padded to the config capacity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigString {
    value: String,
    original_len: usize,
}

impl ConfigString {
    /// Take the raw file contents, stripping surrounding whitespace
    pub fn new(raw: &str) -> Self {
        let value = raw.trim().to_string();
        let original_len = value.chars().count();
        Self { value, original_len }
    }

    /// Left-pad with `'0'` up to `capacity` characters.
    ///
    /// Returns the number of characters added. Longer values are kept as is.
    /// Capacities above [`MAX_CAPACITY`](crate::MAX_CAPACITY) are rejected.
    pub fn pad_to(&mut self, capacity: usize) -> Result<usize> {
        MemoryKind::Config.check_capacity(capacity)?;
        let current = self.value.chars().count();
        let missing = capacity.saturating_sub(current);
        if missing > 0 {
            let mut padded = String::with_capacity(self.value.len() + missing);
            padded.extend(std::iter::repeat(PAD_CHAR).take(missing));
            padded.push_str(&self.value);
            self.value = padded;
        }
        Ok(missing)
    }

    /// Current contents, padded once [`ConfigString::pad_to`] has run
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// True for blank input that has not been padded
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Length of the trimmed input before padding
    pub fn original_len(&self) -> usize {
        self.original_len
    }
}

impl fmt::Display for ConfigString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_pad() {
        let mut cfg = ConfigString::new("  1A2B\n");
        assert_eq!(cfg.original_len(), 4);
        assert_eq!(cfg.pad_to(8).unwrap(), 4);
        assert_eq!(cfg.as_str(), "00001A2B");
        assert_eq!(cfg.len(), 8);
    }

    #[test]
    fn test_exact_length_unchanged() {
        let mut cfg = ConfigString::new("0101");
        assert_eq!(cfg.pad_to(4).unwrap(), 0);
        assert_eq!(cfg.as_str(), "0101");
    }

    #[test]
    fn test_oversized_not_truncated() {
        let mut cfg = ConfigString::new("123456789");
        assert_eq!(cfg.pad_to(4).unwrap(), 0);
        assert_eq!(cfg.as_str(), "123456789");
    }

    #[test]
    fn test_pad_beyond_max_capacity() {
        let mut cfg = ConfigString::new("1");
        assert!(cfg.pad_to(crate::MAX_CAPACITY + 1).is_err());
        assert_eq!(cfg.as_str(), "1");
    }

    #[test]
    fn test_empty_input() {
        let mut cfg = ConfigString::new("\n\t ");
        assert!(cfg.is_empty());
        cfg.pad_to(3).unwrap();
        assert_eq!(cfg.to_string(), "000");
    }
}
