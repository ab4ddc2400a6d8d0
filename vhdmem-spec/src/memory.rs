//! # Memory Kinds and Capacities
//!
//! Both memories are sized from an address width `w` declared in the
//! hardware constants package:
//!
//! ```text
//! Memory    Constant        Capacity        Unit
//! ─────────────────────────────────────────────────────────
//! program   PROG_MEM_SIZE   2^w             32-bit words
//! config    CFG_MEM_SIZE    2^w / 4         hex characters
//! ```
//!
//! The config memory holds `2^w` bits, rendered as hex digits of 4 bits each.
//!
//! Widths are capped at [`MAX_WIDTH_BITS`] and explicit capacities at
//! [`MAX_CAPACITY`], so every accepted size can be held in memory as
//! rendered hex strings.

use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest address width accepted for either memory
pub const MAX_WIDTH_BITS: u32 = 20;

/// Largest capacity of either memory, in words or characters
pub const MAX_CAPACITY: usize = 1 << MAX_WIDTH_BITS;

/// Bits carried by one config character
const BITS_PER_CONFIG_CHAR: u64 = 4;

/// The two memories embedded in the generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    /// Configuration memory, filled from the config bit-string
    Config,
    /// Program memory, filled from the instruction binary
    Program,
}

impl MemoryKind {
    pub const ALL: [MemoryKind; 2] = [MemoryKind::Config, MemoryKind::Program];

    /// Name of the width declaration in the constants package
    pub const fn constant_name(self) -> &'static str {
        match self {
            MemoryKind::Config => "CFG_MEM_SIZE",
            MemoryKind::Program => "PROG_MEM_SIZE",
        }
    }

    /// File name of the template rendering this memory
    pub const fn template_name(self) -> &'static str {
        match self {
            MemoryKind::Config => "auto_config_memory.vhd.template",
            MemoryKind::Program => "auto_program_memory.vhd.template",
        }
    }

    /// Template variable receiving this memory's contents
    pub const fn variable_name(self) -> &'static str {
        match self {
            MemoryKind::Config => "config",
            MemoryKind::Program => "instructions",
        }
    }

    /// Capacity for a given address width, in this memory's units
    pub fn capacity_for_width(self, width: u32) -> Result<usize> {
        if width > MAX_WIDTH_BITS {
            return Err(SpecError::WidthTooLarge {
                kind: self,
                width,
                max: MAX_WIDTH_BITS,
            });
        }

        let raw = 1u64 << width;
        let capacity = match self {
            MemoryKind::Program => raw,
            // 2^0 / 4 and 2^1 / 4 round down to zero
            MemoryKind::Config => (raw / BITS_PER_CONFIG_CHAR).max(1),
        };

        usize::try_from(capacity).map_err(|_| SpecError::WidthTooLarge {
            kind: self,
            width,
            max: MAX_WIDTH_BITS,
        })
    }

    /// Reject capacities above [`MAX_CAPACITY`]
    pub fn check_capacity(self, capacity: usize) -> Result<()> {
        if capacity > MAX_CAPACITY {
            return Err(SpecError::CapacityTooLarge {
                kind: self,
                capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryKind::Config => write!(f, "config"),
            MemoryKind::Program => write!(f, "program"),
        }
    }
}

/// Size of one memory, computed once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemorySpec {
    /// Which memory this describes
    pub kind: MemoryKind,
    /// Declared address width, `None` when the capacity was given directly
    pub width_bits: Option<u32>,
    /// Number of entries (words for program, characters for config)
    pub capacity: usize,
}

impl MemorySpec {
    /// Derive the capacity from a declared address width
    pub fn from_width(kind: MemoryKind, width: u32) -> Result<Self> {
        Ok(Self {
            kind,
            width_bits: Some(width),
            capacity: kind.capacity_for_width(width)?,
        })
    }

    /// Use an explicitly supplied capacity
    pub fn from_capacity(kind: MemoryKind, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SpecError::ZeroCapacity { kind });
        }
        kind.check_capacity(capacity)?;
        Ok(Self {
            kind,
            width_bits: None,
            capacity,
        })
    }
}

impl fmt::Display for MemorySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.kind {
            MemoryKind::Config => "chars",
            MemoryKind::Program => "words",
        };
        match self.width_bits {
            Some(width) => write!(f, "{}: width {} -> {} {}", self.kind, width, self.capacity, unit),
            None => write!(f, "{}: {} {} (explicit)", self.kind, self.capacity, unit),
        }
    }
}
