//! # Error Types for the vhdmem data model

use crate::memory::MemoryKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("{kind} memory width {width} exceeds the maximum of {max} bits")]
    WidthTooLarge {
        kind: MemoryKind,
        width: u32,
        max: u32,
    },

    #[error("{kind} memory capacity must be at least 1")]
    ZeroCapacity { kind: MemoryKind },

    #[error("{kind} memory capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        kind: MemoryKind,
        capacity: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, SpecError>;
