//! # vhdmem Data Model
//!
//! Shared types for turning a compiled instruction stream and a configuration
//! bit-string into hardcoded VHDL memories.
//!
//! ## Key Types
//! - [`MemoryKind`]: the two memories (configuration and program)
//! - [`MemorySpec`]: address width and capacity of one memory
//! - [`InstructionList`]: 32-bit program words, zero-padded to capacity
//! - [`ConfigString`]: configuration characters, left-padded with `'0'`

pub mod error;
pub mod memory;
pub mod instructions;
pub mod bitstring;

pub use error::{SpecError, Result};
pub use memory::{MemoryKind, MemorySpec, MAX_CAPACITY, MAX_WIDTH_BITS};
pub use instructions::{word_hex, InstructionList, Word, WORD_BYTES, ZERO_WORD_HEX};
pub use bitstring::{ConfigString, PAD_CHAR};
