//! # vhdmem Loader
//!
//! Read the two memory images and pad them to their target capacity.
//!
//! - [`InstructionDecoder`]: little-endian 32-bit words, zero-word padded
//! - [`ConfigLoader`]: trimmed text, left-padded with `'0'`
//!
//! ## Example
//!
//! ```rust
//! use vhdmem_loader::InstructionDecoder;
//!
//! let bytes = [0x13, 0x00, 0x00, 0x00];
//! let list = InstructionDecoder::new(2).decode_bytes(&bytes).unwrap();
//! assert_eq!(list.hex_words(), vec!["00000013", "00000000"]);
//! ```

pub mod error;
pub mod decoder;
pub mod config;

pub use error::{LoaderError, Result};
pub use decoder::{decode, decode_words, InstructionDecoder};
pub use config::ConfigLoader;
