//! # vhdmem Generator
//!
//! Turn a compiled instruction binary and a configuration bit-string into
//! two VHDL sources with hardcoded memory contents.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vhdmem_gen::{generate, GenConfig};
//!
//! // Sizes inferred from src/sdvu_constants.vhd
//! let report = generate(GenConfig::default()).unwrap();
//! println!("{}", report);
//!
//! // Sizes given directly
//! let config = GenConfig {
//!     cfg_mem_size: Some(128),
//!     prg_mem_size: Some(256),
//!     ..GenConfig::default()
//! };
//! generate(config).unwrap();
//! ```

pub mod error;
pub mod config;
pub mod provider;
pub mod pipeline;

pub use error::{ConfigError, GenError, Result};
pub use config::GenConfig;
pub use provider::{ResolvedSizes, SizeProvider};
pub use pipeline::{generate, GenReport, Pipeline};
