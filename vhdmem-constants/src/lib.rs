//! # vhdmem Constants
//!
//! Infer memory sizes from the VHDL constants package of the target design.
//!
//! ## Example
//!
//! ```rust
//! use vhdmem_constants::resolve_widths;
//!
//! let source = r#"
//!     constant PROG_MEM_SIZE : integer := 8;
//!     constant CFG_MEM_SIZE  : integer := 4;
//! "#;
//!
//! let widths = resolve_widths(source).unwrap();
//! assert_eq!(widths.as_pair(), (4, 8));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolver;

pub use error::{ConstantsError, Result};
pub use parser::{parse_constants, ConstantTable, Declaration};
pub use resolver::{resolve_widths, MemoryWidths, MissingPolicy, SizeResolver};
