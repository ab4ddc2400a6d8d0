//! # vhdmem Render
//!
//! Substitute memory contents into VHDL templates and write the results.
//!
//! Templates are Jinja2-style and rendered with [`tera`]. Each memory
//! template sees one variable: `config` (a string) or `instructions`
//! (a list of 8-digit hex words). One trailing newline of a template is
//! dropped, as Jinja does by default.
//!
//! ## Example
//!
//! ```rust
//! use vhdmem_render::{Renderer, TemplateSet};
//! use vhdmem_spec::InstructionList;
//!
//! let renderer = Renderer::new(TemplateSet::builtin().unwrap());
//! let doc = renderer
//!     .render_program(&InstructionList::new(vec![0x13]))
//!     .unwrap();
//! assert!(doc.text.contains("0 => x\"00000013\""));
//! ```

pub mod error;
pub mod renderer;
pub mod writer;

pub use error::{RenderError, Result};
pub use renderer::{
    RenderedDocument, Renderer, TemplateSet, BUILTIN_CONFIG_TEMPLATE, BUILTIN_PROGRAM_TEMPLATE,
};
pub use writer::{write_document, write_output};
