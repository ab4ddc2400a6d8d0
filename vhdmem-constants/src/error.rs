//! Constants resolution errors

use std::path::PathBuf;

use thiserror::Error;
use vhdmem_spec::SpecError;

#[derive(Debug, Error)]
pub enum ConstantsError {
    #[error("Failed to read constants file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed declaration of {name} at line {line}: expected an integer, found `{value}`")]
    MalformedDeclaration {
        name: String,
        line: usize,
        value: String,
    },

    #[error("Missing declaration: constant {0}")]
    MissingDeclaration(String),

    #[error("Width of {name} out of range: {value}")]
    WidthOutOfRange { name: String, value: u64 },

    #[error(transparent)]
    Spec(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, ConstantsError>;
