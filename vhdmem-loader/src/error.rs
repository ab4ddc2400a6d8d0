//! Loader errors

use std::path::PathBuf;

use thiserror::Error;
use vhdmem_spec::SpecError;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Spec(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
