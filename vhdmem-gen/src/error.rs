//! Generator errors

use std::path::PathBuf;

use thiserror::Error;
use vhdmem_constants::ConstantsError;
use vhdmem_loader::LoaderError;
use vhdmem_render::RenderError;
use vhdmem_spec::{MemoryKind, SpecError};

/// Invalid generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cfg_mem_size and prg_mem_size must be given together")]
    PartialSizes,

    #[error("constants_source_path is required when memory sizes are not given")]
    MissingConstantsPath,

    #[error("Failed to read configuration {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Constants(#[from] ConstantsError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Templates could not be loaded")]
    Templates(#[source] RenderError),

    #[error("Loading {kind} memory failed")]
    Load {
        kind: MemoryKind,
        #[source]
        source: LoaderError,
    },

    #[error("Rendering {kind} memory failed")]
    Render {
        kind: MemoryKind,
        #[source]
        source: RenderError,
    },

    #[error("Writing {kind} memory failed")]
    Write {
        kind: MemoryKind,
        #[source]
        source: RenderError,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
