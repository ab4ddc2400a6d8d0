//! Output writing

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{RenderError, Result};
use crate::renderer::RenderedDocument;

/// Create or truncate `path` and write `text` to it.
///
/// Parent directories are not created.
pub fn write_output(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| RenderError::WriteIo {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

/// Write a rendered memory document
pub fn write_document(doc: &RenderedDocument, path: impl AsRef<Path>) -> Result<()> {
    write_output(path, &doc.text)
}
