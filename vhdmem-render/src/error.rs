//! Rendering errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid template {template}")]
    Template {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to render template {template}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to read template {}", .path.display())]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    WriteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// This error and its sources joined with `": "`
    pub fn chain(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            text.push_str(": ");
            text.push_str(&err.to_string());
            source = err.source();
        }
        text
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
