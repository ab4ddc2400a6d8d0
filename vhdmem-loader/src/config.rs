//! Configuration bit-string loader

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use vhdmem_spec::ConfigString;

use crate::error::{LoaderError, Result};

/// Reads a configuration text file into a padded [`ConfigString`]
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader {
    capacity: usize,
}

impl ConfigLoader {
    /// Loader padding to `capacity` characters
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn load_str(&self, text: &str) -> Result<ConfigString> {
        let mut config = ConfigString::new(text);
        if config.len() > self.capacity {
            warn!(
                chars = config.len(),
                capacity = self.capacity,
                "configuration exceeds memory capacity, leaving it unpadded"
            );
        }
        config.pad_to(self.capacity)?;
        Ok(config)
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ConfigString> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = self.load_str(&text)?;
        debug!(
            path = %path.display(),
            original = config.original_len(),
            padded = config.len(),
            "loaded configuration"
        );
        Ok(config)
    }
}
