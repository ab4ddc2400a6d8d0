//! # Generator configuration
//!
//! Paths of the inputs and outputs plus the size strategy. Defaults match
//! the layout of the SDVU hardware project:
//!
//! ```text
//! cfg/adding.6.cfg        -> src/auto_config_memory.vhd
//! cfg/adding.6.out.0      -> src/auto_program_memory.vhd
//! src/sdvu_constants.vhd     (memory widths)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vhdmem_constants::MissingPolicy;

use crate::error::ConfigError;
use crate::provider::SizeProvider;

pub const DEFAULT_CFG_MEM_FILE: &str = "cfg/adding.6.cfg";
pub const DEFAULT_OUT_CFG_MEM_FILE: &str = "src/auto_config_memory.vhd";
pub const DEFAULT_PRG_MEM_FILE: &str = "cfg/adding.6.out.0";
pub const DEFAULT_OUT_PRG_MEM_FILE: &str = "src/auto_program_memory.vhd";
pub const DEFAULT_CONSTANTS_FILE: &str = "src/sdvu_constants.vhd";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Configuration bit-string (text)
    pub cfg_mem_file: PathBuf,
    /// Rendered configuration memory
    pub out_cfg_mem_file: PathBuf,
    /// Instruction binary
    pub prg_mem_file: PathBuf,
    /// Rendered program memory
    pub out_prg_mem_file: PathBuf,
    /// Config capacity in characters; inferred when absent
    pub cfg_mem_size: Option<usize>,
    /// Program capacity in words; inferred when absent
    pub prg_mem_size: Option<usize>,
    /// Constants package declaring the memory widths
    pub constants_source_path: Option<PathBuf>,
    /// Template directory; built-in templates when absent
    pub template_dir: Option<PathBuf>,
    /// Treat a missing width declaration as width 0
    pub allow_missing_sizes: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            cfg_mem_file: PathBuf::from(DEFAULT_CFG_MEM_FILE),
            out_cfg_mem_file: PathBuf::from(DEFAULT_OUT_CFG_MEM_FILE),
            prg_mem_file: PathBuf::from(DEFAULT_PRG_MEM_FILE),
            out_prg_mem_file: PathBuf::from(DEFAULT_OUT_PRG_MEM_FILE),
            cfg_mem_size: None,
            prg_mem_size: None,
            constants_source_path: Some(PathBuf::from(DEFAULT_CONSTANTS_FILE)),
            template_dir: None,
            allow_missing_sizes: false,
        }
    }
}

impl GenConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    /// Pick the size strategy: explicit when both sizes are set, inferred
    /// from the constants package when neither is.
    pub fn size_provider(&self) -> Result<SizeProvider, ConfigError> {
        match (self.cfg_mem_size, self.prg_mem_size) {
            (Some(cfg_capacity), Some(prg_capacity)) => Ok(SizeProvider::Explicit {
                cfg_capacity,
                prg_capacity,
            }),
            (None, None) => {
                let constants_path = self
                    .constants_source_path
                    .clone()
                    .ok_or(ConfigError::MissingConstantsPath)?;
                let policy = if self.allow_missing_sizes {
                    MissingPolicy::Lenient
                } else {
                    MissingPolicy::Strict
                };
                Ok(SizeProvider::Inferred {
                    constants_path,
                    policy,
                })
            }
            _ => Err(ConfigError::PartialSizes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_infers_from_constants() {
        let provider = GenConfig::default().size_provider().unwrap();
        assert_eq!(
            provider,
            SizeProvider::Inferred {
                constants_path: PathBuf::from(DEFAULT_CONSTANTS_FILE),
                policy: MissingPolicy::Strict,
            }
        );
    }

    #[test]
    fn test_explicit_sizes() {
        let config = GenConfig {
            cfg_mem_size: Some(128),
            prg_mem_size: Some(256),
            constants_source_path: None,
            ..GenConfig::default()
        };
        assert_eq!(
            config.size_provider().unwrap(),
            SizeProvider::Explicit {
                cfg_capacity: 128,
                prg_capacity: 256,
            }
        );
    }

    #[test]
    fn test_partial_sizes_rejected() {
        let config = GenConfig {
            prg_mem_size: Some(256),
            ..GenConfig::default()
        };
        assert!(matches!(config.size_provider(), Err(ConfigError::PartialSizes)));
    }

    #[test]
    fn test_missing_constants_path() {
        let config = GenConfig {
            constants_source_path: None,
            ..GenConfig::default()
        };
        assert!(matches!(
            config.size_provider(),
            Err(ConfigError::MissingConstantsPath)
        ));
    }

    #[test]
    fn test_lenient_policy() {
        let config = GenConfig {
            allow_missing_sizes: true,
            ..GenConfig::default()
        };
        assert!(matches!(
            config.size_provider().unwrap(),
            SizeProvider::Inferred { policy: MissingPolicy::Lenient, .. }
        ));
    }

    #[test]
    fn test_json_partial_fields() {
        let json = r#"{ "prg_mem_file": "build/prog.bin", "cfg_mem_size": 128, "prg_mem_size": 256 }"#;
        let config = GenConfig::from_json_str(json, Path::new("vhdmem.json")).unwrap();
        assert_eq!(config.prg_mem_file, PathBuf::from("build/prog.bin"));
        assert_eq!(config.cfg_mem_file, PathBuf::from(DEFAULT_CFG_MEM_FILE));
        assert_eq!(config.cfg_mem_size, Some(128));
    }

    #[test]
    fn test_json_unknown_field() {
        let err = GenConfig::from_json_str(r#"{ "prg_size": 3 }"#, Path::new("vhdmem.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid configuration vhdmem.json"));
    }
}
